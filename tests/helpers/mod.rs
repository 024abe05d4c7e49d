use std::io::{Cursor, Read};

use lopdf::{Document, Object, ObjectId, Stream, dictionary};

pub const BOUNDARY: &str = "paperknife-test-boundary-7MA4YWxkTrZu0gW";

/// Build an in-memory PDF with `page_count` pages, each carrying a
/// distinguishable content stream, and an optional /Info title.
pub fn test_pdf(title: Option<&str>, page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let mut kids = Vec::with_capacity(page_count);
    for n in 1..=page_count {
        let content = Stream::new(
            dictionary! {},
            format!("BT /F1 12 Tf (Page {n}) Tj ET").into_bytes(),
        );
        let content_id = doc.add_object(content);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(title) = title {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
        });
        doc.trailer.set("Info", Object::Reference(info_id));
    }

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("failed to save test PDF");
    buffer
}

/// Assemble a multipart/form-data body from (field name, content type,
/// payload) triples, using [`BOUNDARY`].
pub fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, content_type, payload) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Unpack a zip archive into (name, bytes) pairs in entry order.
pub fn read_archive(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("invalid zip archive");
    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut file = archive.by_index(index).expect("missing zip entry");
        let mut data = Vec::new();
        file.read_to_end(&mut data).expect("unreadable zip entry");
        entries.push((file.name().to_string(), data));
    }
    entries
}

/// Load a single-page output PDF and return (page count, page content).
pub fn inspect_single_page(bytes: &[u8]) -> (usize, Vec<u8>) {
    let doc = Document::load_mem(bytes).expect("output entry is not a valid PDF");
    let pages: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    let content = doc
        .get_page_content(pages[0])
        .expect("output page has no content");
    (pages.len(), content)
}
