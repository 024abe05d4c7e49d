use paperknife::application::ports::ArchiveWriter;
use paperknife::domain::OutputEntry;
use paperknife::infrastructure::archive::ZipArchiveWriter;

use crate::helpers::read_archive;

#[tokio::test]
async fn given_entries_when_written_then_archive_round_trips_in_order() {
    let writer = ZipArchiveWriter::new();
    let entries = vec![
        OutputEntry {
            filename: "alice.pdf".to_string(),
            bytes: b"first page".to_vec(),
        },
        OutputEntry {
            filename: "bob.pdf".to_string(),
            bytes: b"second page".to_vec(),
        },
    ];

    let archive = writer.write(&entries).await.unwrap();

    let unpacked = read_archive(&archive);
    assert_eq!(unpacked.len(), 2);
    assert_eq!(unpacked[0].0, "alice.pdf");
    assert_eq!(unpacked[0].1, b"first page");
    assert_eq!(unpacked[1].0, "bob.pdf");
    assert_eq!(unpacked[1].1, b"second page");
}

#[tokio::test]
async fn given_no_entries_when_written_then_archive_is_valid_and_empty() {
    let writer = ZipArchiveWriter::new();

    let archive = writer.write(&[]).await.unwrap();

    assert!(read_archive(&archive).is_empty());
}
