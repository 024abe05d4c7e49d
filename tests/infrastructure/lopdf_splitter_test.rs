use std::time::Duration;

use paperknife::application::ports::{PageSplitter, PageSplitterError};
use paperknife::infrastructure::pdf::LopdfSplitter;

use crate::helpers::{inspect_single_page, test_pdf};

fn splitter() -> LopdfSplitter {
    LopdfSplitter::new(Duration::from_secs(5), 50)
}

#[tokio::test]
async fn given_titled_pdf_when_split_then_title_and_page_order_survive() {
    let pdf = test_pdf(Some("Report"), 3);

    let outcome = splitter().split_pages(&pdf).await.unwrap();

    assert_eq!(outcome.title.as_deref(), Some("Report"));
    assert_eq!(outcome.pages.len(), 3);

    for (index, page) in outcome.pages.iter().enumerate() {
        let (page_count, content) = inspect_single_page(page);
        assert_eq!(page_count, 1);
        let marker = format!("Page {}", index + 1);
        assert!(
            String::from_utf8_lossy(&content).contains(&marker),
            "page {index} lost its content stream"
        );
    }
}

#[tokio::test]
async fn given_untitled_pdf_when_split_then_title_is_absent() {
    let pdf = test_pdf(None, 1);

    let outcome = splitter().split_pages(&pdf).await.unwrap();

    assert_eq!(outcome.title, None);
    assert_eq!(outcome.pages.len(), 1);
}

#[tokio::test]
async fn given_zero_page_pdf_when_split_then_outcome_is_empty() {
    let pdf = test_pdf(Some("Empty"), 0);

    let outcome = splitter().split_pages(&pdf).await.unwrap();

    assert!(outcome.pages.is_empty());
}

#[tokio::test]
async fn given_garbage_bytes_when_split_then_returns_invalid_document() {
    let result = splitter().split_pages(b"definitely not a pdf").await;

    assert!(matches!(result, Err(PageSplitterError::InvalidDocument(_))));
}

#[tokio::test]
async fn given_page_count_over_limit_when_split_then_returns_too_many_pages() {
    let pdf = test_pdf(Some("Big"), 3);
    let strict = LopdfSplitter::new(Duration::from_secs(5), 2);

    let result = strict.split_pages(&pdf).await;

    assert!(matches!(
        result,
        Err(PageSplitterError::TooManyPages(3, 2))
    ));
}
