use paperknife::application::ports::{NameListParseError, NameListParser};
use paperknife::infrastructure::naming::CsvNameListParser;

#[tokio::test]
async fn given_single_column_csv_when_parsed_then_order_is_preserved() {
    let parser = CsvNameListParser::new();

    let names = parser.parse(b"alice\nbob\ncarol\n").await.unwrap();

    assert_eq!(names.len(), 3);
    assert_eq!(names.get(0), Some("alice"));
    assert_eq!(names.get(1), Some("bob"));
    assert_eq!(names.get(2), Some("carol"));
}

#[tokio::test]
async fn given_empty_input_when_parsed_then_list_is_empty() {
    let parser = CsvNameListParser::new();

    let names = parser.parse(b"").await.unwrap();

    assert!(names.is_empty());
}

#[tokio::test]
async fn given_multi_column_rows_when_parsed_then_only_first_column_is_taken() {
    let parser = CsvNameListParser::new();

    let names = parser.parse(b"alice,1,x\nbob,2\n").await.unwrap();

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(0), Some("alice"));
    assert_eq!(names.get(1), Some("bob"));
}

#[tokio::test]
async fn given_quoted_field_with_comma_when_parsed_then_quoting_is_honored() {
    let parser = CsvNameListParser::new();

    let names = parser.parse(b"\"smith, john\"\nbob\n").await.unwrap();

    assert_eq!(names.get(0), Some("smith, john"));
    assert_eq!(names.get(1), Some("bob"));
}

#[tokio::test]
async fn given_invalid_utf8_when_parsed_then_returns_malformed_error() {
    let parser = CsvNameListParser::new();

    let result = parser.parse(&[0x66, 0x6f, 0xff, 0xfe, 0x6f]).await;

    assert!(matches!(result, Err(NameListParseError::Malformed(_))));
}
