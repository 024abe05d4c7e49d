use paperknife::domain::{
    InvalidFilename, NameList, TITLE_PLACEHOLDER, page_filename, validate_entry_name,
};

#[test]
fn given_name_list_entry_when_naming_page_then_entry_wins() {
    let names = NameList::new(vec!["alice".to_string(), "bob".to_string()]);

    let filename = page_filename(&names, Some("Report"), 0).unwrap();

    assert_eq!(filename, "alice.pdf");
}

#[test]
fn given_index_beyond_name_list_when_naming_page_then_falls_back_to_title() {
    let names = NameList::new(vec!["alice".to_string()]);

    let filename = page_filename(&names, Some("Report"), 2).unwrap();

    assert_eq!(filename, "Report-3.pdf");
}

#[test]
fn given_empty_name_list_when_naming_page_then_uses_one_based_title_scheme() {
    let names = NameList::empty();

    let filename = page_filename(&names, Some("Report"), 0).unwrap();

    assert_eq!(filename, "Report-1.pdf");
}

#[test]
fn given_no_title_when_naming_page_then_uses_placeholder() {
    let names = NameList::empty();

    let filename = page_filename(&names, None, 0).unwrap();

    assert_eq!(filename, format!("{TITLE_PLACEHOLDER}-1.pdf"));
}

#[test]
fn given_blank_title_when_naming_page_then_uses_placeholder() {
    let names = NameList::empty();

    let filename = page_filename(&names, Some("   "), 1).unwrap();

    assert_eq!(filename, format!("{TITLE_PLACEHOLDER}-2.pdf"));
}

#[test]
fn given_title_with_separator_when_naming_page_then_separator_is_replaced() {
    let names = NameList::empty();

    let filename = page_filename(&names, Some("a/b"), 0).unwrap();

    assert_eq!(filename, "a_b-1.pdf");
}

#[test]
fn given_empty_entry_name_then_validation_rejects_it() {
    assert_eq!(validate_entry_name("  "), Err(InvalidFilename::Empty));
}

#[test]
fn given_entry_name_with_slash_then_validation_rejects_it() {
    assert!(matches!(
        validate_entry_name("a/b"),
        Err(InvalidFilename::ForbiddenCharacter(_))
    ));
}

#[test]
fn given_entry_name_with_backslash_then_validation_rejects_it() {
    assert!(matches!(
        validate_entry_name("a\\b"),
        Err(InvalidFilename::ForbiddenCharacter(_))
    ));
}

#[test]
fn given_entry_name_with_nul_byte_then_validation_rejects_it() {
    assert!(matches!(
        validate_entry_name("a\0b"),
        Err(InvalidFilename::ForbiddenCharacter(_))
    ));
}

#[test]
fn given_dot_dot_entry_name_then_validation_rejects_it() {
    assert_eq!(
        validate_entry_name(".."),
        Err(InvalidFilename::Reserved("..".to_string()))
    );
}

#[test]
fn given_ordinary_entry_name_then_validation_accepts_it() {
    assert_eq!(validate_entry_name("invoice 2024 (final)"), Ok(()));
}
