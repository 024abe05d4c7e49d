use std::sync::LazyLock;

use regex::Regex;

use super::name_list::NameList;

/// Stand-in for the document title when none is present.
pub const TITLE_PLACEHOLDER: &str = "document";

static FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/\\\x00-\x1f]").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFilename {
    #[error("empty output filename")]
    Empty,
    #[error("output filename contains a path separator or control character: {0:?}")]
    ForbiddenCharacter(String),
    #[error("output filename is a reserved path component: {0}")]
    Reserved(String),
    #[error("duplicate output filename: {0}")]
    Duplicate(String),
}

/// Compute the archive entry name for page `index` (0-based).
///
/// A name-list entry wins when one exists for the index; pages without a
/// matching entry fall back to `{title}-{n}.pdf` with a 1-based page number.
pub fn page_filename(
    names: &NameList,
    title: Option<&str>,
    index: usize,
) -> Result<String, InvalidFilename> {
    if let Some(name) = names.get(index) {
        validate_entry_name(name)?;
        return Ok(format!("{name}.pdf"));
    }

    Ok(format!("{}-{}.pdf", sanitize_title(title), index + 1))
}

/// Caller-supplied names are rejected rather than rewritten: a name that
/// would escape the archive or collide with a path component is a client
/// error.
pub fn validate_entry_name(name: &str) -> Result<(), InvalidFilename> {
    if name.trim().is_empty() {
        return Err(InvalidFilename::Empty);
    }
    if name == "." || name == ".." {
        return Err(InvalidFilename::Reserved(name.to_string()));
    }
    if FORBIDDEN.is_match(name) {
        return Err(InvalidFilename::ForbiddenCharacter(name.to_string()));
    }
    Ok(())
}

/// Archive-safe form of the document title: forbidden characters are
/// replaced, an absent or blank title becomes [`TITLE_PLACEHOLDER`].
fn sanitize_title(title: Option<&str>) -> String {
    let cleaned = title
        .map(|t| FORBIDDEN.replace_all(t.trim(), "_").into_owned())
        .unwrap_or_default();

    if cleaned.is_empty() {
        TITLE_PLACEHOLDER.to_string()
    } else {
        cleaned
    }
}
