//! In-page link targets.

/// Element id an internal link points at.
///
/// Returns `None` for hrefs that are not in-page fragments and for the bare
/// `"#"` placeholder link, so callers never look up an empty id.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
