//! CDATA marker names.
//!
//! A CDATA section is stored as an element whose name is the section body
//! wrapped in `![CDATA[` and `]]`.

/// Name prefix marking an element as a CDATA section.
pub const CDATA_PREFIX: &str = "![CDATA[";

/// Name suffix closing a CDATA section.
pub const CDATA_SUFFIX: &str = "]]";

/// Returns true if `name` starts with the CDATA marker.
///
/// Only the prefix is checked, so a name missing the closing `]]` still counts.
#[inline]
pub fn is_cdata_name(name: &str) -> bool {
    name.starts_with(CDATA_PREFIX)
}

/// Builds the element name for a CDATA section holding `data`.
pub fn cdata_name(data: &str) -> String {
    let mut name = String::with_capacity(CDATA_PREFIX.len() + data.len() + CDATA_SUFFIX.len());
    name.push_str(CDATA_PREFIX);
    name.push_str(data);
    name.push_str(CDATA_SUFFIX);
    name
}

/// Extracts the section body from a CDATA element name.
///
/// Returns `None` if `name` is not a CDATA marker. A missing `]]` suffix is
/// tolerated and the remainder is returned as-is.
pub fn cdata_body(name: &str) -> Option<&str> {
    let rest = name.strip_prefix(CDATA_PREFIX)?;
    Some(rest.strip_suffix(CDATA_SUFFIX).unwrap_or(rest))
}
