//! ASCII case-insensitive substring search.

/// Locate the first occurrence of `needle` in `haystack`, ignoring ASCII
/// case, and return its byte offset.
///
/// An empty needle matches at offset 0, the `strcasestr` convention.
/// Only ASCII letters fold; multi-byte characters compare exactly.
#[must_use]
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
