use std::cmp::Ordering;

/// Case-insensitive equality under ASCII folding.
///
/// Strings of different lengths are never equal, regardless of content.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Lexicographic order under ASCII case folding.
///
/// Usable as a comparator for case-insensitive keys, e.g.
/// `names.sort_by(|a, b| cmp_ignore_case(a, b))`.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    let fold_a = a.bytes().map(|c| c.to_ascii_lowercase());
    let fold_b = b.bytes().map(|c| c.to_ascii_lowercase());
    fold_a.cmp(fold_b)
}

/// Splits on a single delimiter, line-tokenization style.
///
/// Empty interior segments are preserved; a trailing delimiter yields no
/// trailing empty segment; the empty string yields no segments.
pub fn split_delim(s: &str, delim: char) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut parts: Vec<String> = s.split(delim).map(str::to_owned).collect();
    if s.ends_with(delim) {
        parts.pop();
    }
    parts
}
