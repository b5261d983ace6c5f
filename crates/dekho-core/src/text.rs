// crates/dekho-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Kōchi` -> `Kochi`)
/// 2\) Normalize to lowercase
///
/// Both the search index and every query run through this function, which is
/// what makes prefix search case-insensitive (and accent-insensitive).
///
/// # Examples
///
/// ```rust
/// use dekho_core::text::fold_key;
///
/// assert_eq!(fold_key("GOA"), "goa");
/// assert_eq!(fold_key("Kōchi"), "kochi");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`] normalization.
///
/// ```rust
/// use dekho_core::text::equals_folded;
///
/// assert!(equals_folded("Jim Corbett", "jim corbett"));
/// assert!(!equals_folded("Goa", "Gokarna"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Parses the leading number out of a descriptive text field.
///
/// The catalog stores ratings and complexity indices as display text such as
/// `"4.8/5.0"` or `"0.45 (Moderate)"`. Returns `None` when the text does not
/// start with a number.
///
/// ```rust
/// use dekho_core::text::parse_leading_f64;
///
/// assert_eq!(parse_leading_f64("4.8/5.0"), Some(4.8));
/// assert_eq!(parse_leading_f64(" 0.45 (Moderate)"), Some(0.45));
/// assert_eq!(parse_leading_f64("N/A"), None);
/// ```
pub fn parse_leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(s.len());
    s[..end].parse::<f64>().ok()
}
