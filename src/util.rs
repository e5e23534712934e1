// Utility helpers for parsing and operator-facing number formatting.
//
// All the forgiving CSV value handling lives here so the rest of the code
// can assume clean, typed values.
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into a non-negative count while being
/// forgiving about formatting issues common in CSV exports.
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace and strips thousands separators like `","`.
/// - Rejects values containing alphabetic characters.
/// - Returns `None` for anything that cannot be safely parsed (including
///   negative numbers, which are not a valid event count).
pub fn parse_u64_safe(s: Option<&str>) -> Option<u64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(",", "");
    s.parse::<u64>().ok()
}

/// Thin wrapper around `num-format` for integer-like values, used for
/// counts in console messages (e.g., `1,234 rows loaded`).
pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_separated_counts() {
        assert_eq!(parse_u64_safe(Some("12")), Some(12));
        assert_eq!(parse_u64_safe(Some(" 1,234 ")), Some(1234));
        assert_eq!(parse_u64_safe(Some("0")), Some(0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_u64_safe(None), None);
        assert_eq!(parse_u64_safe(Some("")), None);
        assert_eq!(parse_u64_safe(Some("abc")), None);
        assert_eq!(parse_u64_safe(Some("12x")), None);
        assert_eq!(parse_u64_safe(Some("-3")), None);
    }

    #[test]
    fn formats_with_separators() {
        assert_eq!(format_int(1234567u64), "1,234,567");
    }
}
