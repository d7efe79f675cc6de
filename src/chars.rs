//! Classification of the code points that drive token boundaries and
//! splitting decisions. All predicates look at the first code point of a
//! string slice unless noted otherwise.

/// Any Unicode whitespace. `char::is_whitespace` already covers U+00A0
/// (no-break space), which word scanning must treat as a separator.
#[inline]
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Does the string start with a (Unicode) digit?
#[inline]
pub fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_numeric)
}

/// Does the string start with an upper-case letter?
#[inline]
pub fn starts_upper(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Does the string start with a letter?
#[inline]
pub fn starts_alphabetic(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_alphabetic)
}

/// True if the word can be read as a number. The `:` admits times such as
/// `10:30`; the `.` and `,` admit both `1,000,000.00` and `1.000.000,00`;
/// U+00A0 is a digit-group separator in some locales. The word must begin
/// with a digit, which keeps ordinary punctuation runs out.
pub fn is_number(s: &str) -> bool {
    if !starts_with_digit(s) {
        return false;
    }
    s.chars().all(|ch| ch.is_numeric() || matches!(ch, '.' | ',' | ':' | '\u{00A0}'))
}

/// Lower-case the whole string.
#[inline]
pub fn downcase(s: &str) -> String {
    s.to_lowercase()
}

/// Cut the string down to at most `max` characters, on a char boundary.
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces() {
        for ch in [' ', '\t', '\n', '\u{00A0}', '\u{2007}'] {
            assert!(is_space(ch), "{ch:?}");
        }
        assert!(!is_space('-'));
    }

    #[test]
    fn numbers() {
        for s in ["10", "10:30", "1,000,000.00", "1.000.000,00", "86", "1\u{00A0}000"] {
            assert!(is_number(s), "{s}");
        }
        for s in ["", "abc", "x10", ".50", "'50s", "10s", "10 30"] {
            assert!(!is_number(s), "{s}");
        }
    }

    #[test]
    fn first_code_point() {
        assert!(starts_upper("Hello"));
        assert!(!starts_upper("über"));
        assert!(starts_alphabetic("über"));
        assert!(!starts_alphabetic("'ve"));
        assert!(starts_with_digit("86mm"));
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 10), "hello");
        // never cuts inside a multi-byte character
        assert_eq!(truncate("üüü", 2), "üü");
    }
}
