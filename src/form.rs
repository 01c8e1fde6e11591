//! Reading named form fields.
//!
//! Browser forms hand values over as strings (or not at all). The
//! [`FormFields`] trait abstracts the source so payload construction does
//! not care whether it came from a `FormData` or a text file.

use std::collections::BTreeMap;

/// A source of named string fields.
pub trait FormFields {
    /// Value of the named field, `None` if the form has no such field.
    fn get(&self, name: &str) -> Option<String>;

    /// Value of the named field, empty when absent.
    fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default()
    }

    /// Leading integer of the named field, if any.
    fn int(&self, name: &str) -> Option<i64> {
        self.get(name).as_deref().and_then(parse_leading_int)
    }

    /// Positive integer value of the named field, or `default`.
    ///
    /// Zero, negatives and unparsable input all fall back.
    fn count_or(&self, name: &str, default: u32) -> u32 {
        self.int(name)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(default)
    }
}

/// Parse the integer at the start of `s`.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit: `" 12abc"` is 12, `"1.9"` is 1, `"abc"` is `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in rest[..digits].bytes() {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    Some(if negative { -value } else { value })
}

/// In-memory form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Parse a `name=value` dump, one field per line.
    ///
    /// Blank lines and `#` comments are skipped, lines without `=` are
    /// ignored, the first `=` splits and later duplicates win.
    pub fn parse(text: &str) -> Self {
        let mut fields = Self::new();
        for line in text.lines() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if let Some((name, value)) = trimmed.split_once('=') {
                fields.insert(name.trim(), value);
            }
        }
        fields
    }
}

impl FormFields for FieldMap {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 minutes"), Some(7));
        assert_eq!(parse_leading_int("1.9"), Some(1));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_count_or_falls_back() {
        let form = FieldMap::from_pairs([
            ("zero", "0"),
            ("neg", "-4"),
            ("junk", "lots"),
            ("ok", "12"),
        ]);
        assert_eq!(form.count_or("zero", 1), 1);
        assert_eq!(form.count_or("neg", 0), 0);
        assert_eq!(form.count_or("junk", 0), 0);
        assert_eq!(form.count_or("missing", 1), 1);
        assert_eq!(form.count_or("ok", 1), 12);
    }

    #[test]
    fn test_parse_form_dump() {
        let fields = FieldMap::parse(
            "# saved from the recipe form\n\
             title=Pancakes\n\
             \n\
             description=a=b\n\
             not a field\n\
             title=Crepes\n",
        );
        assert_eq!(fields.get("title").as_deref(), Some("Crepes"));
        assert_eq!(fields.get("description").as_deref(), Some("a=b"));
        assert_eq!(fields.get("not a field"), None);
    }

    #[test]
    fn test_text_defaults_to_empty() {
        let fields = FieldMap::new();
        assert_eq!(fields.text("bio"), "");
    }
}
