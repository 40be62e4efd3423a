// String decorator: `String` can't be extended, so wrap it. `Deref` hands
// out the whole `str` API, no hand-written delegate methods needed.

use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RichString(String);

impl RichString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Case-insensitive count of a, e, i, o, u.
    pub fn vowel_count(&self) -> usize {
        self.0
            .chars()
            .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for RichString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RichString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for RichString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RichString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for RichString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_count_ignores_case() {
        let s = RichString::new("hEllO sOme RanDoM STriNg");
        assert_eq!(s.vowel_count(), 7);
    }

    #[test]
    fn test_no_vowels() {
        assert_eq!(RichString::from("rhythm").vowel_count(), 0);
        assert_eq!(RichString::default().vowel_count(), 0);
    }

    #[test]
    fn test_str_methods_delegate() {
        let s = RichString::from("Hello World");
        assert_eq!(s.len(), 11);
        assert!(s.starts_with("Hello"));
        assert_eq!(s.to_uppercase(), "HELLO WORLD");
        assert_eq!(s.split(' ').count(), 2);
        assert_eq!(s.to_string(), "Hello World");
    }
}
