//! French phone number extraction.

use super::patterns::PHONE;
use super::{ExtractionMatch, FieldExtractor};

/// Phone field extractor.
///
/// Recognizes French national numbers with an optional `+33`/`0033` or
/// `0` prefix and returns them with separators removed.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        PHONE.find(text).map(|m| {
            ExtractionMatch::new(normalize_phone(m.as_str()), m.as_str())
                .with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(normalize_phone(m.as_str()), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

/// Strip whitespace, dots and hyphens from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_phone_spaced() {
        assert_eq!(
            extract_phone("Contact: 06 12 34 56 78"),
            Some("0612345678".to_string())
        );
    }

    #[test]
    fn test_extract_phone_international() {
        assert_eq!(
            extract_phone("Tél. +33 6 12 34 56 78"),
            Some("+33612345678".to_string())
        );
        assert_eq!(
            extract_phone("0033 1.23.45.67.89"),
            Some("0033123456789".to_string())
        );
    }

    #[test]
    fn test_extract_phone_hyphenated() {
        assert_eq!(
            extract_phone("Fax 01-23-45-67-89"),
            Some("0123456789".to_string())
        );
    }

    #[test]
    fn test_extract_phone_first_wins() {
        let text = "Tél: 01 23 45 67 89\nMobile: 06 98 76 54 32";
        assert_eq!(extract_phone(text), Some("0123456789".to_string()));
        assert_eq!(PhoneExtractor::new().extract_all(text).len(), 2);
    }

    #[test]
    fn test_extract_phone_rejects_short_numbers() {
        assert_eq!(extract_phone("Bureau 012 34 56"), None);
        assert_eq!(extract_phone("75008 PARIS"), None);
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("06.12-34 56\t78"), "0612345678");
    }
}
