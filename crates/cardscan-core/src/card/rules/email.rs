//! Email address extraction.

use super::patterns::EMAIL;
use super::{ExtractionMatch, FieldExtractor};

/// Email field extractor.
///
/// Scans the whole transcription rather than single lines; values are
/// lower-cased.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_lowercase(), m.as_str())
                .with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_lowercase(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        let text = "Jean Dupont\njean.dupont@example.com\n0612345678";
        assert_eq!(extract_email(text), Some("jean.dupont@example.com".to_string()));
    }

    #[test]
    fn test_extract_email_lowercases() {
        let text = "Contact: Jean.Dupont@ACME.Fr";
        assert_eq!(extract_email(text), Some("jean.dupont@acme.fr".to_string()));
    }

    #[test]
    fn test_extract_email_first_wins() {
        let text = "info@acme.com / sales@acme.com";
        assert_eq!(extract_email(text), Some("info@acme.com".to_string()));

        let all = EmailExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].value, "sales@acme.com");
        assert_eq!(all[1].position, Some((16, 30)));
    }

    #[test]
    fn test_extract_email_requires_tld() {
        assert_eq!(extract_email("jean@localhost"), None);
        assert_eq!(extract_email("jean@acme.c"), None);
        assert_eq!(extract_email("no address here"), None);
    }
}
