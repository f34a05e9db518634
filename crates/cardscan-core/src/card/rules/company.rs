//! Company name extraction.

use crate::models::config::CompanyRule;

use super::patterns::{HONORIFIC_PREFIX, LEADING_NUMBER, NAME_SHAPED};
use super::{card_lines, has_no_lowercase, has_uppercase, ExtractionMatch, FieldExtractor};

/// Company field extractor.
///
/// Picks lines longer than the minimum length that contain an uppercase
/// letter and are not a person name, an email, a number or an honorific
/// line. With [`CompanyRule::Uppercase`] the line must also contain no
/// lowercase letter.
pub struct CompanyExtractor {
    rule: CompanyRule,
    min_length: usize,
}

impl CompanyExtractor {
    /// Create a new company extractor.
    pub fn new() -> Self {
        Self {
            rule: CompanyRule::default(),
            min_length: 3,
        }
    }

    /// Set the line selection rule.
    pub fn with_rule(mut self, rule: CompanyRule) -> Self {
        self.rule = rule;
        self
    }

    /// Lines must be strictly longer than this many characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    fn qualifies(&self, line: &str) -> bool {
        let shape_ok = match self.rule {
            CompanyRule::NotNameShaped => true,
            CompanyRule::Uppercase => has_no_lowercase(line),
        };

        shape_ok
            && line.chars().count() > self.min_length
            && has_uppercase(line)
            && !NAME_SHAPED.is_match(line)
            && !line.contains('@')
            && !LEADING_NUMBER.is_match(line)
            && !HONORIFIC_PREFIX.is_match(line)
    }
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CompanyExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        card_lines(text)
            .filter(|line| self.qualifies(line.text))
            .map(|line| line.matched(line.text.to_string()))
            .collect()
    }
}

/// Extract the company name from text.
pub fn extract_company(text: &str) -> Option<String> {
    CompanyExtractor::new().extract(text).map(|m| m.value)
}
