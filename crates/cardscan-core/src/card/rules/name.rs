//! Person name extraction.

use super::patterns::{HONORIFIC_NAME, LEADING_NUMBER};
use super::{card_lines, has_no_lowercase, CardLine, ExtractionMatch, FieldExtractor};

/// Person name extractor.
///
/// Two tiers, each in line order:
/// 1. A line made of an honorific (`M`, `Mme`, `Mr`, `Dr`, optional period)
///    and two or more capitalized words. The honorific is stripped.
/// 2. A short line of two or more words that all start with an uppercase
///    letter. Lines written entirely in capitals are left to the company
///    and city rules.
pub struct PersonNameExtractor {
    max_length: usize,
}

impl PersonNameExtractor {
    /// Create a new extractor with the default 40 character limit.
    pub fn new() -> Self {
        Self { max_length: 40 }
    }

    /// Set the longest line accepted by the fallback tier.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    fn honorific_match(&self, line: &CardLine<'_>) -> Option<ExtractionMatch<String>> {
        let caps = HONORIFIC_NAME.captures(line.text)?;
        let name = caps.name("name")?;

        Some(
            ExtractionMatch::new(name.as_str().to_string(), line.text)
                .with_position(line.start + name.start(), line.start + name.end())
                .with_line(line.index),
        )
    }

    fn is_plain_name(&self, line: &str) -> bool {
        let clean = line.trim();

        if clean.contains('@')
            || LEADING_NUMBER.is_match(clean)
            || clean.chars().count() > self.max_length
        {
            return false;
        }

        let words: Vec<&str> = clean.split_whitespace().collect();
        if words.len() < 2 || has_no_lowercase(clean) {
            return false;
        }

        words.iter().all(|word| {
            word.chars().count() > 1 && word.starts_with(|c: char| c.is_ascii_uppercase())
        })
    }
}

impl Default for PersonNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PersonNameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = card_lines(text)
            .filter_map(|line| self.honorific_match(&line))
            .collect();

        for line in card_lines(text) {
            // Already taken by the honorific tier
            if results.iter().any(|r| r.line == Some(line.index)) {
                continue;
            }

            if self.is_plain_name(line.text) {
                results.push(line.matched(line.text.to_string()));
            }
        }

        results
    }
}

/// Extract the person name from text.
pub fn extract_person_name(text: &str) -> Option<String> {
    PersonNameExtractor::new().extract(text).map(|m| m.value)
}
