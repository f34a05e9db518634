//! Contact field extractor for business-card transcriptions.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::{CompanyRule, ExtractionConfig};
use crate::models::contact::ContactCandidate;

use super::rules::{
    CompanyExtractor, EmailExtractor, FieldExtractor, LocationExtractor, PersonNameExtractor,
    PhoneExtractor,
};

/// Result of a card extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted contact fields.
    pub contact: ContactCandidate,
    /// Raw transcription the fields were taken from.
    pub raw_text: String,
    /// One warning per field that could not be found.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for card parsing.
pub trait CardParser {
    /// Parse contact fields from a card transcription.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Extracts contact fields from the OCR text of a business card.
///
/// Each field is found independently by its own rule; a line may feed
/// several fields. Extraction never fails: a field that matches nothing is
/// left empty.
#[derive(Debug, Clone, Default)]
pub struct CardFieldExtractor {
    config: ExtractionConfig,
}

impl CardFieldExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Set the company line selection rule.
    pub fn with_company_rule(mut self, rule: CompanyRule) -> Self {
        self.config.company_rule = rule;
        self
    }

    /// Set the longest line accepted as an un-titled person name.
    pub fn with_max_name_length(mut self, max_name_length: usize) -> Self {
        self.config.max_name_length = max_name_length;
        self
    }

    /// Extract contact fields from raw OCR text.
    pub fn extract(&self, raw_text: &str) -> ContactCandidate {
        let email = EmailExtractor::new().extract(raw_text);
        let phone = PhoneExtractor::new().extract(raw_text);
        let person_name = PersonNameExtractor::new()
            .with_max_length(self.config.max_name_length)
            .extract(raw_text);
        let company = CompanyExtractor::new()
            .with_rule(self.config.company_rule)
            .with_min_length(self.config.min_company_length)
            .extract(raw_text);
        let location = LocationExtractor::new().extract(raw_text);

        debug!(
            "Field sources: company={:?} name={:?} email={:?} phone={:?} location={:?}",
            company.as_ref().and_then(|m| m.line),
            person_name.as_ref().and_then(|m| m.line),
            email.as_ref().and_then(|m| m.position),
            phone.as_ref().and_then(|m| m.position),
            location.as_ref().and_then(|m| m.line),
        );

        let (city, postal_code) = location
            .map(|m| (m.value.city, m.value.postal_code.unwrap_or_default()))
            .unwrap_or_default();

        ContactCandidate {
            company: company.map(|m| m.value).unwrap_or_default(),
            person_name: person_name.map(|m| m.value).unwrap_or_default(),
            email: email.map(|m| m.value).unwrap_or_default(),
            phone: phone.map(|m| m.value).unwrap_or_default(),
            city,
            postal_code,
        }
    }
}

impl CardParser for CardFieldExtractor {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing business card from {} characters of text", text.len());

        let contact = self.extract(text);

        let warnings: Vec<String> = contact
            .prefill_fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| format!("Could not extract {}", field))
            .collect();

        debug!(
            "Extracted {} of 6 fields: {:?}",
            6 - warnings.len(),
            contact.found_fields()
        );

        ExtractionResult {
            contact,
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
