//! Configuration structures for extraction and the card-scan workflow.

use serde::{Deserialize, Serialize};

/// Main configuration for cardscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardscanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Card-scan workflow configuration.
    pub scan: ScanConfig,
}

/// How a line qualifies as the company name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyRule {
    /// Any line with an uppercase letter that is not shaped like
    /// "Firstname Lastname".
    #[default]
    NotNameShaped,
    /// Only lines written entirely in uppercase.
    Uppercase,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Company line selection rule.
    pub company_rule: CompanyRule,

    /// Longest line (in characters) accepted by the fallback name rule.
    pub max_name_length: usize,

    /// Company lines must be strictly longer than this (in characters).
    pub min_company_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            company_rule: CompanyRule::NotNameShaped,
            max_name_length: 40,
            min_company_length: 3,
        }
    }
}

/// Card-scan workflow configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Largest accepted decoded image, in bytes.
    pub max_image_bytes: usize,

    /// Fail the scan when company, name, email and phone are all missing.
    pub require_core_fields: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: 10 * 1024 * 1024,
            require_core_fields: true,
        }
    }
}

impl CardscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CardscanConfig =
            serde_json::from_str(r#"{"extraction": {"company_rule": "uppercase"}}"#).unwrap();

        assert_eq!(config.extraction.company_rule, CompanyRule::Uppercase);
        assert_eq!(config.extraction.max_name_length, 40);
        assert_eq!(config.scan, ScanConfig::default());
    }

    #[test]
    fn test_default_image_limit() {
        assert_eq!(ScanConfig::default().max_image_bytes, 10_485_760);
    }
}
