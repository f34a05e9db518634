//! City and postal code extraction.

use serde::{Deserialize, Serialize};

use super::patterns::{POSTAL_CODE_CITY, UPPERCASE_CITY};
use super::{card_lines, CardLine, ExtractionMatch, FieldExtractor};

/// A city, with its postal code when one was printed next to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Location extractor.
///
/// Prefers a `<5 digits> <City>` line (French convention); falls back to
/// a bare line written in capitals, which yields a city without postal
/// code.
pub struct LocationExtractor;

impl LocationExtractor {
    pub fn new() -> Self {
        Self
    }

    fn postal_match(&self, line: &CardLine<'_>) -> Option<ExtractionMatch<Location>> {
        let caps = POSTAL_CODE_CITY.captures(line.text)?;
        let full = caps.get(0)?;

        let location = Location {
            city: caps["city"].trim().to_string(),
            postal_code: Some(caps["postal_code"].to_string()),
        };

        Some(
            ExtractionMatch::new(location, full.as_str())
                .with_position(line.start + full.start(), line.start + full.end())
                .with_line(line.index),
        )
    }

    fn is_bare_city(&self, line: &str) -> bool {
        UPPERCASE_CITY.is_match(line.trim())
            && line.chars().count() > 2
            && !line.starts_with(|c: char| c.is_ascii_digit())
            && !line.contains('@')
    }
}

impl Default for LocationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LocationExtractor {
    type Output = ExtractionMatch<Location>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = card_lines(text)
            .filter_map(|line| self.postal_match(&line))
            .collect();

        results.extend(
            card_lines(text)
                .filter(|line| self.is_bare_city(line.text))
                .map(|line| {
                    line.matched(Location {
                        city: line.text.trim().to_string(),
                        postal_code: None,
                    })
                }),
        );

        results
    }
}

/// Extract the city and postal code from text.
pub fn extract_location(text: &str) -> Option<Location> {
    LocationExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_postal_code_and_city() {
        let location = extract_location("75008 PARIS\nTour Eiffel").unwrap();
        assert_eq!(
            location,
            Location {
                city: "PARIS".to_string(),
                postal_code: Some("75008".to_string()),
            }
        );
    }

    #[test]
    fn test_postal_code_inside_address_line() {
        let text = "ACME\n12 rue de la Paix, 69002 Lyon Cedex  \n";
        let m = LocationExtractor::new().extract(text).unwrap();

        assert_eq!(m.value.city, "Lyon Cedex");
        assert_eq!(m.value.postal_code.as_deref(), Some("69002"));
        assert_eq!(m.line, Some(1));
    }

    #[test]
    fn test_accented_city() {
        let location = extract_location("13100 Aix-en-Provence").unwrap();
        assert_eq!(location.city, "Aix-en-Provence");
    }

    #[test]
    fn test_postal_tier_beats_earlier_uppercase_line() {
        let text = "ACME CORP\n33000 Bordeaux";
        let location = extract_location(text).unwrap();
        assert_eq!(location.city, "Bordeaux");
        assert_eq!(location.postal_code.as_deref(), Some("33000"));
    }

    #[test]
    fn test_bare_uppercase_city() {
        let text = "Jean Dupont\n  SAINT-ETIENNE \njean@acme.fr";
        let location = extract_location(text).unwrap();
        assert_eq!(location.city, "SAINT-ETIENNE");
        assert_eq!(location.postal_code, None);
    }

    #[test]
    fn test_no_location() {
        assert_eq!(extract_location("Jean Dupont\njean@acme.fr"), None);
        assert_eq!(extract_location("AB"), None);
        assert_eq!(extract_location("1234 Paris"), None);
    }
}
