//! Contact data models produced from business-card transcriptions.

use serde::{Deserialize, Serialize};

/// Best-effort contact fields extracted from one card transcription.
///
/// Every field is a plain string; an empty string means the field was not
/// found. Non-empty values are verbatim text from the transcription (the
/// email is lower-cased, the phone has its separators removed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactCandidate {
    /// Company or organisation name.
    pub company: String,

    /// Person name, honorific removed.
    pub person_name: String,

    /// Email address (lower-case).
    pub email: String,

    /// Phone number, digits and leading `+` only.
    pub phone: String,

    /// City name.
    pub city: String,

    /// Five-digit French postal code.
    pub postal_code: String,
}

impl ContactCandidate {
    /// True if no field was found at all.
    pub fn is_empty(&self) -> bool {
        self.company.is_empty()
            && self.person_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.city.is_empty()
            && self.postal_code.is_empty()
    }

    /// True if company, person name, email and phone are all missing.
    ///
    /// Callers treat this as a failed extraction even when a city or postal
    /// code was found.
    pub fn lacks_core_fields(&self) -> bool {
        self.company.is_empty()
            && self.person_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
    }

    /// Field/value pairs keyed by the contact form field names.
    pub fn prefill_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("company", &self.company),
            ("name", &self.person_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("city", &self.city),
            ("postalCode", &self.postal_code),
        ]
    }

    /// Names of the fields that were found.
    pub fn found_fields(&self) -> Vec<&'static str> {
        self.prefill_fields()
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Address part of a scanned card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Result of the card-scan workflow, shaped for the opportunity form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedCard {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: CardAddress,

    /// The submitted image, echoed back as a data URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_image: Option<String>,
}

impl ScannedCard {
    /// Build a scanned card from an extracted candidate.
    pub fn from_candidate(contact: ContactCandidate, card_image: Option<String>) -> Self {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };

        Self {
            company: contact.company,
            name: contact.person_name,
            email: contact.email,
            phone: contact.phone,
            address: CardAddress {
                city: non_empty(contact.city),
                postal_code: non_empty(contact.postal_code),
            },
            card_image,
        }
    }

    /// Drop the echoed image.
    pub fn without_image(mut self) -> Self {
        self.card_image = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ContactCandidate {
        ContactCandidate {
            company: "ACME CORP".to_string(),
            person_name: "Jean Dupont".to_string(),
            email: "jean@acme.com".to_string(),
            phone: String::new(),
            city: "PARIS".to_string(),
            postal_code: "75008".to_string(),
        }
    }

    #[test]
    fn test_lacks_core_fields() {
        assert!(ContactCandidate::default().lacks_core_fields());

        let location_only = ContactCandidate {
            city: "PARIS".to_string(),
            postal_code: "75008".to_string(),
            ..Default::default()
        };
        assert!(location_only.lacks_core_fields());
        assert!(!location_only.is_empty());

        assert!(!sample().lacks_core_fields());
    }

    #[test]
    fn test_found_fields() {
        assert_eq!(
            sample().found_fields(),
            vec!["company", "name", "email", "city", "postalCode"]
        );
        assert!(ContactCandidate::default().found_fields().is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["personName"], "Jean Dupont");
        assert_eq!(json["postalCode"], "75008");
    }

    #[test]
    fn test_scanned_card_from_candidate() {
        let card = ScannedCard::from_candidate(
            ContactCandidate {
                company: "ACME".to_string(),
                city: "LYON".to_string(),
                ..Default::default()
            },
            Some("data:image/png;base64,AA==".to_string()),
        );

        assert_eq!(card.company, "ACME");
        assert_eq!(card.address.city.as_deref(), Some("LYON"));
        assert_eq!(card.address.postal_code, None);

        let json = serde_json::to_value(card.without_image()).unwrap();
        assert!(json.get("cardImage").is_none());
        assert!(json["address"].get("postalCode").is_none());
    }
}
