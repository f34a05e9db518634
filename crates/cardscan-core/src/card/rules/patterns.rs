//! Common regex patterns for business-card field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email pattern (local@domain.tld, TLD of two letters or more)
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone pattern (French format: +33 / 0033 / 0, then 9 significant digits)
    pub static ref PHONE: Regex = Regex::new(
        r"(?:(?:\+|00)33|0)\s*[1-9](?:[\s.-]*[0-9]{2}){4}"
    ).unwrap();

    // Honorific followed by two or more capitalized words
    pub static ref HONORIFIC_NAME: Regex = Regex::new(
        r"^(?P<title>M|Mme|Mr|Dr)\.?\s+(?P<name>[A-Z][a-zÀ-ÿ]+(?:\s+[A-Z][a-zÀ-ÿ]+)+)$"
    ).unwrap();

    pub static ref HONORIFIC_PREFIX: Regex = Regex::new(
        r"^(?:M|Mme|Mr|Dr)\.?\s"
    ).unwrap();

    // "Firstname Lastname" shaped line
    pub static ref NAME_SHAPED: Regex = Regex::new(
        r"^[A-Z][a-zÀ-ÿ]+(?:\s+[A-Z][a-zÀ-ÿ]+)+$"
    ).unwrap();

    // Phone-like or numeric line start
    pub static ref LEADING_NUMBER: Regex = Regex::new(
        r"^\+?[0-9]"
    ).unwrap();

    // French postal code followed by the city
    pub static ref POSTAL_CODE_CITY: Regex = Regex::new(
        r"\b(?P<postal_code>[0-9]{5})\s+(?P<city>[A-Z][A-Za-zÀ-ÿ\s-]+)"
    ).unwrap();

    // Bare city written in capitals
    pub static ref UPPERCASE_CITY: Regex = Regex::new(
        r"^[A-Z][A-Z\s-]+$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_shaped_accepts_accents() {
        assert!(NAME_SHAPED.is_match("Hélène Lefèvre"));
        assert!(NAME_SHAPED.is_match("Jean Paul Sartre"));
        assert!(!NAME_SHAPED.is_match("ACME CORP"));
        assert!(!NAME_SHAPED.is_match("Jean"));
    }

    #[test]
    fn test_honorific_prefix_needs_separator() {
        assert!(HONORIFIC_PREFIX.is_match("M. Durand"));
        assert!(HONORIFIC_PREFIX.is_match("Mme Durand"));
        assert!(!HONORIFIC_PREFIX.is_match("Marketing"));
        assert!(!HONORIFIC_PREFIX.is_match("Drone Services"));
    }

    #[test]
    fn test_postal_code_not_inside_longer_number() {
        assert!(POSTAL_CODE_CITY.is_match("69002 Lyon"));
        assert!(!POSTAL_CODE_CITY.is_match("0612345678 Paris"));
    }
}
