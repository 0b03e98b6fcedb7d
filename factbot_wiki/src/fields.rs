//! Regex field extraction over cleaned infobox text.
//!
//! Each extractor knows one fixed rule for finding its value in the infobox
//! text, and the message to surface when the page does not carry the field.

use std::sync::OnceLock;

use regex::Regex;

use crate::client::WikiError;

static BIRTH: OnceLock<Regex> = OnceLock::new();
static RADIUS: OnceLock<Regex> = OnceLock::new();
static FAMILY: OnceLock<Regex> = OnceLock::new();
static DOMAIN: OnceLock<Regex> = OnceLock::new();
static ATOMIC: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex patterns validated at compile time"
)]
fn field_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static regex is valid"))
}

/// Find `pattern`'s `value` capture group in `text`.
pub fn extract_field(text: &str, pattern: &Regex, error_text: &str) -> Result<String, WikiError> {
    pattern
        .captures(text)
        .and_then(|caps| caps.name("value"))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| WikiError::FieldNotFound(error_text.to_string()))
}

/// Birth date in `xxxx-xx-xx` form from a person's infobox.
pub fn birth_date(text: &str) -> Result<String, WikiError> {
    let re = field_regex(&BIRTH, r"(?si)Born\D*(?P<value>\d{4}-\d{2}-\d{2})");
    extract_field(
        text,
        re,
        "Page infobox has no birth information (at least none in xxxx-xx-xx format)",
    )
}

/// Polar radius of a planet, in kilometres.
pub fn polar_radius(text: &str) -> Result<String, WikiError> {
    let re = field_regex(
        &RADIUS,
        r"(?si)Polar radius.*?(?: ?\d+ )?(?P<value>[\d,.]+).*?km",
    );
    extract_field(text, re, "Page infobox has no polar radius information")
}

/// Scientific family name from an animal's taxonomy box.
pub fn scientific_name(text: &str) -> Result<String, WikiError> {
    let re = field_regex(&FAMILY, r"(?si)Family:\s?(?P<value>\w*)");
    let family = extract_field(text, re, "Page infobox has no scientific name information")?;
    Ok(format!("Scientific name: {}", family.trim()))
}

/// Taxonomic domain from an animal's taxonomy box.
pub fn animal_domain(text: &str) -> Result<String, WikiError> {
    let re = field_regex(&DOMAIN, r"(?si)Domain:\s?(?P<value>\w*)");
    let domain = extract_field(text, re, "Page infobox has no domain information")?;
    Ok(format!("Domain: {}", domain.trim()))
}

/// Atomic number from a chemical element's infobox.
pub fn atomic_number(text: &str) -> Result<String, WikiError> {
    let re = field_regex(&ATOMIC, r"(?si)Atomic number\s?\D*(?P<value>\d+)");
    let number = extract_field(text, re, "Page infobox has no atomic number information")?;
    Ok(format!("Atomic number: {}", number.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_date_from_infobox_text() {
        let text = "Barack Obama\nBorn: Barack Hussein Obama II 1961-08-04 Honolulu";
        assert_eq!(birth_date(text).ok(), Some("1961-08-04".to_string()));
    }

    #[test]
    fn birth_date_requires_iso_format() {
        let result = birth_date("Born: August 4, 1961");
        assert!(matches!(result, Err(WikiError::FieldNotFound(_))));
    }

    #[test]
    fn polar_radius_from_infobox_text() {
        let text = "Earth\nPolar radius 6356.752 km 3949.903 mi";
        assert_eq!(polar_radius(text).ok(), Some("6356.752".to_string()));
    }

    #[test]
    fn scientific_name_from_taxonomy() {
        let text = "Cheetah\nKingdom: Animalia\nFamily: Felidae\nGenus: Acinonyx";
        assert_eq!(
            scientific_name(text).ok(),
            Some("Scientific name: Felidae".to_string())
        );
    }

    #[test]
    fn animal_domain_from_taxonomy() {
        let text = "Cheetah\nDomain: Eukaryota\nKingdom: Animalia";
        assert_eq!(animal_domain(text).ok(), Some("Domain: Eukaryota".to_string()));
    }

    #[test]
    fn atomic_number_from_element_infobox() {
        let text = "Oxygen\nAtomic number (Z) 8\nGroup group 16";
        assert_eq!(atomic_number(text).ok(), Some("Atomic number: 8".to_string()));
    }

    #[test]
    fn missing_field_reports_its_message() {
        let result = polar_radius("Jupiter has no such row here");
        let Err(WikiError::FieldNotFound(message)) = result else {
            panic!("expected a missing-field error");
        };
        assert!(message.contains("polar radius"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let text = "POLAR RADIUS 2106.8 km";
        assert_eq!(polar_radius(text).ok(), Some("2106.8".to_string()));
    }
}
