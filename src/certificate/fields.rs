//! Field schema for each certificate type

use std::collections::BTreeMap;

use super::record::FieldValue;
use super::types::CertificateType;

/// Registry header and attestation fields shared by every certificate type
pub const COMMON_FIELDS: &[&str] = &[
    "form_number",
    "office_name",
    "office_address",
    "current_date",
    "page_number",
    "book_number",
    "registry_number",
    "date_of_registration",
    "verified_by",
    "verified_by_title",
    "approved_by",
    "approved_by_title",
    "amount_paid",
    "or_number",
    "date_paid",
    "issued_to",
];

pub const BIRTH_FIELDS: &[&str] = &[
    "prn",
    "child_name",
    "sex",
    "date_of_birth",
    "place_of_birth",
    "mother_name",
    "mother_citizenship",
    "father_name",
    "father_citizenship",
    "marriage_date",
    "marriage_place",
];

pub const MARRIAGE_FIELDS: &[&str] = &[
    "husband_name",
    "husband_age",
    "husband_citizenship",
    "husband_civil_status",
    "husband_mother",
    "husband_father",
    "wife_name",
    "wife_age",
    "wife_citizenship",
    "wife_civil_status",
    "wife_mother",
    "wife_father",
    "date_of_marriage",
    "place_of_marriage",
];

pub const DEATH_FIELDS: &[&str] = &[
    "deceased_name",
    "sex",
    "age",
    "civil_status",
    "citizenship",
    "date_of_death",
    "place_of_death",
    "cause_of_death",
];

/// Type-specific fields for a certificate type (excluding [`COMMON_FIELDS`])
pub fn specific_fields(certificate_type: CertificateType) -> &'static [&'static str] {
    match certificate_type {
        CertificateType::Birth => BIRTH_FIELDS,
        CertificateType::Marriage => MARRIAGE_FIELDS,
        CertificateType::Death => DEATH_FIELDS,
    }
}

/// Every field a certificate type expects, common fields first
pub fn expected_fields(certificate_type: CertificateType) -> Vec<&'static str> {
    COMMON_FIELDS
        .iter()
        .chain(specific_fields(certificate_type))
        .copied()
        .collect()
}

/// Reads display values out of a record's field mapping, remembering which
/// requested keys had no usable value.
pub struct FieldReader<'a> {
    data: &'a BTreeMap<String, FieldValue>,
    missing: Vec<&'static str>,
}

impl<'a> FieldReader<'a> {
    pub fn new(data: &'a BTreeMap<String, FieldValue>) -> Self {
        Self {
            data,
            missing: Vec::new(),
        }
    }

    /// Take the display value for `key`, or `None` if absent or blank
    pub fn take(&mut self, key: &'static str) -> Option<String> {
        let value = self.data.get(key).and_then(FieldValue::display);
        if value.is_none() {
            self.missing.push(key);
        }
        value
    }

    /// Keys requested so far that had no usable value, in request order
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    pub fn into_missing(self) -> Vec<&'static str> {
        self.missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_fields_starts_with_common() {
        let fields = expected_fields(CertificateType::Death);
        assert_eq!(fields.len(), COMMON_FIELDS.len() + DEATH_FIELDS.len());
        assert_eq!(fields[0], "form_number");
        assert_eq!(fields.last(), Some(&"cause_of_death"));
    }

    #[test]
    fn test_reader_tracks_missing_keys() {
        let mut data = BTreeMap::new();
        data.insert("child_name".to_string(), FieldValue::Text("Ana".to_string()));
        data.insert("sex".to_string(), FieldValue::Text("   ".to_string()));
        data.insert("prn".to_string(), FieldValue::Empty);

        let mut reader = FieldReader::new(&data);
        assert_eq!(reader.take("child_name"), Some("Ana".to_string()));
        assert_eq!(reader.take("sex"), None);
        assert_eq!(reader.take("prn"), None);
        assert_eq!(reader.take("mother_name"), None);
        assert_eq!(reader.missing(), &["sex", "prn", "mother_name"]);
    }

    #[test]
    fn test_sex_shared_between_birth_and_death() {
        assert!(BIRTH_FIELDS.contains(&"sex"));
        assert!(DEATH_FIELDS.contains(&"sex"));
        assert!(!MARRIAGE_FIELDS.contains(&"sex"));
    }
}
