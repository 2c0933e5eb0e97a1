//! Typed certificate records, one variant per certificate type

use std::fmt;
use std::str::FromStr;

use super::fields::{self, FieldReader};
use super::record::CertificateRecord;
use crate::error::RecordError;

/// The three recognized certificate types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateType {
    Birth,
    Marriage,
    Death,
}

impl CertificateType {
    pub const ALL: [CertificateType; 3] = [
        CertificateType::Birth,
        CertificateType::Marriage,
        CertificateType::Death,
    ];

    /// The tag used in records
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateType::Birth => "birth",
            CertificateType::Marriage => "marriage",
            CertificateType::Death => "death",
        }
    }

    /// Heading shown above the certificate body
    pub fn title(&self) -> &'static str {
        match self {
            CertificateType::Birth => "Certificate of Live Birth",
            CertificateType::Marriage => "Certificate of Marriage",
            CertificateType::Death => "Certificate of Death",
        }
    }
}

impl fmt::Display for CertificateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CertificateType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "birth" => Ok(CertificateType::Birth),
            "marriage" => Ok(CertificateType::Marriage),
            "death" => Ok(CertificateType::Death),
            _ => Err(RecordError::unknown_type(s)),
        }
    }
}

/// How a raw record is turned into a typed certificate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Unknown tags produce no body and missing fields render blank
    #[default]
    Lenient,
    /// Unknown tags and missing fields are errors
    Strict,
}

/// Registry metadata printed in every certificate header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryHeader {
    pub form_number: Option<String>,
    pub office_name: Option<String>,
    pub office_address: Option<String>,
    pub current_date: Option<String>,
    pub page_number: Option<String>,
    pub book_number: Option<String>,
    pub registry_number: Option<String>,
    pub date_of_registration: Option<String>,
}

impl RegistryHeader {
    fn read(reader: &mut FieldReader<'_>) -> Self {
        Self {
            form_number: reader.take("form_number"),
            office_name: reader.take("office_name"),
            office_address: reader.take("office_address"),
            current_date: reader.take("current_date"),
            page_number: reader.take("page_number"),
            book_number: reader.take("book_number"),
            registry_number: reader.take("registry_number"),
            date_of_registration: reader.take("date_of_registration"),
        }
    }
}

/// Verification, approval and payment details in every certificate footer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attestation {
    pub verified_by: Option<String>,
    pub verified_by_title: Option<String>,
    pub approved_by: Option<String>,
    pub approved_by_title: Option<String>,
    pub amount_paid: Option<String>,
    pub or_number: Option<String>,
    pub date_paid: Option<String>,
    pub issued_to: Option<String>,
}

impl Attestation {
    fn read(reader: &mut FieldReader<'_>) -> Self {
        Self {
            verified_by: reader.take("verified_by"),
            verified_by_title: reader.take("verified_by_title"),
            approved_by: reader.take("approved_by"),
            approved_by_title: reader.take("approved_by_title"),
            amount_paid: reader.take("amount_paid"),
            or_number: reader.take("or_number"),
            date_paid: reader.take("date_paid"),
            issued_to: reader.take("issued_to"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthFacts {
    pub prn: Option<String>,
    pub child_name: Option<String>,
    pub sex: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub mother_name: Option<String>,
    pub mother_citizenship: Option<String>,
    pub father_name: Option<String>,
    pub father_citizenship: Option<String>,
    pub marriage_date: Option<String>,
    pub marriage_place: Option<String>,
}

/// One contracting party of a marriage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Party {
    pub name: Option<String>,
    pub age: Option<String>,
    pub citizenship: Option<String>,
    pub civil_status: Option<String>,
    pub mother: Option<String>,
    pub father: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarriageFacts {
    pub husband: Party,
    pub wife: Party,
    pub date_of_marriage: Option<String>,
    pub place_of_marriage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeathFacts {
    pub deceased_name: Option<String>,
    pub sex: Option<String>,
    pub age: Option<String>,
    pub civil_status: Option<String>,
    pub citizenship: Option<String>,
    pub date_of_death: Option<String>,
    pub place_of_death: Option<String>,
    pub cause_of_death: Option<String>,
}

/// A certificate with its header, type-specific facts and attestation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document<F> {
    pub header: RegistryHeader,
    pub facts: F,
    pub attestation: Attestation,
}

pub type BirthCertificate = Document<BirthFacts>;
pub type MarriageCertificate = Document<MarriageFacts>;
pub type DeathCertificate = Document<DeathFacts>;

/// A typed certificate ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Certificate {
    Birth(BirthCertificate),
    Marriage(MarriageCertificate),
    Death(DeathCertificate),
}

impl Certificate {
    pub fn certificate_type(&self) -> CertificateType {
        match self {
            Certificate::Birth(_) => CertificateType::Birth,
            Certificate::Marriage(_) => CertificateType::Marriage,
            Certificate::Death(_) => CertificateType::Death,
        }
    }

    pub fn header(&self) -> &RegistryHeader {
        match self {
            Certificate::Birth(doc) => &doc.header,
            Certificate::Marriage(doc) => &doc.header,
            Certificate::Death(doc) => &doc.header,
        }
    }

    pub fn attestation(&self) -> &Attestation {
        match self {
            Certificate::Birth(doc) => &doc.attestation,
            Certificate::Marriage(doc) => &doc.attestation,
            Certificate::Death(doc) => &doc.attestation,
        }
    }

    /// Build a typed certificate from a raw record
    ///
    /// Returns `Ok(None)` for an unrecognized type tag in lenient mode. In
    /// strict mode an unrecognized tag is [`RecordError::UnknownType`] and any
    /// absent or blank schema field is [`RecordError::MissingFields`].
    pub fn from_record(
        record: &CertificateRecord,
        mode: ValidationMode,
    ) -> Result<Option<Self>, RecordError> {
        let certificate_type = match record.certificate_type.parse::<CertificateType>() {
            Ok(t) => t,
            Err(err) => {
                if mode == ValidationMode::Strict {
                    return Err(err);
                }
                tracing::warn!(
                    tag = %record.certificate_type,
                    "unrecognized certificate type, rendering without body"
                );
                return Ok(None);
            }
        };

        let mut reader = FieldReader::new(&record.template_data);
        let header = RegistryHeader::read(&mut reader);
        let certificate = match certificate_type {
            CertificateType::Birth => Certificate::Birth(Document {
                header,
                facts: read_birth(&mut reader),
                attestation: Attestation::read(&mut reader),
            }),
            CertificateType::Marriage => Certificate::Marriage(Document {
                header,
                facts: read_marriage(&mut reader),
                attestation: Attestation::read(&mut reader),
            }),
            CertificateType::Death => Certificate::Death(Document {
                header,
                facts: read_death(&mut reader),
                attestation: Attestation::read(&mut reader),
            }),
        };

        let missing = schema_order(certificate_type, reader.into_missing());
        if !missing.is_empty() {
            if mode == ValidationMode::Strict {
                return Err(RecordError::missing_fields(certificate_type, missing));
            }
            tracing::debug!(
                certificate_type = %certificate_type,
                missing = ?missing,
                "rendering blank placeholders for missing fields"
            );
        }

        Ok(Some(certificate))
    }
}

fn read_birth(reader: &mut FieldReader<'_>) -> BirthFacts {
    BirthFacts {
        prn: reader.take("prn"),
        child_name: reader.take("child_name"),
        sex: reader.take("sex"),
        date_of_birth: reader.take("date_of_birth"),
        place_of_birth: reader.take("place_of_birth"),
        mother_name: reader.take("mother_name"),
        mother_citizenship: reader.take("mother_citizenship"),
        father_name: reader.take("father_name"),
        father_citizenship: reader.take("father_citizenship"),
        marriage_date: reader.take("marriage_date"),
        marriage_place: reader.take("marriage_place"),
    }
}

fn read_marriage(reader: &mut FieldReader<'_>) -> MarriageFacts {
    MarriageFacts {
        husband: Party {
            name: reader.take("husband_name"),
            age: reader.take("husband_age"),
            citizenship: reader.take("husband_citizenship"),
            civil_status: reader.take("husband_civil_status"),
            mother: reader.take("husband_mother"),
            father: reader.take("husband_father"),
        },
        wife: Party {
            name: reader.take("wife_name"),
            age: reader.take("wife_age"),
            citizenship: reader.take("wife_citizenship"),
            civil_status: reader.take("wife_civil_status"),
            mother: reader.take("wife_mother"),
            father: reader.take("wife_father"),
        },
        date_of_marriage: reader.take("date_of_marriage"),
        place_of_marriage: reader.take("place_of_marriage"),
    }
}

fn read_death(reader: &mut FieldReader<'_>) -> DeathFacts {
    DeathFacts {
        deceased_name: reader.take("deceased_name"),
        sex: reader.take("sex"),
        age: reader.take("age"),
        civil_status: reader.take("civil_status"),
        citizenship: reader.take("citizenship"),
        date_of_death: reader.take("date_of_death"),
        place_of_death: reader.take("place_of_death"),
        cause_of_death: reader.take("cause_of_death"),
    }
}

/// Reorder missing keys to match the published field schema
fn schema_order(certificate_type: CertificateType, missing: Vec<&'static str>) -> Vec<String> {
    fields::expected_fields(certificate_type)
        .into_iter()
        .filter(|key| missing.contains(key))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record(certificate_type: CertificateType) -> CertificateRecord {
        fields::expected_fields(certificate_type)
            .into_iter()
            .fold(CertificateRecord::new(certificate_type.as_str()), |r, key| {
                r.with_field(key, format!("value of {key}"))
            })
    }

    #[test]
    fn test_parse_type_tag() {
        assert_eq!("birth".parse::<CertificateType>().ok(), Some(CertificateType::Birth));
        assert_eq!(" Marriage ".parse::<CertificateType>().ok(), Some(CertificateType::Marriage));
        assert_eq!("DEATH".parse::<CertificateType>().ok(), Some(CertificateType::Death));
        assert!("adoption".parse::<CertificateType>().is_err());
    }

    #[test]
    fn test_lenient_unknown_type_has_no_certificate() {
        let record = CertificateRecord::new("adoption").with_field("child_name", "X");
        let result = Certificate::from_record(&record, ValidationMode::Lenient);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_strict_unknown_type_is_error() {
        let record = CertificateRecord::new("adoption");
        let err = Certificate::from_record(&record, ValidationMode::Strict).unwrap_err();
        assert!(matches!(err, RecordError::UnknownType { ref tag } if tag == "adoption"));
    }

    #[test]
    fn test_birth_record_maps_fields() {
        let record = CertificateRecord::new("birth")
            .with_field("child_name", "Juan Dela Cruz")
            .with_field("page_number", 12u64);
        let cert = Certificate::from_record(&record, ValidationMode::Lenient)
            .unwrap()
            .unwrap();
        let Certificate::Birth(doc) = cert else {
            panic!("expected birth certificate");
        };
        assert_eq!(doc.facts.child_name.as_deref(), Some("Juan Dela Cruz"));
        assert_eq!(doc.header.page_number.as_deref(), Some("12"));
        assert_eq!(doc.facts.sex, None);
    }

    #[test]
    fn test_marriage_record_splits_parties() {
        let record = CertificateRecord::new("marriage")
            .with_field("husband_name", "Andres")
            .with_field("wife_name", "Gregoria")
            .with_field("wife_age", 19u64);
        let cert = Certificate::from_record(&record, ValidationMode::Lenient)
            .unwrap()
            .unwrap();
        let Certificate::Marriage(doc) = cert else {
            panic!("expected marriage certificate");
        };
        assert_eq!(doc.facts.husband.name.as_deref(), Some("Andres"));
        assert_eq!(doc.facts.wife.name.as_deref(), Some("Gregoria"));
        assert_eq!(doc.facts.wife.age.as_deref(), Some("19"));
        assert_eq!(doc.facts.husband.age, None);
    }

    #[test]
    fn test_strict_lists_missing_fields_in_schema_order() {
        let mut record = full_record(CertificateType::Death);
        record.template_data.remove("cause_of_death");
        record.template_data.remove("form_number");
        record.template_data.remove("age");

        let err = Certificate::from_record(&record, ValidationMode::Strict).unwrap_err();
        match err {
            RecordError::MissingFields {
                certificate_type,
                fields,
            } => {
                assert_eq!(certificate_type, CertificateType::Death);
                assert_eq!(fields, vec!["form_number", "age", "cause_of_death"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_accepts_complete_records() {
        for certificate_type in CertificateType::ALL {
            let record = full_record(certificate_type);
            let cert = Certificate::from_record(&record, ValidationMode::Strict)
                .unwrap()
                .unwrap();
            assert_eq!(cert.certificate_type(), certificate_type);
            assert_eq!(
                cert.attestation().issued_to.as_deref(),
                Some("value of issued_to")
            );
        }
    }
}
