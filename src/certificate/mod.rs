//! Certificate records and their typed forms
//!
//! A [`CertificateRecord`] is the untyped input: a type tag and an open field
//! mapping. [`Certificate::from_record`] turns it into one of three typed
//! variants according to a [`ValidationMode`].

pub mod fields;
mod record;
mod types;

pub use record::{CertificateRecord, FieldValue};
pub use types::{
    Attestation, BirthCertificate, BirthFacts, Certificate, CertificateType, DeathCertificate,
    DeathFacts, Document, MarriageCertificate, MarriageFacts, Party, RegistryHeader,
    ValidationMode,
};
