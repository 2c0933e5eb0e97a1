//! Raw certificate records as supplied by the data-producing backend

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::RecordError;

/// A single display value in a record's field mapping
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// JSON `null`
    Empty,
    Text(String),
    /// Displayed the way a JavaScript host prints it: `155.00` shows as `155`
    Number(serde_json::Number),
    /// Any other JSON kind; renders blank
    Unsupported(serde_json::Value),
}

impl FieldValue {
    /// The string shown for this value, or `None` when it renders blank
    pub fn display(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            FieldValue::Number(n) => Some(display_number(n)),
            FieldValue::Empty | FieldValue::Unsupported(_) => None,
        }
    }
}

/// Whole-valued floats drop their fraction, as `Number.prototype.toString` does
fn display_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n.into())
    }
}

/// An untyped certificate record: a type tag plus a flat field mapping
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CertificateRecord {
    #[serde(alias = "certificateType")]
    pub certificate_type: String,
    #[serde(default, alias = "templateData")]
    pub template_data: BTreeMap<String, FieldValue>,
}

impl CertificateRecord {
    /// Create an empty record with the given type tag
    pub fn new(certificate_type: impl Into<String>) -> Self {
        Self {
            certificate_type: certificate_type.into(),
            template_data: BTreeMap::new(),
        }
    }

    /// Parse a record from JSON
    pub fn from_json(source: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Add a field value
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.template_data.insert(key.into(), value.into());
        self
    }

    /// Look up the display value of a field
    pub fn field(&self, key: &str) -> Option<String> {
        self.template_data.get(key).and_then(FieldValue::display)
    }
}
