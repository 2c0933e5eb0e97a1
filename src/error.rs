//! Error types for record parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::certificate::CertificateType;
use crate::renderer::SealError;
use crate::stylesheet::StylesheetError;

/// Character range in source text, as ariadne counts positions
pub type Span = std::ops::Range<usize>;

/// Errors raised while reading or validating a certificate record
#[derive(Error, Debug)]
pub enum RecordError {
    /// The record is not valid JSON or has the wrong shape
    #[error("invalid certificate record: {0}")]
    Json(#[from] serde_json::Error),

    /// The type tag names no known certificate type
    #[error("unknown certificate type '{tag}' (expected birth, marriage or death)")]
    UnknownType { tag: String },

    /// Schema fields that are absent or blank
    #[error("{certificate_type} certificate is missing fields: {}", fields.join(", "))]
    MissingFields {
        certificate_type: CertificateType,
        fields: Vec<String>,
    },
}

impl RecordError {
    pub fn unknown_type(tag: impl Into<String>) -> Self {
        Self::UnknownType { tag: tag.into() }
    }

    pub fn missing_fields(certificate_type: CertificateType, fields: Vec<String>) -> Self {
        Self::MissingFields {
            certificate_type,
            fields,
        }
    }

    /// Source span of the error, if it points into the record text
    pub fn span(&self, source: &str) -> Option<Span> {
        match self {
            RecordError::Json(err) if err.line() > 0 => {
                let offset = line_col_to_offset(source, err.line(), err.column());
                let start = char_index(source, offset);
                let len = source.chars().count();
                Some(start..(start + 1).min(len).max(start))
            }
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span(source) else {
            return format!("Error: {}", self);
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid certificate record")
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match (written, String::from_utf8(buf)) {
            (Ok(()), Ok(report)) => report,
            _ => format!("Error: {}", self),
        }
    }
}

/// Convert serde_json's 1-based line and column into a byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Number of characters before a byte offset, rounding down inside a character
fn char_index(source: &str, mut offset: usize) -> usize {
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    source[..offset].chars().count()
}

/// Errors from the configured render pipeline
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),

    #[error("seal image error: {0}")]
    Seal(#[from] SealError),
}

/// An action string that names neither `close` nor `generate`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown preview action '{0}'")]
pub struct UnknownAction(pub String);
