//! Office seal image embedded in the certificate header

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SealError {
    #[error("Failed to read seal image: {0}")]
    IoError(#[from] std::io::Error),
    #[error("unsupported seal image format: {} (expected png, jpg, gif or svg)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// An image shown beside the office name, inlined as a data URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealImage {
    mime_type: &'static str,
    bytes: Vec<u8>,
}

impl SealImage {
    pub fn new(mime_type: &'static str, bytes: Vec<u8>) -> Self {
        Self { mime_type, bytes }
    }

    /// Load a seal image, picking the MIME type from the file extension
    pub fn from_file(path: &Path) -> Result<Self, SealError> {
        let mime_type = mime_type_for(path).ok_or_else(|| SealError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let bytes = std::fs::read(path)?;
        Ok(Self::new(mime_type, bytes))
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
