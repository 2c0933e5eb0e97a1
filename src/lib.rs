//! Civil Registry Preview - preview modals for civil-registry certificates
//!
//! This library turns a birth, marriage or death certificate record into the
//! markup of a read-only preview modal with "close" and "generate" actions.
//!
//! # Example
//!
//! ```rust
//! use civil_registry_preview::{render, CertificateRecord};
//!
//! let record = CertificateRecord::new("birth").with_field("child_name", "Juan Dela Cruz");
//! let modal = render(&record, || {}, || {});
//! assert!(modal.view().as_str().contains("Juan Dela Cruz"));
//! ```

pub mod certificate;
pub mod error;
pub mod preview;
pub mod renderer;
pub mod stylesheet;

pub use certificate::{Certificate, CertificateRecord, CertificateType, FieldValue, ValidationMode};
pub use error::{PreviewError, RecordError, UnknownAction};
pub use preview::{PreviewAction, PreviewModal, View};
pub use renderer::{HtmlConfig, SealImage};

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Configuration for the complete preview pipeline
#[derive(Debug, Clone, Default)]
pub struct PreviewConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Palette emitted as CSS custom properties
    pub stylesheet: Stylesheet,
    /// How records are validated before rendering
    pub validation: ValidationMode,
    /// Optional office seal shown in the header
    pub seal: Option<SealImage>,
}

impl PreviewConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the validation mode
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Set the office seal
    pub fn with_seal(mut self, seal: SealImage) -> Self {
        self.seal = Some(seal);
        self
    }
}

/// Render a record's preview view
///
/// The output depends only on `record` and `config`: calling this twice with
/// the same arguments yields identical markup.
pub fn render_view(record: &CertificateRecord, config: &PreviewConfig) -> Result<View, RecordError> {
    let certificate = Certificate::from_record(record, config.validation)?;
    Ok(view_for(certificate.as_ref(), config))
}

fn view_for(certificate: Option<&Certificate>, config: &PreviewConfig) -> View {
    let markup = renderer::render_modal(
        certificate,
        &config.html,
        &config.stylesheet,
        config.seal.as_ref(),
    );
    View::new(markup, certificate.map(Certificate::certificate_type))
}

/// Render a record's preview modal with default configuration
///
/// This is the main entry point for the library. Unknown certificate types
/// render the modal shell without a body and missing fields render blank, so
/// rendering never fails.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use civil_registry_preview::{render, CertificateRecord, PreviewAction};
///
/// let generated = Cell::new(false);
/// let record = CertificateRecord::new("death").with_field("cause_of_death", "Cardiac arrest");
/// let mut modal = render(&record, || {}, || generated.set(true));
///
/// assert!(modal.view().as_str().contains("Cardiac arrest"));
/// modal.trigger(PreviewAction::Generate);
/// assert!(generated.get());
/// ```
pub fn render<C, G>(record: &CertificateRecord, on_close: C, on_generate: G) -> PreviewModal<C, G>
where
    C: FnMut(),
    G: FnMut(),
{
    let certificate = Certificate::from_record(record, ValidationMode::Lenient)
        .ok()
        .flatten();
    let view = view_for(certificate.as_ref(), &PreviewConfig::default());
    PreviewModal::new(view, on_close, on_generate)
}

/// Render a record's preview modal with custom configuration
///
/// # Example
///
/// ```rust
/// use civil_registry_preview::{
///     render_with_config, CertificateRecord, HtmlConfig, PreviewConfig, PreviewError,
///     RecordError, ValidationMode,
/// };
///
/// let config = PreviewConfig::new()
///     .with_html(HtmlConfig::default().with_standalone(false))
///     .with_validation(ValidationMode::Strict);
///
/// let record = CertificateRecord::new("adoption");
/// let result = render_with_config(&record, &config, || {}, || {});
/// assert!(matches!(
///     result,
///     Err(PreviewError::Record(RecordError::UnknownType { .. }))
/// ));
/// ```
pub fn render_with_config<C, G>(
    record: &CertificateRecord,
    config: &PreviewConfig,
    on_close: C,
    on_generate: G,
) -> Result<PreviewModal<C, G>, PreviewError>
where
    C: FnMut(),
    G: FnMut(),
{
    let view = render_view(record, config)?;
    Ok(PreviewModal::new(view, on_close, on_generate))
}
