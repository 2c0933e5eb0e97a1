//! The preview modal: a rendered view plus its two user actions

use std::fmt;
use std::str::FromStr;

use crate::certificate::CertificateType;
use crate::error::UnknownAction;

/// Rendered preview markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    markup: String,
    certificate_type: Option<CertificateType>,
}

impl View {
    pub fn new(markup: String, certificate_type: Option<CertificateType>) -> Self {
        Self {
            markup,
            certificate_type,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }

    /// Type of the certificate in the body, `None` when only the shell rendered
    pub fn certificate_type(&self) -> Option<CertificateType> {
        self.certificate_type
    }

    pub fn has_body(&self) -> bool {
        self.certificate_type.is_some()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

/// A user action offered by the modal's footer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    Close,
    Generate,
}

impl PreviewAction {
    /// Value of the button's `data-action` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewAction::Close => "close",
            PreviewAction::Generate => "generate",
        }
    }
}

impl FromStr for PreviewAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "close" => Ok(PreviewAction::Close),
            "generate" => Ok(PreviewAction::Generate),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// A rendered preview holding the caller's close and generate handlers
///
/// Handlers run only from [`trigger`](Self::trigger) (or its wrappers), once
/// per call. Rendering and reading the view never invoke them.
pub struct PreviewModal<C, G>
where
    C: FnMut(),
    G: FnMut(),
{
    view: View,
    on_close: C,
    on_generate: G,
}

impl<C, G> PreviewModal<C, G>
where
    C: FnMut(),
    G: FnMut(),
{
    pub fn new(view: View, on_close: C, on_generate: G) -> Self {
        Self {
            view,
            on_close,
            on_generate,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn into_view(self) -> View {
        self.view
    }

    /// Invoke the handler for `action`
    pub fn trigger(&mut self, action: PreviewAction) {
        tracing::debug!(action = action.as_str(), "preview action");
        match action {
            PreviewAction::Close => (self.on_close)(),
            PreviewAction::Generate => (self.on_generate)(),
        }
    }

    /// Parse a `data-action` value and invoke its handler
    pub fn dispatch(&mut self, action: &str) -> Result<PreviewAction, UnknownAction> {
        let action = action.parse()?;
        self.trigger(action);
        Ok(action)
    }

    pub fn close(&mut self) {
        self.trigger(PreviewAction::Close);
    }

    pub fn generate(&mut self) {
        self.trigger(PreviewAction::Generate);
    }
}

impl<C, G> fmt::Debug for PreviewModal<C, G>
where
    C: FnMut(),
    G: FnMut(),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewModal")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
