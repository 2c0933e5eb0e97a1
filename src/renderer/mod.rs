//! HTML renderer for certificate previews
//!
//! This module takes a typed certificate and produces the preview modal's
//! markup, with CSS classes for styling.

pub mod config;
pub mod html;
pub mod seal;
pub mod templates;

pub use config::HtmlConfig;
pub use html::HtmlBuilder;
pub use seal::{SealError, SealImage};
pub use templates::{render_modal, DISCLAIMER};
