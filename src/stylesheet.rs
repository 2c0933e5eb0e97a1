//! Stylesheet system for the preview's color palette
//!
//! Colors and fonts are exposed to the markup as CSS custom properties
//! (`--token`). A stylesheet maps tokens to concrete values and can be loaded
//! from TOML, so the same preview can be themed for different offices.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid stylesheet token '{token}' (use letters, digits, '-' or '_')")]
    InvalidToken { token: String },
    #[error("invalid value for stylesheet token '{token}': {value:?}")]
    InvalidValue { token: String, value: String },
}

/// A stylesheet mapping symbolic tokens to concrete values
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Token name -> CSS value, kept sorted so output is stable
    pub colors: BTreeMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - civil registry paper on a dimmed overlay
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "Civil Registry"

[colors]
overlay = "rgba(15, 23, 42, 0.6)"
surface = "#ffffff"
paper = "#fffdf5"
border = "#d4d4d8"
text-1 = "#1f2937"
text-2 = "#4b5563"
text-muted = "#9ca3af"
accent-1 = "#1d4ed8"
accent-dark = "#1e3a8a"
accent-text = "#ffffff"
font-family = "Georgia, 'Times New Roman', serif"
"##;

/// Layout rules for the modal and certificate; colors come from the palette
const BASE_RULES: &[&str] = &[
    ".{p}overlay { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: var(--overlay); }",
    ".{p}dialog { max-width: 56rem; max-height: 90vh; overflow: auto; background: var(--surface); color: var(--text-1); border: 1px solid var(--border); border-radius: 0.5rem; }",
    ".{p}certificate { margin: 1rem; padding: 2rem; background: var(--paper); font-family: var(--font-family); }",
    ".{p}facts th { text-align: left; font-weight: normal; color: var(--text-2); padding-right: 1rem; }",
    ".{p}blank { color: var(--text-muted); }",
    ".{p}disclaimer { font-size: 0.75rem; font-style: italic; color: var(--text-2); }",
    ".{p}button { padding: 0.5rem 1rem; border: 1px solid var(--border); border-radius: 0.375rem; background: var(--surface); }",
    ".{p}button-primary { background: var(--accent-1); border-color: var(--accent-dark); color: var(--accent-text); }",
];

/// Token names become `--token` custom properties
fn is_valid_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A value must stay inside its declaration and inside the `<style>` element
fn is_valid_value(value: &str) -> bool {
    !value.trim().is_empty()
        && !value
            .chars()
            .any(|c| matches!(c, '<' | '>' | '{' | '}' | ';' | '\\') || c.is_control())
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        for (token, value) in &parsed.colors {
            if !is_valid_token(token) {
                return Err(StylesheetError::InvalidToken {
                    token: token.clone(),
                });
            }
            if !is_valid_value(value) {
                return Err(StylesheetError::InvalidValue {
                    token: token.clone(),
                    value: value.clone(),
                });
            }
        }

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for exact token
    /// 2. Check default palette for exact token
    /// 3. Use category default (text → #1f2937, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(value) = self.resolve(token) {
            return value.to_string();
        }

        let default = Self::default();
        if let Some(value) = default.resolve(token) {
            return value.to_string();
        }

        if token.starts_with("text") {
            return "#1f2937".to_string();
        }
        if token.starts_with("accent") {
            return "#1d4ed8".to_string();
        }
        if token.starts_with("font") {
            return "serif".to_string();
        }

        "#ffffff".to_string()
    }

    /// This stylesheet's tokens layered over the default palette
    pub fn merged_with_default(&self) -> BTreeMap<String, String> {
        let mut merged = Self::default().colors;
        for (token, value) in &self.colors {
            merged.insert(token.clone(), value.clone());
        }
        merged
    }

    /// The stylesheet as CSS rules, one per line, with class names under `prefix`
    ///
    /// The first rule declares the palette on `:root`. Tokens or values that
    /// could escape their declaration are skipped.
    pub fn css_rules(&self, prefix: &str) -> Vec<String> {
        let declarations: Vec<String> = self
            .merged_with_default()
            .into_iter()
            .filter(|(token, value)| {
                let valid = is_valid_token(token) && is_valid_value(value);
                if !valid {
                    tracing::warn!(token = %token, "skipping invalid stylesheet property");
                }
                valid
            })
            .map(|(token, value)| format!("--{}: {};", token, value))
            .collect();

        let mut rules = vec![format!(":root {{ {} }}", declarations.join(" "))];
        rules.extend(BASE_RULES.iter().map(|rule| rule.replace("{p}", prefix)));
        rules
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
