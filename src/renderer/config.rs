//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlConfig {
    /// Whether to wrap the modal in a complete HTML document
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "crp-" for "crp-dialog")
    pub class_prefix: Option<String>,

    /// Text shown in place of a missing field value
    pub blank_placeholder: String,

    /// Modal title
    pub title: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("crp-".to_string()),
            blank_placeholder: String::new(),
            title: "Certificate Preview".to_string(),
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is a standalone document
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the placeholder for missing values
    pub fn with_blank_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.blank_placeholder = placeholder.into();
        self
    }

    /// Set the modal title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HtmlConfig::default();
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("crp-".to_string()));
        assert_eq!(config.blank_placeholder, "");
        assert_eq!(config.title, "Certificate Preview");
    }

    #[test]
    fn test_builder_pattern() {
        let config = HtmlConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("lcr-")
            .with_blank_placeholder("—")
            .with_title("Preview");

        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, Some("lcr-".to_string()));
        assert_eq!(config.blank_placeholder, "—");
        assert_eq!(config.title, "Preview");
        assert_eq!(config.without_class_prefix().class_prefix, None);
    }
}
