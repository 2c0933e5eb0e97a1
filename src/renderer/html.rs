//! Incremental HTML markup builder

use super::HtmlConfig;

/// Build HTML markup line by line, tracking open elements
pub struct HtmlBuilder {
    config: HtmlConfig,
    lines: Vec<String>,
    open: Vec<&'static str>,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            lines: vec![],
            open: vec![],
        }
    }

    pub fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    /// Prefix a list of space-separated class names
    pub fn class(&self, names: &str) -> String {
        let prefix = self.prefix();
        names
            .split_whitespace()
            .map(|name| format!("{}{}", prefix, name))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.open.len())
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Open an element; children are indented until the matching [`close`](Self::close)
    pub fn open(&mut self, tag: &'static str, attrs: &[(&str, &str)]) {
        self.lines
            .push(format!("{}<{}{}>", self.indent_str(), tag, format_attrs(attrs)));
        self.open.push(tag);
    }

    /// Close the most recently opened element
    pub fn close(&mut self) {
        if let Some(tag) = self.open.pop() {
            self.lines.push(format!("{}</{}>", self.indent_str(), tag));
        }
    }

    /// Add an element with escaped text content on a single line
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.inline(tag, attrs, &escape_html(text));
    }

    /// Add an element whose content is already markup
    pub fn inline(&mut self, tag: &str, attrs: &[(&str, &str)], markup: &str) {
        self.lines.push(format!(
            "{}<{}{}>{}</{}>",
            self.indent_str(),
            tag,
            format_attrs(attrs),
            markup,
            tag
        ));
    }

    /// [`open`](Self::open) with only a (prefixed) class attribute
    pub fn open_classed(&mut self, tag: &'static str, classes: &str) {
        let class = self.class(classes);
        self.open(tag, &[("class", class.as_str())]);
    }

    /// [`element`](Self::element) with only a (prefixed) class attribute
    pub fn element_classed(&mut self, tag: &str, classes: &str, text: &str) {
        let class = self.class(classes);
        self.element(tag, &[("class", class.as_str())], text);
    }

    /// [`inline`](Self::inline) with only a (prefixed) class attribute
    pub fn inline_classed(&mut self, tag: &str, classes: &str, markup: &str) {
        let class = self.class(classes);
        self.inline(tag, &[("class", class.as_str())], markup);
    }

    /// Add a void element such as `<meta>` or `<img>`
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.lines
            .push(format!("{}<{}{}>", self.indent_str(), tag, format_attrs(attrs)));
    }

    /// Add a line of markup verbatim, at the current indentation
    pub fn raw(&mut self, markup: &str) {
        self.lines.push(format!("{}{}", self.indent_str(), markup));
    }

    /// Markup for a field value, marked blank when missing
    pub fn value_span(&self, field: &str, value: Option<&str>) -> String {
        let (class, content) = self.value_parts(value);
        format!(
            r#"<span class="{}" data-field="{}">{}</span>"#,
            class,
            escape_html(field),
            content
        )
    }

    /// Add a labeled fact row: `<tr><th>label</th><td>value</td></tr>`
    pub fn fact_row(&mut self, label: &str, field: &str, value: Option<&str>) {
        let (class, content) = self.value_parts(value);
        let row = format!(
            r#"<tr><th scope="row">{}</th><td class="{}" data-field="{}">{}</td></tr>"#,
            escape_html(label),
            class,
            escape_html(field),
            content
        );
        self.raw(&row);
    }

    fn value_parts(&self, value: Option<&str>) -> (String, String) {
        match value {
            Some(v) => (self.class("value"), escape_html(v)),
            None => (
                self.class("value blank"),
                escape_html(&self.config.blank_placeholder),
            ),
        }
    }

    /// Close any open elements and join the markup
    pub fn build(mut self) -> String {
        while !self.open.is_empty() {
            self.close();
        }
        let nl = self.newline().to_string();
        self.lines.join(&nl)
    }
}

fn format_attrs(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(r#" {}="{}""#, name, escape_html(value)))
        .collect()
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
