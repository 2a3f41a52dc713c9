// src/views/fragment.rs
// DOCUMENTATION: Renderer output node
// PURPOSE: A single element (tag, class, attributes, inner HTML) appended to a container

/// Element produced by a renderer
/// DOCUMENTATION: Pages turn fragments into real elements; `inner_html` is
/// already escaped, attribute values are escaped by `to_html`
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub attributes: Vec<(&'static str, String)>,
    pub inner_html: String,
}

impl Fragment {
    pub fn new(tag: &'static str) -> Self {
        Fragment {
            tag,
            class: None,
            attributes: Vec::new(),
            inner_html: String::new(),
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn html(mut self, inner_html: impl Into<String>) -> Self {
        self.inner_html = inner_html.into();
        self
    }

    /// Plain text content, escaped
    pub fn text(self, text: &str) -> Self {
        self.html(escape_html(text))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Serialized element, used by the headless page and the preview binary
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        if let Some(class) = self.class {
            html.push_str(&format!(" class=\"{}\"", class));
        }
        for (name, value) in &self.attributes {
            html.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        html.push('>');
        html.push_str(&self.inner_html);
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

/// Escape text for HTML content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
