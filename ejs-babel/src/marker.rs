//! Marker convention
//!
//! Block structure travels through HTML inside a single `class` attribute:
//!
//! - a type marker `<prefix>-<blockType>`, always the first token
//! - zero or more style tokens `<prefix>_<value>` (alignment, sub-type, boolean
//!   flags expressed as presence), in a fixed per-type order
//!
//! With the default prefix a centered header carries `class="prs-header prs_center"`.

/// Default marker namespace
pub const DEFAULT_PREFIX: &str = "prs";

/// Decoded contents of a class attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Marker {
    /// Block type name, `None` for marker containers (style tokens only)
    pub block_type: Option<String>,
    /// Style token values in document order, prefix stripped
    pub styles: Vec<String>,
}

impl Marker {
    pub fn has_style(&self, value: &str) -> bool {
        self.styles.iter().any(|s| s == value)
    }
}

/// Builds and reads class tokens for one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerConvention {
    prefix: String,
    type_head: String,
    style_head: String,
}

impl MarkerConvention {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            type_head: format!("{prefix}-"),
            style_head: format!("{prefix}_"),
            prefix,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build the class attribute value for a block: type marker first, then
    /// one style token per value, in the order given.
    pub fn add_marker<S: AsRef<str>>(&self, block_type: &str, styles: &[S]) -> String {
        let mut class = format!("{}{}", self.type_head, block_type);
        for style in styles {
            class.push(' ');
            class.push_str(&self.style_token(style.as_ref()));
        }
        class
    }

    /// A single `<prefix>_<value>` token, used for marked sub-elements.
    pub fn style_token(&self, value: &str) -> String {
        format!("{}{}", self.style_head, value)
    }

    /// Split a class attribute into its type marker and style tokens.
    pub fn parse_marker(&self, class: &str) -> Marker {
        let mut marker = Marker::default();
        for token in class.split_whitespace() {
            if let Some(value) = token.strip_prefix(&self.style_head) {
                marker.styles.push(value.to_string());
            } else if let Some(value) = token.strip_prefix(&self.type_head) {
                if marker.block_type.is_none() {
                    marker.block_type = Some(value.to_string());
                }
            }
        }
        marker
    }

    /// Attribute-contains check used to select candidate elements.
    pub fn is_candidate(&self, class: &str) -> bool {
        class.contains(&self.prefix)
    }

    /// Whether a class attribute carries the given style token.
    pub fn has_token(&self, class: &str, value: &str) -> bool {
        let token = self.style_token(value);
        class.split_whitespace().any(|t| t == token)
    }
}

impl Default for MarkerConvention {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
