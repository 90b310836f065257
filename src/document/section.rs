use serde::{Deserialize, Serialize};

use crate::style::value::StyleMap;

/// Content kind of one structured-text section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    /// Plain styled text.
    Text,
    /// Single static image.
    Image,
    /// Looping animated image.
    AnimatedImage,
}

/// One typed unit of structured content with attached style properties.
///
/// Sections are immutable once constructed; a document is an ordered, finite
/// sequence of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Content kind.
    pub kind: SectionKind,
    /// Text payload, or the image's logical URL.
    pub content: String,
    /// Text substituted when an image section fails to resolve; falls back
    /// to `content` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Style properties for this section.
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl Section {
    /// Text section.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: SectionKind::Text,
            content: content.into(),
            alt: None,
            style: StyleMap::new(),
        }
    }

    /// Static image section referencing `url`.
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: SectionKind::Image,
            content: url.into(),
            alt: None,
            style: StyleMap::new(),
        }
    }

    /// Animated image section referencing `url`.
    pub fn animated_image(url: impl Into<String>) -> Self {
        Self {
            kind: SectionKind::AnimatedImage,
            content: url.into(),
            alt: None,
            style: StyleMap::new(),
        }
    }

    /// Builder: attach alt text.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Builder: attach style properties.
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// Text payload used when image resolution misses.
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or(&self.content)
    }
}
