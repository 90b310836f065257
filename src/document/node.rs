use kurbo::{Insets, Size};

use crate::animation::ticker::{SharedPlayer, TickHandle};
use crate::assets::decode::Bitmap;
use crate::style::resolve::ResolvedStyle;
use crate::style::value::StyleMap;

/// Styled text run emitted for a text section or a fallen-back image section.
#[derive(Clone, Debug)]
pub struct TextRun {
    /// Text content displayed by the host.
    pub text: String,
    /// Effective style after defaults and coercion.
    pub style: ResolvedStyle,
    props: StyleMap,
}

impl TextRun {
    pub(crate) fn new(text: String, props: StyleMap, doc_font_size: f64) -> Self {
        let style = ResolvedStyle::resolve(&props, doc_font_size);
        Self { text, style, props }
    }

    /// Apply a document-wide font size unless this run sets its own.
    ///
    /// Explicit beats implicit: a `FontSize` present in the run's own
    /// properties is never overwritten by a bulk update.
    pub fn set_font_size_if_unset(&mut self, font_size: f64) {
        if !self.props.contains("FontSize") {
            self.style.font_size = font_size;
        }
    }

    /// The run's own style properties.
    pub fn props(&self) -> &StyleMap {
        &self.props
    }
}

/// Visual content of an image element.
#[derive(Clone, Debug)]
pub enum ImageContent {
    /// Static bitmap shared with the cache.
    Static(Bitmap),
    /// Tick-driven animation.
    Animated {
        /// Player advanced by the render ticker.
        player: SharedPlayer,
        /// Registration to release before discarding the element.
        handle: TickHandle,
    },
}

/// Inline image element sized relative to the document font size.
#[derive(Clone, Debug)]
pub struct ImageElement {
    /// Static bitmap or animated player.
    pub content: ImageContent,
    /// Upper bound on rendered width and height; the natural aspect ratio is
    /// preserved under it.
    pub max_size: Size,
    /// Outer margins (left, top, right, bottom).
    pub margin: Insets,
    /// Size-to-font-size ratio captured at composition.
    pub ratio: f64,
}

impl ImageElement {
    pub(crate) fn new(content: ImageContent, ratio: f64, font_size: f64, margin: Insets) -> Self {
        let bound = font_size * ratio;
        Self {
            content,
            max_size: Size::new(bound, bound),
            margin,
            ratio,
        }
    }

    /// Resize for a new document font size, keeping this element's ratio.
    pub fn resize_for_font_size(&mut self, font_size: f64) {
        let bound = font_size * self.ratio;
        self.max_size = Size::new(bound, bound);
    }

    /// Currently visible bitmap: the static image, or the frame the player
    /// last published.
    pub fn visible(&self) -> Option<Bitmap> {
        match &self.content {
            ImageContent::Static(bitmap) => Some(bitmap.clone()),
            ImageContent::Animated { player, .. } => player.borrow().visible().cloned(),
        }
    }
}

/// One composed render node handed to the host layout primitive.
#[derive(Clone, Debug)]
pub enum RenderNode {
    /// Styled text run.
    Text(TextRun),
    /// Inline image element.
    Image(ImageElement),
}

impl RenderNode {
    /// The node as a text run, if it is one.
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Self::Text(run) => Some(run),
            Self::Image(_) => None,
        }
    }

    /// The node as an image element, if it is one.
    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            Self::Text(_) => None,
            Self::Image(element) => Some(element),
        }
    }
}
