use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::player::AnimationPlayer;
use crate::animation::ticker::{RenderTicker, SharedPlayer};
use crate::assets::cache::CachedResource;
use crate::assets::loader::ResourceLoader;
use crate::document::node::{ImageContent, ImageElement, RenderNode, TextRun};
use crate::document::section::{Section, SectionKind};
use crate::style::resolve::ResolvedStyle;

/// Document-wide font size used when the host has not set one.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Composed document: ordered render nodes plus restyle side-lists.
///
/// The node order matches the input section order and is preserved for the
/// document's lifetime. The side-lists index into the node list in discovery
/// order and exist for bulk restyles. Not thread-safe.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<RenderNode>,
    text_runs: Vec<usize>,
    images: Vec<usize>,
    font_size: f64,
}

impl Document {
    /// All render nodes, in section order.
    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    /// Number of render nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the document is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current document-wide font size.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Text runs in discovery order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.text_runs
            .iter()
            .filter_map(|&idx| self.nodes[idx].as_text())
    }

    /// Image elements in discovery order.
    pub fn images(&self) -> impl Iterator<Item = &ImageElement> {
        self.images
            .iter()
            .filter_map(|&idx| self.nodes[idx].as_image())
    }

    /// Apply a document-wide font size.
    ///
    /// Text runs follow the unset-only rule: a run with its own `FontSize`
    /// property keeps it. Image elements are resized to
    /// `font_size * ratio` using the ratio each element was composed with.
    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
        for &idx in &self.text_runs {
            if let RenderNode::Text(run) = &mut self.nodes[idx] {
                run.set_font_size_if_unset(font_size);
            }
        }
        for &idx in &self.images {
            if let RenderNode::Image(element) = &mut self.nodes[idx] {
                element.resize_for_font_size(font_size);
            }
        }
    }

    /// Release every animated element's tick registration.
    ///
    /// Registrations are the only thing keeping playback (and the shared
    /// frames) alive, so call this before discarding a composed document.
    pub fn unregister_all(&self, ticker: &mut RenderTicker) {
        for &idx in &self.images {
            if let Some(element) = self.nodes[idx].as_image()
                && let ImageContent::Animated { handle, .. } = &element.content
            {
                ticker.unregister(*handle);
            }
        }
    }
}

/// Compose `sections` into a renderable document.
///
/// Sections are resolved in order, one render node per section: text
/// sections become styled runs; image sections resolve through `loader` and
/// become sized, margined image elements, animated ones registered on
/// `ticker`. An image that fails to resolve falls back to a text run
/// carrying the section's alt text.
pub fn compose(
    sections: &[Section],
    loader: &mut ResourceLoader,
    ticker: &mut RenderTicker,
    font_size: f64,
) -> Document {
    let mut doc = Document {
        nodes: Vec::with_capacity(sections.len()),
        text_runs: Vec::new(),
        images: Vec::new(),
        font_size,
    };

    for section in sections {
        match section.kind {
            SectionKind::Text => push_text(&mut doc, section.content.clone(), section),
            SectionKind::Image | SectionKind::AnimatedImage => {
                match loader.load(&section.content) {
                    Some(resource) => push_image(&mut doc, ticker, resource, section),
                    None => {
                        tracing::debug!(url = %section.content, "image section fell back to alt text");
                        push_text(&mut doc, section.alt_text().to_string(), section);
                    }
                }
            }
        }
    }

    doc
}

fn push_text(doc: &mut Document, text: String, section: &Section) {
    let run = TextRun::new(text, section.style.clone(), doc.font_size);
    doc.text_runs.push(doc.nodes.len());
    doc.nodes.push(RenderNode::Text(run));
}

fn push_image(
    doc: &mut Document,
    ticker: &mut RenderTicker,
    resource: CachedResource,
    section: &Section,
) {
    let style = ResolvedStyle::resolve(&section.style, doc.font_size);
    let content = match resource {
        CachedResource::Static(bitmap) => ImageContent::Static(bitmap),
        CachedResource::Animated(frames) => {
            let player: SharedPlayer = Rc::new(RefCell::new(AnimationPlayer::new(frames)));
            let handle = ticker.register(Rc::clone(&player));
            ImageContent::Animated { player, handle }
        }
    };

    let element = ImageElement::new(content, style.ratio, doc.font_size, style.margin);
    doc.images.push(doc.nodes.len());
    doc.nodes.push(RenderNode::Image(element));
}
