//! Inkline composes structured mixed-media text into host-renderable nodes.
//!
//! A *structured text* is an ordered sequence of [`Section`]s: styled text,
//! static images, and looping animated images. [`compose`] resolves every
//! section through the style model and the resource loader and emits a
//! [`Document`] of [`RenderNode`]s for a host layout framework to display:
//!
//! - Per-section style properties with typed coercion and defaults; explicit
//!   properties survive later document-wide restyles
//! - Image resources decoded at most once per logical URL and cached for the
//!   process lifetime; missing or undecodable images fall back to alt text
//! - Animated images advanced by an explicit [`RenderTicker`] the host pumps
//!   at its rendering cadence
//!
//! The composer, cache, and ticker are not thread-safe: the thread that owns
//! visible UI state must serialize all access.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Tick-driven playback for animated image elements.
pub mod animation;
/// Resource resolution: placeholder expansion, local/remote bytes, decode, cache.
pub mod assets;
/// Section model, render nodes, and document composition.
pub mod document;
/// Per-section style model: typed values, coercion, effective style.
pub mod style;

pub use crate::foundation::error::{InklineError, InklineResult};

pub use crate::animation::player::AnimationPlayer;
pub use crate::animation::ticker::{RenderTicker, SharedPlayer, TickHandle};
pub use crate::assets::cache::{CachedResource, FrameSet, ResourceCache};
pub use crate::assets::decode::Bitmap;
pub use crate::assets::fetch::{FetchResponse, HttpFetch, RemoteFetch};
pub use crate::assets::loader::ResourceLoader;
pub use crate::assets::vars::VarTable;
pub use crate::document::compose::{DEFAULT_FONT_SIZE, Document, compose};
pub use crate::document::node::{ImageContent, ImageElement, RenderNode, TextRun};
pub use crate::document::section::{Section, SectionKind};
pub use crate::style::color::ColorCode;
pub use crate::style::resolve::ResolvedStyle;
pub use crate::style::value::{StyleMap, StyleValue};
