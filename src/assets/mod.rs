//! Resource resolution for image sections.
//!
//! The [`loader::ResourceLoader`] is the only place external IO happens:
//! placeholder expansion through [`vars::VarTable`], local reads or one
//! synchronous remote GET through [`fetch::RemoteFetch`], decoding through
//! [`decode`], and memoization in [`cache::ResourceCache`]. Composition and
//! playback consume prepared, premultiplied bitmaps and never touch IO.

/// Process-lifetime memoization of decoded resources keyed by logical URL.
pub mod cache;
/// Image byte decoding into premultiplied bitmaps and frame sets.
pub mod decode;
/// Local and synchronous remote byte retrieval.
pub mod fetch;
/// Resource resolution orchestration: expand, fetch, decode, cache.
pub mod loader;
/// Placeholder variable expansion for resource URLs.
pub mod vars;
