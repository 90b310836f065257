use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::decode::Bitmap;

/// Ordered, immutable bitmaps composing one animation cycle.
///
/// Shared behind an `Arc` by every rendered instance of the same resource;
/// per-instance playback state lives in
/// [`AnimationPlayer`](crate::animation::player::AnimationPlayer).
#[derive(Clone, Debug, Default)]
pub struct FrameSet {
    frames: Vec<Bitmap>,
}

impl FrameSet {
    /// Frame set over `frames` in cycle order.
    pub fn new(frames: Vec<Bitmap>) -> Self {
        Self { frames }
    }

    /// Number of frames in one cycle.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when the cycle has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Bitmap> {
        self.frames.get(index)
    }

    /// All frames in cycle order.
    pub fn frames(&self) -> &[Bitmap] {
        &self.frames
    }
}

/// One decoded resource held by the cache.
#[derive(Clone, Debug)]
pub enum CachedResource {
    /// Single decoded bitmap.
    Static(Bitmap),
    /// Materialized animation cycle, shared across rendered instances.
    Animated(Arc<FrameSet>),
}

/// Process-lifetime store mapping logical URLs to decoded resources.
///
/// A URL maps to at most one entry for the lifetime of the process; entries
/// are never evicted. Distinct URLs are bounded by author content, not user
/// input volume, so the cache is unbounded by design. Not thread-safe: the
/// intended access pattern is check/miss/load/store from the single thread
/// that owns document composition.
#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: HashMap<String, CachedResource>,
    decodes: HashMap<String, u64>,
}

impl ResourceCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry stored under `url`, if any.
    pub fn get(&self, url: &str) -> Option<&CachedResource> {
        self.entries.get(url)
    }

    /// Store `resource` under `url`, replacing any previous entry.
    pub fn insert(&mut self, url: impl Into<String>, resource: CachedResource) {
        self.entries.insert(url.into(), resource);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Times `url` went through an actual decode (cache hits excluded).
    pub fn decode_count(&self, url: &str) -> u64 {
        self.decodes.get(url).copied().unwrap_or(0)
    }

    pub(crate) fn record_decode(&mut self, url: &str) {
        *self.decodes.entry(url.to_string()).or_insert(0) += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;
