use std::sync::Arc;

use super::*;
use crate::assets::decode::Bitmap;

fn bitmap() -> Bitmap {
    Bitmap {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![0, 0, 0, 255]),
    }
}

#[test]
fn get_returns_inserted_entry() {
    let mut cache = ResourceCache::new();
    assert!(cache.get("a.png").is_none());

    cache.insert("a.png", CachedResource::Static(bitmap()));
    assert!(matches!(
        cache.get("a.png"),
        Some(CachedResource::Static(_))
    ));
    assert_eq!(cache.len(), 1);
}

#[test]
fn one_entry_per_url() {
    let mut cache = ResourceCache::new();
    cache.insert("a.png", CachedResource::Static(bitmap()));
    cache.insert(
        "a.png",
        CachedResource::Animated(Arc::new(FrameSet::new(vec![bitmap()]))),
    );
    assert_eq!(cache.len(), 1);
}

#[test]
fn decode_counts_start_at_zero_and_accumulate() {
    let mut cache = ResourceCache::new();
    assert_eq!(cache.decode_count("a.png"), 0);
    cache.record_decode("a.png");
    assert_eq!(cache.decode_count("a.png"), 1);
    assert_eq!(cache.decode_count("b.png"), 0);
}
