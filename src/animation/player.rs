use std::sync::Arc;

use crate::assets::cache::FrameSet;
use crate::assets::decode::Bitmap;

/// Playback cursor over one shared animation cycle.
///
/// The frame set is shared and read-only; the cursor is owned per rendered
/// instance, so two players over the same frames may desynchronize in phase.
/// A player animates for its whole lifetime: there is no paused or stopped
/// state, and dropping its tick registration is the only way to end playback.
#[derive(Clone, Debug)]
pub struct AnimationPlayer {
    frames: Arc<FrameSet>,
    cursor: usize,
    visible: Option<Bitmap>,
}

impl AnimationPlayer {
    /// Player positioned at the first frame, publishing nothing until the
    /// first tick.
    pub fn new(frames: Arc<FrameSet>) -> Self {
        Self {
            frames,
            cursor: 0,
            visible: None,
        }
    }

    /// Advance one tick: publish the frame under the cursor, then step the
    /// cursor, wrapping at the cycle length.
    ///
    /// An empty frame set stays a permanent no-op; nothing is ever published
    /// and the cursor never moves.
    pub fn advance(&mut self) {
        let Some(frame) = self.frames.get(self.cursor) else {
            return;
        };
        self.visible = Some(frame.clone());
        self.cursor = (self.cursor + 1) % self.frames.len();
    }

    /// Currently published frame, once a tick has run.
    pub fn visible(&self) -> Option<&Bitmap> {
        self.visible.as_ref()
    }

    /// Zero-based index of the next frame to publish.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Shared frame cycle backing this player.
    pub fn frames(&self) -> &Arc<FrameSet> {
        &self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/player.rs"]
mod tests;
