use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::player::AnimationPlayer;

/// Player handle shared between the ticker and the owning image element.
pub type SharedPlayer = Rc<RefCell<AnimationPlayer>>;

/// Identifier of one tick registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

/// Explicit render-tick scheduler standing in for the host's frame clock.
///
/// The host calls [`RenderTicker::tick`] once per rendered frame; every
/// registered player advances once per call. A registration holds the player
/// (and through it the shared frame set) alive, so it must be released with
/// [`RenderTicker::unregister`] before the owning element is discarded.
/// Not thread-safe: tick on the thread permitted to mutate visible state.
#[derive(Debug, Default)]
pub struct RenderTicker {
    players: Vec<(TickHandle, SharedPlayer)>,
    next_id: u64,
}

impl RenderTicker {
    /// Ticker with no registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `player` for per-tick advancement.
    pub fn register(&mut self, player: SharedPlayer) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.players.push((handle, player));
        handle
    }

    /// Release the registration behind `handle`.
    ///
    /// Unknown handles are ignored; releasing twice is harmless.
    pub fn unregister(&mut self, handle: TickHandle) {
        self.players.retain(|(h, _)| *h != handle);
    }

    /// Advance every registered player by one frame.
    pub fn tick(&mut self) {
        for (_, player) in &self.players {
            player.borrow_mut().advance();
        }
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ticker.rs"]
mod tests;
