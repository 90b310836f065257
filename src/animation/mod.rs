//! Tick-driven playback for animated image elements.
//!
//! Playback has no clock of its own: the host pumps
//! [`ticker::RenderTicker::tick`] at its rendering cadence and every
//! registered [`player::AnimationPlayer`] advances one frame. Frames are
//! shared immutably; cursors are per player, so instances over the same
//! resource animate independently.

/// Per-instance animation cursor advancing over shared frames.
pub mod player;
/// Host-pumped ticker driving registered players.
pub mod ticker;
