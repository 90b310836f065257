use std::sync::Arc;

use super::*;

fn frame(tag: u8) -> Bitmap {
    Bitmap {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![tag, 0, 0, 255]),
    }
}

fn frame_set(count: u8) -> Arc<FrameSet> {
    Arc::new(FrameSet::new((0..count).map(frame).collect()))
}

#[test]
fn advance_publishes_then_steps() {
    let mut player = AnimationPlayer::new(frame_set(3));
    assert!(player.visible().is_none());
    assert_eq!(player.cursor(), 0);

    player.advance();
    assert_eq!(player.visible().unwrap().rgba8_premul[0], 0);
    assert_eq!(player.cursor(), 1);

    player.advance();
    assert_eq!(player.visible().unwrap().rgba8_premul[0], 1);
    assert_eq!(player.cursor(), 2);
}

#[test]
fn cursor_is_periodic_in_frame_count() {
    for count in 1..=5u8 {
        let mut player = AnimationPlayer::new(frame_set(count));
        let start = player.cursor();
        for _ in 0..count {
            player.advance();
        }
        assert_eq!(player.cursor(), start);
    }
}

#[test]
fn wraps_to_first_frame() {
    let mut player = AnimationPlayer::new(frame_set(2));
    player.advance();
    player.advance();
    player.advance();
    // Third tick published frame 0 again.
    assert_eq!(player.visible().unwrap().rgba8_premul[0], 0);
    assert_eq!(player.cursor(), 1);
}

#[test]
fn empty_frame_set_is_a_permanent_no_op() {
    let mut player = AnimationPlayer::new(Arc::new(FrameSet::new(Vec::new())));
    for _ in 0..100 {
        player.advance();
    }
    assert!(player.visible().is_none());
    assert_eq!(player.cursor(), 0);
}

#[test]
fn players_share_frames_but_not_cursors() {
    let frames = frame_set(4);
    let mut a = AnimationPlayer::new(Arc::clone(&frames));
    let mut b = AnimationPlayer::new(frames);

    a.advance();
    a.advance();
    b.advance();

    assert_eq!(a.cursor(), 2);
    assert_eq!(b.cursor(), 1);
    assert!(Arc::ptr_eq(a.frames(), b.frames()));
}
