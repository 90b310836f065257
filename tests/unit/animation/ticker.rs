use std::sync::Arc;

use super::*;
use crate::assets::cache::FrameSet;
use crate::assets::decode::Bitmap;

fn shared_player(frame_count: u8) -> SharedPlayer {
    let frames = (0..frame_count)
        .map(|tag| Bitmap {
            width: 1,
            height: 1,
            rgba8_premul: Arc::new(vec![tag, 0, 0, 255]),
        })
        .collect();
    Rc::new(RefCell::new(AnimationPlayer::new(Arc::new(FrameSet::new(
        frames,
    )))))
}

#[test]
fn tick_advances_every_registration() {
    let mut ticker = RenderTicker::new();
    let a = shared_player(3);
    let b = shared_player(3);
    ticker.register(Rc::clone(&a));
    ticker.register(Rc::clone(&b));

    ticker.tick();
    assert_eq!(a.borrow().cursor(), 1);
    assert_eq!(b.borrow().cursor(), 1);
}

#[test]
fn unregister_stops_advancement() {
    let mut ticker = RenderTicker::new();
    let a = shared_player(3);
    let b = shared_player(3);
    let handle_a = ticker.register(Rc::clone(&a));
    ticker.register(Rc::clone(&b));

    ticker.tick();
    ticker.unregister(handle_a);
    ticker.tick();

    assert_eq!(a.borrow().cursor(), 1);
    assert_eq!(b.borrow().cursor(), 2);
    assert_eq!(ticker.len(), 1);
}

#[test]
fn unregister_twice_is_harmless() {
    let mut ticker = RenderTicker::new();
    let handle = ticker.register(shared_player(1));
    ticker.unregister(handle);
    ticker.unregister(handle);
    assert!(ticker.is_empty());
}

#[test]
fn registration_keeps_player_alive() {
    let mut ticker = RenderTicker::new();
    let player = shared_player(2);
    let weak = Rc::downgrade(&player);
    let handle = ticker.register(player);

    assert!(weak.upgrade().is_some());
    ticker.unregister(handle);
    assert!(weak.upgrade().is_none());
}
