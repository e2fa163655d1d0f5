// Host-side tests for the tween engine.

use glam::Vec2;
use tube_core::{Ease, Eased2, Tween};

#[test]
fn ease_endpoints_are_exact() {
    for ease in [Ease::ExpoOut, Ease::ExpoInOut] {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        // clamped outside the unit interval
        assert_eq!(ease.apply(-0.5), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.5), 1.0, "{ease:?}");
    }
}

#[test]
fn ease_curves_are_monotonic() {
    for ease in [Ease::ExpoOut, Ease::ExpoInOut] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{ease:?} not monotonic at step {i}");
            prev = v;
        }
    }
}

#[test]
fn expo_in_out_is_symmetric_at_midpoint() {
    assert!((Ease::ExpoInOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn tween_waits_out_its_delay() {
    let mut tween = Tween::new(1.0, 0.5, 0.2, Ease::ExpoOut);
    let v = tween.step(0.1, 0.25);
    assert_eq!(v, 0.25, "value untouched during delay");
    assert!(!tween.finished());
}

#[test]
fn tween_starts_from_the_live_value() {
    let mut tween = Tween::new(1.0, 1.0, 0.0, Ease::ExpoOut);
    // the animated slot sits at 0.3 when the tween first fires
    let v = tween.step(0.5, 0.3);
    assert!(v > 0.3 && v < 1.0, "got {v}");
}

#[test]
fn tween_lands_exactly_on_target() {
    let mut tween = Tween::new(0.0, 1.0, 0.0, Ease::ExpoInOut);
    let v = tween.step(1.0, 1.0);
    assert_eq!(v, 0.0);
    assert!(tween.finished());

    // overshooting the duration still clamps to the target
    let mut tween = Tween::new(1.0, 0.5, 0.1, Ease::ExpoOut);
    let v = tween.step(10.0, 0.0);
    assert_eq!(v, 1.0);
    assert!(tween.finished());
}

#[test]
fn tween_accumulates_across_small_steps() {
    let mut tween = Tween::new(1.0, 0.5, 0.0, Ease::ExpoOut);
    let mut value = 0.0;
    for _ in 0..100 {
        value = tween.step(0.01, value);
    }
    assert_eq!(value, 1.0);
    assert!(tween.finished());
}

#[test]
fn eased2_reaches_its_target() {
    let mut eased = Eased2::new(Vec2::ZERO, 0.5, Ease::ExpoOut);
    eased.retarget(Vec2::new(1.0, -1.0));
    eased.step(0.25);
    let mid = eased.value();
    assert!(mid.x > 0.0 && mid.x < 1.0);
    eased.step(0.25);
    assert_eq!(eased.value(), Vec2::new(1.0, -1.0));
}

#[test]
fn eased2_retarget_continues_from_current_value() {
    let mut eased = Eased2::new(Vec2::ZERO, 1.0, Ease::ExpoOut);
    eased.retarget(Vec2::new(1.0, 0.0));
    eased.step(0.5);
    let before = eased.value();
    eased.retarget(Vec2::ZERO);
    assert_eq!(eased.value(), before, "no jump on retarget");
    assert_eq!(eased.target(), Vec2::ZERO);
}
