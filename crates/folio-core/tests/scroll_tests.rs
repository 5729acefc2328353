// Scroll signal normalization, activity debounce, and the drag / wheel
// position helpers.

use folio_core::scroll::{apply_drag, page_target, ScrollParams, ScrollSignal};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn progress_is_clamped_to_unit_range() {
    let mut signal = ScrollSignal::new(ScrollParams::default());
    assert!(close(signal.update(-50.0, 200.0, 0.0).progress, 0.0));
    assert!(close(signal.update(400.0, 200.0, 0.1).progress, 1.0));
    assert!(close(signal.update(100.0, 200.0, 0.2).progress, 0.5));
}

#[test]
fn zero_range_page_never_divides_by_zero() {
    let mut signal = ScrollSignal::new(ScrollParams::default());
    // range floored at 1, so offset 0.5 reads as progress 0.5
    let state = signal.update(0.5, 0.0, 0.0);
    assert!(close(state.progress, 0.5));
}

#[test]
fn movement_below_threshold_stays_idle() {
    let mut signal = ScrollSignal::new(ScrollParams::default());
    let state = signal.update(1.0, 1000.0, 0.0);
    assert!(!state.is_active, "0.001 progress is under the threshold");
}

#[test]
fn activity_falls_after_the_idle_delay() {
    let mut signal = ScrollSignal::new(ScrollParams::default());
    assert!(signal.update(100.0, 200.0, 0.0).is_active);
    assert!(signal.poll(0.10).is_active, "still within the idle delay");
    assert!(!signal.poll(0.20).is_active, "deadline passed");
    assert!(!signal.poll(0.30).is_active, "stays idle once dropped");
}

#[test]
fn fresh_movement_rearms_the_idle_deadline() {
    let mut signal = ScrollSignal::new(ScrollParams::default());
    signal.update(100.0, 200.0, 0.0);
    // second movement at 0.10 replaces the pending deadline with 0.25
    signal.update(150.0, 200.0, 0.10);
    assert!(signal.poll(0.20).is_active, "old deadline must not fire");
    assert!(!signal.poll(0.25).is_active);
}

#[test]
fn drag_offsets_scale_and_clamp() {
    assert!(close(apply_drag(100.0, 50.0, 2.0, 1000.0), 200.0));
    assert!(close(apply_drag(100.0, -200.0, 2.0, 1000.0), 0.0));
    assert!(close(apply_drag(900.0, 100.0, 2.0, 1000.0), 1000.0));
}

#[test]
fn wheel_pages_one_viewport_in_the_delta_direction() {
    assert!(close(page_target(100.0, 800.0, 3.7), 900.0));
    assert!(close(page_target(900.0, 800.0, -120.0), 100.0));
    // top of the document clamps at zero
    assert!(close(page_target(0.0, 800.0, -1.0), 0.0));
}
