// Scrollbar avatar: track geometry, banking tilt, idle twirl gating, and the
// drag-to-scroll exchange rate.

use folio_core::avatar::{ScrollAvatar, TrackParams};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn travel_spans_the_track_minus_padding() {
    let avatar = ScrollAvatar::new(TrackParams::default());
    assert!(close(avatar.travel(), 11.0));
    assert!(close(avatar.start_y(), 5.5));
    assert!(close(avatar.end_y(), -5.5));
}

#[test]
fn pose_endpoints_and_midpoint() {
    let avatar = ScrollAvatar::new(TrackParams::default());
    assert!(close(avatar.pose(0.0).y, 5.5));
    assert!(close(avatar.pose(1.0).y, -5.5));
    assert!(close(avatar.pose(0.5).y, 0.0));
    // out-of-range progress clamps rather than overshooting the track
    assert!(close(avatar.pose(1.7).y, -5.5));
    assert!(close(avatar.pose(-0.3).y, 5.5));
}

#[test]
fn tilt_banks_through_the_travel() {
    let avatar = ScrollAvatar::new(TrackParams::default());
    assert!(close(avatar.pose(0.0).tilt, -0.1));
    assert!(close(avatar.pose(0.5).tilt, 0.0));
    assert!(close(avatar.pose(1.0).tilt, 0.1));
}

#[test]
fn idle_twirl_freezes_while_scrolling_or_dragging() {
    let mut avatar = ScrollAvatar::new(TrackParams::default());
    avatar.tick(1.0, false);
    assert!(close(avatar.pose(0.0).spin, 0.5));

    avatar.tick(1.0, true);
    assert!(close(avatar.pose(0.0).spin, 0.5), "scrolling freezes the twirl");

    avatar.begin_drag();
    avatar.tick(1.0, false);
    assert!(close(avatar.pose(0.0).spin, 0.5), "dragging freezes the twirl");

    avatar.end_drag();
    avatar.tick(2.0, false);
    assert!(close(avatar.pose(0.0).spin, 1.5));
}

#[test]
fn grab_flourish_pitches_down_and_returns() {
    let mut avatar = ScrollAvatar::new(TrackParams::default());
    assert!(close(avatar.pose(0.5).pitch, 0.0));

    avatar.begin_drag();
    avatar.tick(0.15, false);
    assert!(close(avatar.pose(0.5).pitch, -0.2), "peak at the half-time");

    avatar.tick(0.075, false);
    let returning = avatar.pose(0.5).pitch;
    assert!(returning > -0.2 && returning < 0.0, "easing back, got {returning}");

    avatar.tick(0.075, false);
    assert!(close(avatar.pose(0.5).pitch, 0.0), "flourish over");
    avatar.tick(1.0, false);
    assert!(close(avatar.pose(0.5).pitch, 0.0), "stays level afterwards");
}

#[test]
fn full_travel_drag_sweeps_the_whole_page() {
    let avatar = ScrollAvatar::new(TrackParams::default());
    // drag_scale 0.05 over travel 11 against a 2200px range
    assert!(close(avatar.scroll_per_pixel(2200.0), 10.0));
    // non-scrollable page floors the range instead of zeroing the rate
    assert!(avatar.scroll_per_pixel(0.0) > 0.0);
}
