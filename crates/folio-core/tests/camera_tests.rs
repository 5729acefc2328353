// Focus camera: eased approach, the latched zoom-complete flag, and
// deselection back to the overview vantage.

use glam::Vec3;

use folio_core::camera::{CameraParams, Focus, FocusPhase, OrbitCamera};
use folio_core::orbit::BodyState;

fn body(position: Vec3, visual_scale: f32) -> BodyState {
    BodyState {
        position,
        spin: 0.0,
        visual_scale,
    }
}

fn settle(camera: &mut OrbitCamera, focus: Focus, bodies: &[BodyState], ticks: usize) {
    for _ in 0..ticks {
        camera.tick(focus, bodies);
    }
}

#[test]
fn starts_at_the_overview_vantage() {
    let camera = OrbitCamera::new(CameraParams::default());
    let rig = camera.rig();
    assert_eq!(rig.eye, Vec3::new(80.0, 60.0, 80.0));
    assert_eq!(rig.target, Vec3::new(0.0, 5.0, 0.0));
    assert!(!camera.zoom_complete());
}

#[test]
fn approach_converges_and_latches_zoom_complete() {
    let mut camera = OrbitCamera::new(CameraParams::default());
    let bodies = [body(Vec3::new(0.0, 5.0, 13.0), 2.0)];

    camera.tick(Focus::Body(0), &bodies);
    assert_eq!(camera.phase(), FocusPhase::Approaching(0));
    assert!(!camera.zoom_complete());

    settle(&mut camera, Focus::Body(0), &bodies, 60);
    assert!(camera.zoom_complete(), "60 ticks is plenty to converge");

    // The flag latches: the body drifting along its orbit afterwards must
    // not flip it back to approaching.
    let moved = [body(Vec3::new(13.0, 5.0, 0.0), 2.0)];
    camera.tick(Focus::Body(0), &moved);
    assert!(camera.zoom_complete());
}

#[test]
fn deselect_clears_zoom_complete_immediately() {
    let mut camera = OrbitCamera::new(CameraParams::default());
    let bodies = [body(Vec3::new(0.0, 5.0, 13.0), 2.0)];
    settle(&mut camera, Focus::Body(0), &bodies, 60);
    assert!(camera.zoom_complete());

    camera.tick(Focus::Overview, &bodies);
    assert!(!camera.zoom_complete());
    assert_eq!(camera.phase(), FocusPhase::Overview);

    settle(&mut camera, Focus::Overview, &bodies, 100);
    let rig = camera.rig();
    assert!(rig.eye.abs_diff_eq(Vec3::new(80.0, 60.0, 80.0), 0.1));
    assert!(rig.target.abs_diff_eq(Vec3::new(0.0, 5.0, 0.0), 0.1));
}

#[test]
fn switching_bodies_restarts_the_approach() {
    let mut camera = OrbitCamera::new(CameraParams::default());
    let bodies = [
        body(Vec3::new(0.0, 5.0, 13.0), 2.0),
        body(Vec3::new(0.0, 5.0, -62.0), 2.0),
    ];
    settle(&mut camera, Focus::Body(0), &bodies, 60);
    assert_eq!(camera.phase(), FocusPhase::Focused(0));

    camera.tick(Focus::Body(1), &bodies);
    assert_eq!(
        camera.phase(),
        FocusPhase::Approaching(1),
        "the far body is well outside the convergence radius"
    );

    settle(&mut camera, Focus::Body(1), &bodies, 60);
    assert_eq!(camera.phase(), FocusPhase::Focused(1));
}

#[test]
fn larger_bodies_get_a_farther_vantage() {
    let small = OrbitCamera::focus_offset(1.0);
    let large = OrbitCamera::focus_offset(3.0);
    assert!(large.length() > small.length());
    assert!(large.z > small.z && large.y > small.y);
}
