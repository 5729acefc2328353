// Orbital field choreography: absolute-time positions, radius invariants,
// and the overview orbit guides.

use std::f32::consts::PI;

use glam::Vec3;

use folio_core::config::ContentManifest;
use folio_core::constants::ORBIT_PATH_SEGMENTS;
use folio_core::orbit::{orbit_path, BodyState, OrbitalField};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn default_field() -> OrbitalField {
    let manifest = ContentManifest::default();
    OrbitalField::new(manifest.bodies, Vec3::new(0.0, 5.0, 0.0))
}

#[test]
fn body_position_is_pure_in_elapsed_time() {
    let field = default_field();
    let mut a = Vec::new();
    let mut b = Vec::new();
    field.tick(123.456, &mut a);
    field.tick(7.0, &mut b);
    field.tick(123.456, &mut b);
    assert_eq!(a, b, "same elapsed time must yield the same state");
}

#[test]
fn bodies_hold_their_configured_radius() {
    let field = default_field();
    let mut out: Vec<BodyState> = Vec::new();
    for step in 0..200 {
        let t = step as f32 * 0.37;
        field.tick(t, &mut out);
        for (state, config) in out.iter().zip(field.configs()) {
            let radial = state.position - field.center();
            assert!(
                close(radial.length(), config.distance),
                "{} drifted off its orbit at t={t}",
                config.name
            );
            assert!(close(radial.y, 0.0), "orbits stay in the y plane");
        }
    }
}

#[test]
fn zero_phase_body_starts_on_positive_z() {
    // angle 0 puts the body at center + (0, 0, distance)
    let field = default_field();
    let p = field.body_position(0, 0.0);
    let expected = field.center() + Vec3::new(0.0, 0.0, field.configs()[0].distance);
    assert!(p.abs_diff_eq(expected, 1e-3), "got {p}, expected {expected}");
}

#[test]
fn half_orbit_lands_on_negative_z() {
    let field = default_field();
    let c = &field.configs()[0];
    let half_period = PI / c.angular_speed;
    let p = field.body_position(0, half_period);
    let expected = field.center() + Vec3::new(0.0, 0.0, -c.distance);
    assert!(p.abs_diff_eq(expected, 1e-2), "got {p}, expected {expected}");
}

#[test]
fn spin_grows_linearly_with_time() {
    let field = default_field();
    let mut out = Vec::new();
    field.tick(10.0, &mut out);
    let at_10 = out[0].spin;
    field.tick(20.0, &mut out);
    assert!(close(out[0].spin, at_10 * 2.0));
    assert!(close(field.hub_spin(20.0), field.hub_spin(10.0) * 2.0));
}

#[test]
fn ring_radius_rejects_out_of_range_indices() {
    let field = default_field();
    assert_eq!(field.ring_radius(0), Some(13.0));
    assert_eq!(field.ring_radius(8), Some(69.0));
    assert_eq!(field.ring_radius(9), None, "one past the end must not panic");
    assert_eq!(field.ring_radius(usize::MAX), None);
}

#[test]
fn orbit_path_is_a_closed_ring() {
    let path = orbit_path(27.0, ORBIT_PATH_SEGMENTS);
    assert_eq!(path.len(), ORBIT_PATH_SEGMENTS + 1);
    assert!(path[0].abs_diff_eq(*path.last().unwrap(), 1e-3));
    for p in &path {
        assert!(close(p.length(), 27.0));
        assert!(close(p.y, 0.0));
    }
}
