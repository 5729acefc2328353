use glam::Vec3;

// Shared choreography tuning constants used by the web adapter and tests.
// Values were tuned by inspection at ~60 ticks/second; the per-tick ease
// alphas are intentionally not delta-time scaled.

// Camera
pub const CAMERA_EASE_ALPHA: f32 = 0.2; // per-tick exponential approach
pub const ZOOM_COMPLETE_DISTANCE: f32 = 10.0; // eye-to-target convergence radius
pub const OVERVIEW_EYE: [f32; 3] = [80.0, 60.0, 80.0];
pub const OVERVIEW_TARGET: [f32; 3] = [0.0, 5.0, 0.0];

// Scroll signal
pub const SCROLL_ACTIVITY_THRESHOLD: f32 = 0.01; // of normalized progress
pub const SCROLL_IDLE_DELAY: f64 = 0.15; // seconds without movement -> idle

// Orbital field
pub const SYSTEM_CENTER: [f32; 3] = [0.0, 5.0, 0.0];
pub const HUB_SPIN_RATE: f32 = 0.12; // rad/s for the central hub
pub const BODY_SPIN_RATE: f32 = 0.6; // rad/s self-rotation for every body
pub const ORBIT_PATH_SEGMENTS: usize = 64;

// Starfield coupling
pub const STARFIELD_PARALLAX: f32 = 0.4; // field rises 0.4 units per scrolled px
pub const STARFIELD_SPIN_RATE: f32 = 0.01; // rad/s slow drift

#[inline]
pub fn overview_eye() -> Vec3 {
    Vec3::from(OVERVIEW_EYE)
}

#[inline]
pub fn overview_target() -> Vec3 {
    Vec3::from(OVERVIEW_TARGET)
}

#[inline]
pub fn system_center() -> Vec3 {
    Vec3::from(SYSTEM_CENTER)
}
