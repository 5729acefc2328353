//! Focus-driven orbit camera: eases eye and look-at toward either a fixed
//! overview vantage or a selected body, and reports when the approach has
//! converged so the overlay UI can reveal detail content.

use glam::Vec3;

use crate::constants::{
    overview_eye, overview_target, CAMERA_EASE_ALPHA, ZOOM_COMPLETE_DISTANCE,
};
use crate::ease::approach_vec3;
use crate::orbit::BodyState;

/// What the camera is attending to. An explicit tagged union rather than a
/// nullable index so the two-state contract is checked at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Overview,
    Body(usize),
}

impl Focus {
    pub fn index(self) -> Option<usize> {
        match self {
            Focus::Overview => None,
            Focus::Body(i) => Some(i),
        }
    }
}

/// Where the focus approach currently stands. `Approaching` becomes `Focused`
/// the first tick the eye falls within the convergence radius; only an
/// explicit deselect returns to `Overview`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPhase {
    Overview,
    Approaching(usize),
    Focused(usize),
}

#[derive(Clone, Copy, Debug)]
pub struct CameraParams {
    /// Per-tick exponential approach fraction. Not delta-time scaled; the
    /// host calls one tick per rendered frame.
    pub ease_alpha: f32,
    /// Eye-to-target distance below which the zoom counts as complete.
    pub zoom_complete_distance: f32,
    pub overview_eye: Vec3,
    pub overview_target: Vec3,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            ease_alpha: CAMERA_EASE_ALPHA,
            zoom_complete_distance: ZOOM_COMPLETE_DISTANCE,
            overview_eye: overview_eye(),
            overview_target: overview_target(),
        }
    }
}

/// Current camera state: what the presentation layer applies to its own
/// scene graph every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
}

pub struct OrbitCamera {
    params: CameraParams,
    rig: CameraRig,
    phase: FocusPhase,
}

impl OrbitCamera {
    pub fn new(params: CameraParams) -> Self {
        let rig = CameraRig {
            eye: params.overview_eye,
            target: params.overview_target,
        };
        Self {
            params,
            rig,
            phase: FocusPhase::Overview,
        }
    }

    pub fn rig(&self) -> CameraRig {
        self.rig
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    /// True iff a focus is selected and the approach has converged. Forced
    /// false whenever the focus is `Overview`.
    pub fn zoom_complete(&self) -> bool {
        matches!(self.phase, FocusPhase::Focused(_))
    }

    /// Camera vantage for a focused body: above and in front, pushed further
    /// out for visually larger bodies.
    pub fn focus_offset(visual_scale: f32) -> Vec3 {
        Vec3::new(0.0, visual_scale * 1.2, 5.0 + visual_scale * 0.5)
    }

    /// One per-frame step. Caller guarantees that a `Focus::Body(i)` index is
    /// in bounds for `bodies`; deselecting simply re-targets the ease on the
    /// next tick, there is no separate cancel path.
    pub fn tick(&mut self, focus: Focus, bodies: &[BodyState]) -> CameraRig {
        let alpha = self.params.ease_alpha;
        match focus {
            Focus::Overview => {
                self.rig.eye = approach_vec3(self.rig.eye, self.params.overview_eye, alpha);
                self.rig.target = approach_vec3(self.rig.target, self.params.overview_target, alpha);
                self.phase = FocusPhase::Overview;
            }
            Focus::Body(i) => {
                let body = &bodies[i];
                let eye_target = body.position + Self::focus_offset(body.visual_scale);
                self.rig.eye = approach_vec3(self.rig.eye, eye_target, alpha);
                self.rig.target = approach_vec3(self.rig.target, body.position, alpha);

                self.phase = match self.phase {
                    // The flag latches: once focused, a body drifting along
                    // its orbit does not un-complete the zoom.
                    FocusPhase::Focused(j) if j == i => FocusPhase::Focused(i),
                    _ if self.rig.eye.distance(eye_target)
                        < self.params.zoom_complete_distance =>
                    {
                        FocusPhase::Focused(i)
                    }
                    _ => FocusPhase::Approaching(i),
                };
            }
        }
        self.rig
    }
}
