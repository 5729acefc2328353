//! Orbital bodies on fixed circular paths around a common center.
//!
//! Positions are recomputed absolutely from elapsed time every tick; nothing
//! accumulates, so there is no drift and seeking to an arbitrary time is free.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{BODY_SPIN_RATE, HUB_SPIN_RATE};

/// Static configuration for one orbiting body. `distance` and `angular_speed`
/// are immutable for the lifetime of the body; the content fields ride along
/// for the overlay collaborator and never influence choreography.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub distance: f32,
    /// Radians per second; sign gives the orbit direction.
    pub angular_speed: f32,
    #[serde(default)]
    pub initial_phase: f32,
    pub visual_scale: f32,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Per-tick derived state for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyState {
    /// World-space position (center offset applied).
    pub position: Vec3,
    /// Self-rotation about +Y.
    pub spin: f32,
    pub visual_scale: f32,
}

pub struct OrbitalField {
    configs: Vec<BodyConfig>,
    center: Vec3,
}

impl OrbitalField {
    pub fn new(configs: Vec<BodyConfig>, center: Vec3) -> Self {
        Self { configs, center }
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn configs(&self) -> &[BodyConfig] {
        &self.configs
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// World position of body `index` at `elapsed` seconds.
    pub fn body_position(&self, index: usize, elapsed: f32) -> Vec3 {
        let c = &self.configs[index];
        let angle = c.initial_phase + elapsed * c.angular_speed;
        self.center + Vec3::new(angle.sin() * c.distance, 0.0, angle.cos() * c.distance)
    }

    /// Recompute every body for this tick. Pure in `elapsed`: the same input
    /// always yields the same output.
    pub fn tick(&self, elapsed: f32, out: &mut Vec<BodyState>) {
        out.clear();
        out.reserve(self.configs.len());
        for (i, c) in self.configs.iter().enumerate() {
            out.push(BodyState {
                position: self.body_position(i, elapsed),
                spin: elapsed * BODY_SPIN_RATE,
                visual_scale: c.visual_scale,
            });
        }
    }

    /// Orbit radius for a ring guide, `None` when the index is out of range.
    pub fn ring_radius(&self, index: usize) -> Option<f32> {
        self.configs.get(index).map(|c| c.distance)
    }

    /// Rotation of the central hub, only shown in the overview.
    pub fn hub_spin(&self, elapsed: f32) -> f32 {
        elapsed * HUB_SPIN_RATE
    }
}

/// Closed ring polyline for an overview orbit guide, centered on the origin.
/// The first and last points coincide.
pub fn orbit_path(radius: f32, segments: usize) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
        points.push(Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius));
    }
    points
}
