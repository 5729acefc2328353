//! The skill constellation: clusters of labelled stars joined by connection
//! lines, the whole group swaying back and forth while each star pulses.

use glam::Vec3;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One star within a cluster, positioned relative to the cluster offset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillStar {
    pub name: String,
    pub offset: [f32; 3],
    pub base_scale: f32,
}

/// A named cluster of stars plus the connection edges drawn between them
/// (indices local to the cluster).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillCluster {
    pub name: String,
    pub offset: [f32; 3],
    pub stars: Vec<SkillStar>,
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
}

#[derive(Clone, Copy, Debug)]
pub struct ConstellationParams {
    /// Sway step per tick, radians. Per-frame like the camera ease.
    pub sway_step: f32,
    /// Sway reverses when it reaches this amplitude.
    pub max_sway: f32,
    pub pulse_amplitude: f32,
    pub pulse_speed: f32,
}

impl Default for ConstellationParams {
    fn default() -> Self {
        Self {
            sway_step: 0.004,
            max_sway: 40.0_f32.to_radians(),
            pulse_amplitude: 0.035,
            pulse_speed: 2.5,
        }
    }
}

/// A star flattened into constellation space.
#[derive(Clone, Debug)]
pub struct PlacedStar {
    pub name: String,
    pub position: Vec3,
    pub base_scale: f32,
}

pub struct Constellation {
    params: ConstellationParams,
    stars: Vec<PlacedStar>,
    edges: SmallVec<[(usize, usize); 16]>,
    phases: Vec<f32>,
    sway: f32,
    direction: f32,
}

impl Constellation {
    /// Flatten the clusters into one star list with global edge indices and
    /// draw each star's pulse phase from the seed.
    pub fn new(clusters: &[SkillCluster], params: ConstellationParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut stars = Vec::new();
        let mut edges: SmallVec<[(usize, usize); 16]> = SmallVec::new();
        for cluster in clusters {
            let base = stars.len();
            let offset = Vec3::from(cluster.offset);
            for star in &cluster.stars {
                stars.push(PlacedStar {
                    name: star.name.clone(),
                    position: offset + Vec3::from(star.offset),
                    base_scale: star.base_scale,
                });
            }
            for &(a, b) in &cluster.edges {
                edges.push((base + a, base + b));
            }
        }
        let phases = (0..stars.len())
            .map(|_| rng.gen::<f32>() * std::f32::consts::TAU)
            .collect();
        Self {
            params,
            stars,
            edges,
            phases,
            sway: 0.0,
            direction: 1.0,
        }
    }

    pub fn stars(&self) -> &[PlacedStar] {
        &self.stars
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn sway(&self) -> f32 {
        self.sway
    }

    /// Advance the reversing sway one tick and return the new angle.
    pub fn tick(&mut self) -> f32 {
        self.sway += self.params.sway_step * self.direction;
        if self.sway.abs() >= self.params.max_sway {
            self.direction = -self.direction;
        }
        self.sway
    }

    /// Rendered scale of star `index` at `elapsed` seconds: base plus a small
    /// phase-shifted pulse.
    pub fn star_scale(&self, index: usize, elapsed: f32) -> f32 {
        let p = self.params;
        self.stars[index].base_scale
            + p.pulse_amplitude * (elapsed * p.pulse_speed + self.phases[index]).sin()
    }
}
