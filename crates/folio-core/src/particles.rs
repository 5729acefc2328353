//! Decorative particle systems: the ambient starfield and the avatar's
//! thruster stream.
//!
//! All per-particle attributes are drawn once at construction from a seeded
//! generator so a given seed reproduces the exact field; per-tick state is a
//! pure function of elapsed time and those immutable attributes.

use glam::Vec3;
use rand::prelude::*;

use crate::constants::{STARFIELD_PARALLAX, STARFIELD_SPIN_RATE};
use crate::ease::approach;

/// Palette the stars draw from: plain white, ice blue, warm moccasin.
pub const STAR_COLORS: [[f32; 3]; 3] = [
    [1.0, 1.0, 1.0],
    [0.8, 0.933, 1.0],
    [1.0, 0.894, 0.710],
];

#[derive(Clone, Copy, Debug)]
pub struct StarfieldParams {
    pub count: usize,
    /// Cylinder radius the stars are scattered inside.
    pub radius: f32,
    /// Full vertical extent of the cylinder.
    pub height: f32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            // Every star attribute crosses the JS boundary as a typed array
            // built at startup, so the default keeps that upload small. Hosts
            // wanting a denser sky pass their own count.
            count: 5000,
            radius: 700.0,
            height: 50_000.0,
        }
    }
}

/// Whole-field transform derived each tick: vertical parallax that tracks the
/// scroll offset plus a slow constant spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldRig {
    pub y_offset: f32,
    pub spin: f32,
}

pub struct Starfield {
    params: StarfieldParams,
    positions: Vec<Vec3>,
    sizes: Vec<f32>,
    colors: Vec<[f32; 3]>,
    phases: Vec<f32>,
}

impl Starfield {
    /// Scatter `params.count` stars in a cylinder. `sqrt` on the radial draw
    /// keeps the disc density uniform rather than center-heavy.
    pub fn new(params: StarfieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(params.count);
        let mut sizes = Vec::with_capacity(params.count);
        let mut colors = Vec::with_capacity(params.count);
        let mut phases = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let r = params.radius * rng.gen::<f32>().sqrt();
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            positions.push(Vec3::new(
                r * theta.cos(),
                (rng.gen::<f32>() - 0.5) * params.height,
                r * theta.sin(),
            ));
            sizes.push(rng.gen::<f32>() * 1.2 + 0.3);
            colors.push(STAR_COLORS[rng.gen_range(0..STAR_COLORS.len())]);
            phases.push(rng.gen::<f32>() * std::f32::consts::TAU);
        }
        Self {
            params,
            positions,
            sizes,
            colors,
            phases,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn params(&self) -> StarfieldParams {
        self.params
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    /// Twinkle brightness of star `index` at `elapsed` seconds, in [0.2, 1.0].
    pub fn twinkle(&self, index: usize, elapsed: f32) -> f32 {
        0.6 + 0.4 * (elapsed * 3.0 + self.phases[index]).sin()
    }

    /// Whole-field transform for this tick. `scroll_offset` is the raw
    /// container offset in pixels.
    pub fn rig(&self, elapsed: f32, scroll_offset: f32) -> StarfieldRig {
        StarfieldRig {
            y_offset: scroll_offset * STARFIELD_PARALLAX,
            spin: elapsed * STARFIELD_SPIN_RATE,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ThrusterParams {
    pub count: usize,
    /// Stream radius at the nozzle.
    pub top_radius: f32,
    /// Stream radius at the tail.
    pub base_radius: f32,
    /// Axial length of the repeating stream.
    pub stream_length: f32,
    /// Units per second particles travel down the stream.
    pub speed: f32,
    /// Per-tick ease fraction for the visibility scalar.
    pub activity_alpha: f32,
}

impl Default for ThrusterParams {
    fn default() -> Self {
        Self {
            count: 200,
            top_radius: 0.05,
            base_radius: 2.4,
            stream_length: 2.5,
            speed: 5.0,
            activity_alpha: 0.1,
        }
    }
}

/// Render state of one stream particle for this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StreamParticle {
    /// Offset from the nozzle, -Y down the stream.
    pub position: Vec3,
    /// 0 at the nozzle, approaching 1 at the tail.
    pub fraction: f32,
    pub alpha: f32,
    pub size: f32,
}

pub struct ThrusterStream {
    params: ThrusterParams,
    offsets: Vec<Vec3>,
    opacities: Vec<f32>,
    sizes: Vec<f32>,
    phases: Vec<f32>,
    activity: f32,
}

impl ThrusterStream {
    pub fn new(params: ThrusterParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut offsets = Vec::with_capacity(params.count);
        let mut opacities = Vec::with_capacity(params.count);
        let mut sizes = Vec::with_capacity(params.count);
        let mut phases = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let r = params.base_radius * rng.gen::<f32>().sqrt();
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            offsets.push(Vec3::new(r * theta.cos(), 0.0, r * theta.sin()));
            opacities.push(rng.gen::<f32>());
            sizes.push(rng.gen::<f32>() * 2.0 + 1.0);
            phases.push(rng.gen::<f32>() * params.stream_length);
        }
        Self {
            params,
            offsets,
            opacities,
            sizes,
            phases,
            activity: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn params(&self) -> ThrusterParams {
        self.params
    }

    /// Current visibility scalar in [0, 1].
    pub fn activity(&self) -> f32 {
        self.activity
    }

    /// Ease the visibility scalar toward the driving boolean. Call once per
    /// frame; the effect keeps fading after the boolean drops instead of
    /// snapping off.
    pub fn tick_activity(&mut self, active: bool) -> f32 {
        let target = if active { 1.0 } else { 0.0 };
        self.activity = approach(self.activity, target, self.params.activity_alpha);
        self.activity
    }

    /// Evaluate particle `index` at `elapsed` seconds. Pure: the looping
    /// stream offset is derived from elapsed time and the particle's phase.
    pub fn particle(&self, index: usize, elapsed: f32) -> StreamParticle {
        let p = self.params;
        let y_offset = (elapsed * p.speed + self.phases[index]).rem_euclid(p.stream_length);
        let fraction = y_offset / p.stream_length;
        // Taper from the nozzle radius out to the base radius along the stream.
        let taper = p.top_radius / p.base_radius;
        let radius_factor = taper + fraction * (1.0 - taper);
        let off = self.offsets[index];
        StreamParticle {
            position: Vec3::new(off.x * radius_factor, -y_offset, off.z * radius_factor),
            fraction,
            alpha: self.opacities[index] * (1.0 - fraction * 0.5) * self.activity,
            size: self.sizes[index],
        }
    }

    /// Evaluate the whole stream for this tick into `out`.
    pub fn tick(&self, elapsed: f32, out: &mut Vec<StreamParticle>) {
        out.clear();
        out.reserve(self.offsets.len());
        for i in 0..self.offsets.len() {
            out.push(self.particle(i, elapsed));
        }
    }
}
