//! The JS-facing surface of the engine: an immutable-per-frame scene snapshot
//! plus the `Engine` handle the host page's renderer polls. The engine never
//! renders; the host applies these values to its own scene graph.

use std::cell::RefCell;
use std::rc::Rc;

use fnv::FnvHashMap;
use glam::Vec3;
use js_sys::{Float32Array, Uint32Array};
use wasm_bindgen::prelude::*;

use folio_core::{orbit_path, CameraRig, Focus, StreamParticle, ORBIT_PATH_SEGMENTS};

use crate::frame::FrameContext;
use crate::overlay;

/// Per-body render state for one frame.
#[derive(Clone, Copy, Debug)]
pub struct BodySnapshot {
    pub position: Vec3,
    pub spin: f32,
    pub visual_scale: f32,
    /// False while the body's model has not loaded or another body holds
    /// focus; the host simply skips hidden bodies.
    pub visible: bool,
}

/// Everything the presentation layer needs for one frame, written by the
/// frame loop and read through [`Engine`].
pub struct SceneSnapshot {
    pub elapsed: f32,
    pub camera: CameraRig,
    pub zoom_complete: bool,
    pub focus: Option<usize>,
    pub bodies: Vec<BodySnapshot>,
    pub hub_visible: bool,
    pub hub_spin: f32,
    pub progress: f32,
    pub is_active: bool,
    pub star_y_offset: f32,
    pub star_spin: f32,
    pub avatar_y: f32,
    pub avatar_tilt: f32,
    pub avatar_spin: f32,
    pub avatar_pitch: f32,
    pub thruster: Vec<StreamParticle>,
    pub thruster_activity: f32,
    pub sway: f32,
    pub constellation_scales: Vec<f32>,
}

impl SceneSnapshot {
    pub fn new(camera: CameraRig) -> Self {
        Self {
            elapsed: 0.0,
            camera,
            zoom_complete: false,
            focus: None,
            bodies: Vec::new(),
            hub_visible: true,
            hub_spin: 0.0,
            progress: 0.0,
            is_active: false,
            star_y_offset: 0.0,
            star_spin: 0.0,
            avatar_y: 0.0,
            avatar_tilt: 0.0,
            avatar_spin: 0.0,
            avatar_pitch: 0.0,
            thruster: Vec::new(),
            thruster_activity: 0.0,
            sway: 0.0,
            constellation_scales: Vec::new(),
        }
    }
}

/// Handle exposed to the host page (as `window.folioEngine`). Focus changes
/// and asset readiness come in through here; per-frame state goes out as flat
/// typed arrays the renderer can upload directly.
#[wasm_bindgen]
pub struct Engine {
    ctx: Rc<RefCell<FrameContext>>,
    focus: Rc<RefCell<Focus>>,
    ready: Rc<RefCell<Vec<bool>>>,
    body_index: FnvHashMap<String, usize>,
    document: web_sys::Document,
}

impl Engine {
    pub fn new(
        ctx: Rc<RefCell<FrameContext>>,
        focus: Rc<RefCell<Focus>>,
        ready: Rc<RefCell<Vec<bool>>>,
        document: web_sys::Document,
    ) -> Self {
        let body_index = ctx
            .borrow()
            .field
            .configs()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        Self {
            ctx,
            focus,
            ready,
            body_index,
            document,
        }
    }
}

#[wasm_bindgen]
impl Engine {
    // ---------------- inputs from the host ----------------

    /// Select a body by index. Out-of-range indices are ignored with a
    /// warning rather than trusted; the render-side pick owes us validity
    /// but a stale index after a manifest swap should not wedge the camera.
    pub fn focus_body(&self, index: usize) {
        if index < self.ready.borrow().len() {
            *self.focus.borrow_mut() = Focus::Body(index);
            log::info!("[focus] body {index}");
        } else {
            log::warn!("[focus] ignoring out-of-range body {index}");
        }
    }

    /// Select a body by its configured name; returns false for unknown names.
    pub fn focus_by_name(&self, name: &str) -> bool {
        match self.body_index.get(name) {
            Some(&i) => {
                self.focus_body(i);
                true
            }
            None => false,
        }
    }

    /// Explicit deselect; the camera re-targets the overview next tick.
    pub fn clear_focus(&self) {
        *self.focus.borrow_mut() = Focus::Overview;
        log::info!("[focus] overview");
    }

    /// Mark a body's model loaded (or unloaded). Unready bodies are skipped
    /// in the snapshot, never an error.
    pub fn set_body_ready(&self, index: usize, ready: bool) {
        if let Some(slot) = self.ready.borrow_mut().get_mut(index) {
            *slot = ready;
        }
    }

    /// All startup assets are in; drop the loading overlay.
    pub fn set_loaded(&self) {
        overlay::hide_loading(&self.document);
    }

    // ---------------- scalar outputs ----------------

    pub fn body_count(&self) -> usize {
        self.ready.borrow().len()
    }

    pub fn zoom_complete(&self) -> bool {
        self.ctx.borrow().snapshot.zoom_complete
    }

    pub fn progress(&self) -> f32 {
        self.ctx.borrow().snapshot.progress
    }

    pub fn is_active(&self) -> bool {
        self.ctx.borrow().snapshot.is_active
    }

    pub fn elapsed(&self) -> f32 {
        self.ctx.borrow().snapshot.elapsed
    }

    pub fn hub_visible(&self) -> bool {
        self.ctx.borrow().snapshot.hub_visible
    }

    pub fn hub_spin(&self) -> f32 {
        self.ctx.borrow().snapshot.hub_spin
    }

    pub fn thruster_activity(&self) -> f32 {
        self.ctx.borrow().snapshot.thruster_activity
    }

    pub fn sway(&self) -> f32 {
        self.ctx.borrow().snapshot.sway
    }

    // ---------------- per-frame buffers ----------------

    /// `[eye.x, eye.y, eye.z, target.x, target.y, target.z]`.
    pub fn camera(&self) -> Float32Array {
        let cam = self.ctx.borrow().snapshot.camera;
        let data = [
            cam.eye.x, cam.eye.y, cam.eye.z, cam.target.x, cam.target.y, cam.target.z,
        ];
        Float32Array::from(&data[..])
    }

    /// Stride 6 per body: `x, y, z, spin, scale, visible`.
    pub fn bodies(&self) -> Float32Array {
        let ctx = self.ctx.borrow();
        let mut data = Vec::with_capacity(ctx.snapshot.bodies.len() * 6);
        for b in &ctx.snapshot.bodies {
            data.extend_from_slice(&[
                b.position.x,
                b.position.y,
                b.position.z,
                b.spin,
                b.visual_scale,
                if b.visible { 1.0 } else { 0.0 },
            ]);
        }
        Float32Array::from(&data[..])
    }

    /// `[y, tilt, spin, pitch]` for the scrollbar avatar.
    pub fn avatar(&self) -> Float32Array {
        let s = &self.ctx.borrow().snapshot;
        let data = [s.avatar_y, s.avatar_tilt, s.avatar_spin, s.avatar_pitch];
        Float32Array::from(&data[..])
    }

    /// Stride 6 per particle: `x, y, z, size, alpha, fraction`.
    pub fn thruster(&self) -> Float32Array {
        let ctx = self.ctx.borrow();
        let mut data = Vec::with_capacity(ctx.snapshot.thruster.len() * 6);
        for p in &ctx.snapshot.thruster {
            data.extend_from_slice(&[
                p.position.x,
                p.position.y,
                p.position.z,
                p.size,
                p.alpha,
                p.fraction,
            ]);
        }
        Float32Array::from(&data[..])
    }

    /// `[y_offset, spin, time]`; `time` feeds the host's twinkle shader.
    pub fn star_rig(&self) -> Float32Array {
        let s = &self.ctx.borrow().snapshot;
        let data = [s.star_y_offset, s.star_spin, s.elapsed];
        Float32Array::from(&data[..])
    }

    /// Per-star pulse scales for the skill constellation.
    pub fn constellation_scales(&self) -> Float32Array {
        Float32Array::from(&self.ctx.borrow().snapshot.constellation_scales[..])
    }

    // ---------------- static buffers (fetch once) ----------------

    /// Interleaved star positions, stride 3.
    pub fn star_positions(&self) -> Float32Array {
        let ctx = self.ctx.borrow();
        let mut data = Vec::with_capacity(ctx.starfield.len() * 3);
        for p in ctx.starfield.positions() {
            data.extend_from_slice(&[p.x, p.y, p.z]);
        }
        Float32Array::from(&data[..])
    }

    pub fn star_sizes(&self) -> Float32Array {
        Float32Array::from(self.ctx.borrow().starfield.sizes())
    }

    /// Interleaved star colors, stride 3.
    pub fn star_colors(&self) -> Float32Array {
        let ctx = self.ctx.borrow();
        let mut data = Vec::with_capacity(ctx.starfield.len() * 3);
        for c in ctx.starfield.colors() {
            data.extend_from_slice(c);
        }
        Float32Array::from(&data[..])
    }

    pub fn star_phases(&self) -> Float32Array {
        Float32Array::from(self.ctx.borrow().starfield.phases())
    }

    /// Closed ring polyline for one body's overview orbit, stride 3,
    /// centered on the system center. An out-of-range index yields an empty
    /// buffer; panicking here would take the whole module down.
    pub fn orbit_ring(&self, index: usize) -> Float32Array {
        let ctx = self.ctx.borrow();
        let radius = match ctx.field.ring_radius(index) {
            Some(r) => r,
            None => {
                log::warn!("[orbit] ignoring out-of-range ring {index}");
                return Float32Array::new_with_length(0);
            }
        };
        let center = ctx.field.center();
        let mut data = Vec::with_capacity((ORBIT_PATH_SEGMENTS + 1) * 3);
        for p in orbit_path(radius, ORBIT_PATH_SEGMENTS) {
            let w = center + p;
            data.extend_from_slice(&[w.x, w.y, w.z]);
        }
        Float32Array::from(&data[..])
    }

    /// Constellation star positions, stride 3.
    pub fn constellation_positions(&self) -> Float32Array {
        let ctx = self.ctx.borrow();
        let mut data = Vec::with_capacity(ctx.constellation.stars().len() * 3);
        for s in ctx.constellation.stars() {
            data.extend_from_slice(&[s.position.x, s.position.y, s.position.z]);
        }
        Float32Array::from(&data[..])
    }

    /// Connection edges as flat `(a, b)` index pairs.
    pub fn constellation_edges(&self) -> Uint32Array {
        let ctx = self.ctx.borrow();
        let mut data = Vec::with_capacity(ctx.constellation.edges().len() * 2);
        for &(a, b) in ctx.constellation.edges() {
            data.push(a as u32);
            data.push(b as u32);
        }
        Uint32Array::from(&data[..])
    }
}
