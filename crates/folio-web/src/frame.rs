//! The per-frame driver: one `FrameContext::frame` call per rendered frame,
//! scheduled with requestAnimationFrame.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::{
    Constellation, Focus, OrbitCamera, OrbitalField, ScrollAvatar, ScrollSignal, Starfield,
    ThrusterStream,
};
use folio_core::orbit::BodyState;

use crate::overlay;
use crate::snapshot::{BodySnapshot, SceneSnapshot};

pub struct FrameContext {
    pub field: OrbitalField,
    pub camera: OrbitCamera,
    pub starfield: Starfield,
    pub thruster: ThrusterStream,
    pub constellation: Constellation,

    pub signal: Rc<RefCell<ScrollSignal>>,
    pub avatar: Rc<RefCell<ScrollAvatar>>,
    pub focus: Rc<RefCell<Focus>>,
    pub ready: Rc<RefCell<Vec<bool>>>,

    pub container: web::Element,
    pub document: web::Document,
    pub sections: Vec<String>,

    pub snapshot: SceneSnapshot,

    pub started: Instant,
    pub last_instant: Instant,
    bodies_scratch: Vec<BodyState>,
    detail_shown: bool,
    active_section: Option<usize>,
}

impl FrameContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        field: OrbitalField,
        camera: OrbitCamera,
        starfield: Starfield,
        thruster: ThrusterStream,
        constellation: Constellation,
        signal: Rc<RefCell<ScrollSignal>>,
        avatar: Rc<RefCell<ScrollAvatar>>,
        focus: Rc<RefCell<Focus>>,
        ready: Rc<RefCell<Vec<bool>>>,
        container: web::Element,
        document: web::Document,
        sections: Vec<String>,
    ) -> Self {
        let snapshot = SceneSnapshot::new(camera.rig());
        let now = Instant::now();
        Self {
            field,
            camera,
            starfield,
            thruster,
            constellation,
            signal,
            avatar,
            focus,
            ready,
            container,
            document,
            sections,
            snapshot,
            started: now,
            last_instant: now,
            bodies_scratch: Vec::new(),
            detail_shown: false,
            active_section: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();
        let clock = (now - self.started).as_secs_f64();

        // Scroll events feed update(); the frame loop only resolves the idle
        // deadline and reads the result.
        let scroll = self.signal.borrow_mut().poll(clock);
        let raw_offset = self.container.scroll_top() as f32;

        let focus = *self.focus.borrow();
        self.field.tick(elapsed, &mut self.bodies_scratch);
        self.camera.tick(focus, &self.bodies_scratch);

        let dragging = self.avatar.borrow().dragging();
        self.avatar.borrow_mut().tick(dt, scroll.is_active);
        self.thruster.tick_activity(scroll.is_active || dragging);
        self.constellation.tick();

        // Focus-detail overlay only appears once the camera has settled.
        let zoom = self.camera.zoom_complete();
        if zoom != self.detail_shown {
            overlay::set_detail_visible(&self.document, zoom);
            self.detail_shown = zoom;
        }

        self.highlight_section(scroll.progress);
        self.write_snapshot(elapsed, raw_offset, scroll.progress, scroll.is_active, focus);
    }

    /// Mark the nav entry of the section nearest the current progress.
    fn highlight_section(&mut self, progress: f32) {
        let n = self.sections.len();
        if n == 0 {
            return;
        }
        let idx = ((progress * (n - 1) as f32).round() as usize).min(n - 1);
        if self.active_section == Some(idx) {
            return;
        }
        for (i, id) in self.sections.iter().enumerate() {
            if let Some(el) = self.document.get_element_by_id(&format!("nav-{id}")) {
                if i == idx {
                    let _ = el.class_list().add_1("active");
                } else {
                    let _ = el.class_list().remove_1("active");
                }
            }
        }
        self.active_section = Some(idx);
    }

    fn write_snapshot(
        &mut self,
        elapsed: f32,
        raw_offset: f32,
        progress: f32,
        is_active: bool,
        focus: Focus,
    ) {
        let snap = &mut self.snapshot;
        snap.elapsed = elapsed;
        snap.camera = self.camera.rig();
        snap.zoom_complete = self.camera.zoom_complete();
        snap.focus = focus.index();

        let ready = self.ready.borrow();
        snap.bodies.clear();
        for (i, b) in self.bodies_scratch.iter().enumerate() {
            let loaded = ready.get(i).copied().unwrap_or(false);
            let visible = loaded
                && match focus {
                    Focus::Overview => true,
                    Focus::Body(j) => j == i,
                };
            snap.bodies.push(BodySnapshot {
                position: b.position,
                spin: b.spin,
                visual_scale: b.visual_scale,
                visible,
            });
        }
        snap.hub_visible = focus == Focus::Overview;
        snap.hub_spin = self.field.hub_spin(elapsed);

        snap.progress = progress;
        snap.is_active = is_active;

        let star_rig = self.starfield.rig(elapsed, raw_offset);
        snap.star_y_offset = star_rig.y_offset;
        snap.star_spin = star_rig.spin;

        let pose = self.avatar.borrow().pose(progress);
        snap.avatar_y = pose.y;
        snap.avatar_tilt = pose.tilt;
        snap.avatar_spin = pose.spin;
        snap.avatar_pitch = pose.pitch;

        self.thruster.tick(elapsed, &mut snap.thruster);
        snap.thruster_activity = self.thruster.activity();

        snap.sway = self.constellation.sway();
        snap.constellation_scales.clear();
        for i in 0..self.constellation.stars().len() {
            snap.constellation_scales
                .push(self.constellation.star_scale(i, elapsed));
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
