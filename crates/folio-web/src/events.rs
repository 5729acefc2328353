//! Browser input wiring: container scroll, wheel paging, and the pointer
//! drag on the scrollbar avatar strip. Each handler updates shared state the
//! frame loop reads; none of them render.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use folio_core::{apply_drag, page_target, ScrollAvatar, ScrollSignal};

use crate::dom;

/// Where a drag started: the pointer position and the container offset at
/// pointerdown.
#[derive(Clone, Copy, Debug)]
pub struct DragOrigin {
    pub client_y: f32,
    pub raw: f32,
}

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::Element,
    /// The strip the avatar rides; pointerdown here begins a drag.
    pub track: web::Element,
    pub document: web::Document,
    pub signal: Rc<RefCell<ScrollSignal>>,
    pub avatar: Rc<RefCell<ScrollAvatar>>,
    pub drag: Rc<RefCell<Option<DragOrigin>>>,
    pub sections: Rc<Vec<String>>,
    pub started: Instant,
}

impl InputWiring {
    fn clock(&self) -> f64 {
        (Instant::now() - self.started).as_secs_f64()
    }

    fn scroll_range(&self) -> f32 {
        (self.container.scroll_height() - self.container.client_height()).max(1) as f32
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_scroll(&w);
    wire_wheel(&w);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_nav(&w);

    // Prime the signal so the first frame sees the restored scroll position.
    let now = w.clock();
    let raw = w.container.scroll_top() as f32;
    let range = w.scroll_range();
    w.signal.borrow_mut().update(raw, range, now);
}

fn wire_scroll(w: &InputWiring) {
    let w = w.clone();
    let container = w.container.clone();
    let closure = Closure::wrap(Box::new(move |_: web::Event| {
        let raw = w.container.scroll_top() as f32;
        let range = w.scroll_range();
        w.signal.borrow_mut().update(raw, range, w.clock());
    }) as Box<dyn FnMut(_)>);
    let _ = container.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One wheel tick pages exactly one viewport height, smoothed by the browser.
fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let sign = ev.delta_y();
        if sign == 0.0 {
            return;
        }
        let current = w.container.scroll_top() as f32;
        let target = page_target(current, dom::viewport_height(), sign as f32);
        dom::scroll_to(&w.container, target as f64);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        // passive: false, so prevent_default is honored
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let track = w.track.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        *w.drag.borrow_mut() = Some(DragOrigin {
            client_y: ev.client_y() as f32,
            raw: w.container.scroll_top() as f32,
        });
        w.avatar.borrow_mut().begin_drag();
        let _ = w.track.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
        log::info!("[drag] begin at y={}", ev.client_y());
    }) as Box<dyn FnMut(_)>);
    let _ = track.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let origin = match *w.drag.borrow() {
            Some(o) => o,
            None => return,
        };
        let range = w.scroll_range();
        let per_pixel = w.avatar.borrow().scroll_per_pixel(range);
        let delta = ev.client_y() as f32 - origin.client_y;
        let raw = apply_drag(origin.raw, delta, per_pixel, range);
        // Instant jump; the avatar is the scrollbar thumb here, smoothing
        // would make it lag the pointer.
        w.container.set_scroll_top(raw as i32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ =
            wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_: web::PointerEvent| {
        if w.drag.borrow_mut().take().is_some() {
            w.avatar.borrow_mut().end_drag();
            log::info!("[drag] end");
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Nav buttons (`#nav-<section>`) smooth-scroll to their section's offset.
fn wire_nav(w: &InputWiring) {
    for id in w.sections.iter() {
        let id = id.clone();
        let document = w.document.clone();
        let container = w.container.clone();
        dom::add_click_listener(&w.document, &format!("nav-{id}"), move || {
            if let Some(top) = dom::section_offset_top(&document, &id) {
                dom::scroll_to(&container, top);
            }
        });
    }
}
