#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys as web;

use folio_core::{
    CameraParams, Constellation, ConstellationParams, ContentManifest, Focus, OrbitCamera,
    OrbitalField, ScrollAvatar, ScrollParams, ScrollSignal, Starfield, StarfieldParams,
    ThrusterParams, ThrusterStream, TrackParams, SYSTEM_CENTER,
};

mod dom;
mod events;
mod frame;
mod overlay;
mod snapshot;

pub use snapshot::Engine;

const PARTICLE_SEED: u64 = 42;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = dom::element_by_id(&document, "scroll-container")?;
    let track = dom::element_by_id(&document, "rocket-track")?;

    // Content ships as an embedded JSON manifest; a page without one (or with
    // a broken one) falls back to the built-in solar system.
    let manifest = match dom::embedded_json(&document, "content-manifest") {
        Some(json) => match ContentManifest::from_json(&json) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[manifest] falling back to defaults: {e}");
                ContentManifest::default()
            }
        },
        None => ContentManifest::default(),
    };
    log::info!(
        "[manifest] {} bodies, {} skill clusters",
        manifest.bodies.len(),
        manifest.constellation.len()
    );

    let field = OrbitalField::new(manifest.bodies.clone(), SYSTEM_CENTER.into());
    let camera = OrbitCamera::new(CameraParams::default());
    let starfield = Starfield::new(StarfieldParams::default(), PARTICLE_SEED);
    let thruster = ThrusterStream::new(ThrusterParams::default(), PARTICLE_SEED);
    let constellation = Constellation::new(
        &manifest.constellation,
        ConstellationParams::default(),
        PARTICLE_SEED,
    );

    let signal = Rc::new(RefCell::new(ScrollSignal::new(ScrollParams::default())));
    let avatar = Rc::new(RefCell::new(ScrollAvatar::new(TrackParams::default())));
    let focus = Rc::new(RefCell::new(Focus::Overview));
    let ready = Rc::new(RefCell::new(vec![false; field.len()]));

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        field,
        camera,
        starfield,
        thruster,
        constellation,
        signal.clone(),
        avatar.clone(),
        focus.clone(),
        ready.clone(),
        container.clone(),
        document.clone(),
        manifest.sections.clone(),
    )));

    let started = ctx.borrow().started;
    events::wire_input_handlers(events::InputWiring {
        container,
        track,
        document: document.clone(),
        signal,
        avatar,
        drag: Rc::new(RefCell::new(None)),
        sections: Rc::new(manifest.sections),
        started,
    });

    // Hand the engine to the page renderer as `window.folioEngine`.
    let engine = Engine::new(ctx.clone(), focus, ready, document);
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str("folioEngine"),
        &JsValue::from(engine),
    )
    .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    frame::start_loop(ctx);
    Ok(())
}
