//! DOM overlays the engine toggles directly: the startup loading screen and
//! the focused-body detail panel. Both are plain elements the page ships;
//! missing elements are ignored.

use web_sys as web;

const LOADING_OVERLAY_ID: &str = "loading-overlay";
const DETAIL_PANEL_ID: &str = "project-detail";

/// Fade out and drop the loading overlay once startup assets are in.
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let _ = el.set_attribute(
            "style",
            "opacity: 0; pointer-events: none; transition: opacity 0.5s;",
        );
        log::info!("[overlay] loading hidden");
    }
}

/// Show or hide the focused-body detail panel. Shown only after the camera
/// settles, so the panel never pops in mid-flight.
pub fn set_detail_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(DETAIL_PANEL_ID) {
        let style = if visible {
            "opacity: 1; pointer-events: auto; transition: opacity 0.3s;"
        } else {
            "opacity: 0; pointer-events: none; transition: opacity 0.3s;"
        };
        let _ = el.set_attribute("style", style);
    }
}
