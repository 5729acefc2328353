use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
}

/// Text content of an embedded JSON block (`<script type="application/json">`),
/// if the page ships one.
pub fn embedded_json(document: &web::Document, id: &str) -> Option<String> {
    document.get_element_by_id(id).and_then(|el| el.text_content())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Current viewport height in CSS pixels; one wheel tick pages by this much.
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Offset of a section element within the scroll container.
pub fn section_offset_top(document: &web::Document, id: &str) -> Option<f64> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.offset_top() as f64)
}

/// Smooth-scroll the container to an absolute offset. The browser owns the
/// easing and the end-of-document clamp.
pub fn scroll_to(container: &web::Element, top: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&opts);
}
