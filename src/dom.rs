use bedbug_core::LinkOpener;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move || handler()) as Box<dyn FnMut()>
        );
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Show or hide an element by id; missing elements are ignored.
#[inline]
pub fn set_shown(document: &web::Document, element_id: &str, shown: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        set_element_shown(&el, shown);
    }
}

#[inline]
pub fn set_element_shown(el: &web::Element, shown: bool) {
    let cl = el.class_list();
    if shown {
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    } else {
        _ = cl.add_1("hidden");
        // fallback for environments without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Opens links in a new tab. A blocked popup is not reported back.
pub struct WindowLinkOpener;

impl LinkOpener for WindowLinkOpener {
    fn open(&mut self, url: &str) {
        log::info!("[link] open {}", url);
        if let Some(w) = web::window() {
            _ = w.open_with_url_and_target(url, "_blank");
        }
    }
}
