use crate::constants::*;
use crate::dom;
use bedbug_core::{Page, UiVisibility};
use web_sys as web;

/// Apply the page-dependent panel visibility outside the canvas.
pub fn apply_page_ui(document: &web::Document, page: Page, ui: UiVisibility, wall_text: &str) {
    dom::set_shown(document, RESTART_BUTTON_ID, ui.page_controls);
    dom::set_shown(document, MOUSE_LOOK_INFO_ID, ui.page_controls);
    dom::set_shown(document, GAME_OVER_ID, ui.game_over);

    // Wall text is shown as a DOM panel; the renderer draws no glyphs.
    if let Some(el) = document.get_element_by_id(PAGE_INFO_ID) {
        let show = page != Page::Web && !wall_text.is_empty();
        el.set_text_content(Some(wall_text));
        dom::set_element_shown(&el, show);
    }
}

/// Leave the HTML fallback and reveal the 3D canvas.
pub fn enter_3d(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    dom::set_shown(document, FALLBACK_CONTENT_ID, false);
    dom::set_element_shown(canvas, true);
}

/// Initial state: fallback content visible, canvas hidden.
pub fn show_fallback(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    dom::set_shown(document, FALLBACK_CONTENT_ID, true);
    dom::set_element_shown(canvas, false);
}
