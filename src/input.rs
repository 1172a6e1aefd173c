use bedbug_core::ndc_from_client;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Client position of the only finger on screen, if exactly one.
#[inline]
pub fn single_touch_pos(ev: &web::TouchEvent) -> Option<Vec2> {
    let touches = ev.touches();
    if touches.length() != 1 {
        return None;
    }
    touches
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

#[inline]
pub fn canvas_ndc(canvas: &web::HtmlCanvasElement, client: Vec2) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    ndc_from_client(
        client,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
