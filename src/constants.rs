// DOM wiring and render tuning constants for the web frontend.
//
// Element ids match `index.html`; world tuning lives in the core crate.
// Canvas and start flow
pub const CANVAS_ID: &str = "app-canvas";
pub const FALLBACK_CONTENT_ID: &str = "fallback-content";
pub const ENTER_3D_BUTTON_ID: &str = "enter-3d";

// Panels whose visibility follows the active page
pub const RESTART_BUTTON_ID: &str = "restart-button";
pub const MOUSE_LOOK_INFO_ID: &str = "mouse-look-info";
pub const PAGE_INFO_ID: &str = "page-info";
pub const GAME_OVER_ID: &str = "game-over";
pub const GAME_OVER_RESTART_ID: &str = "game-over-restart";

// Mobile direction buttons are `btn-forward`, `btn-backward`, ...
pub const DIRECTION_BUTTON_PREFIX: &str = "btn-";

// Renderer
pub const MAX_BILLBOARDS: usize = 2048;
pub const MAX_FRAME_DT_SEC: f32 = 0.25; // clamp long stalls (tab switches)

#[inline]
pub fn direction_button_id(direction_name: &str) -> String {
    format!("{}{}", DIRECTION_BUTTON_PREFIX, direction_name)
}
