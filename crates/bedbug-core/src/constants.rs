use glam::Vec3;

// World tuning constants shared by the core and the web frontend.

// Player
pub const PLAYER_SPEED: f32 = 0.5; // world units per frame
pub const MOUSE_SENSITIVITY: f32 = 0.002; // radians per pixel of drag
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 4.0; // pointer travel beyond this is a drag, not a click
pub const PLAYER_BODY_HEIGHT: f32 = 2.0; // head height above the player's feet

// Hub (spider web)
pub const WEB_RADIUS: f32 = 50.0;
pub const HUB_MARGIN: f32 = 2.0; // keeps the player inside the outer ring

// First-person rooms
pub const PAGE_ROOM_SIZE: f32 = 50.0;
pub const PAGE_WALL_HEIGHT: f32 = 15.0;
pub const PAGE_PLAYER_START_Y: f32 = 2.0;
pub const ROOM_ENTRY_INSET: f32 = 5.0; // entry point distance from the back wall
pub const ROOM_MARGIN: f32 = 1.0;

// Hell basement
pub const BASEMENT_SIZE: f32 = 150.0;
pub const BASEMENT_WALL_HEIGHT: f32 = 20.0;
pub const BASEMENT_PLAYER_START_Y: f32 = 2.0;

// Cameras
pub const CAMERA_EYE_OFFSET: f32 = 0.5; // eye height above the player-attached camera mount
pub const PAGE_FOV_DEG: f32 = 80.0;
pub const PAGE_ZNEAR: f32 = 0.1;
pub const PAGE_ZFAR: f32 = 100.0;
pub const BASEMENT_ZFAR: f32 = 400.0;
pub const HUB_FOV_DEG: f32 = 90.0;
pub const HUB_ZNEAR: f32 = 0.1;
pub const HUB_ZFAR: f32 = 1000.0;
pub const HUB_CAMERA_EYE: [f32; 3] = [0.0, 30.0, -70.0];

// Spider
pub const SPIDER_INITIAL_Y: f32 = 30.0;
pub const SPIDER_THREAD_SLACK: f32 = 5.0; // thread anchor height above the initial altitude
pub const SPIDER_DESCENT_STEP: f32 = 0.05;
pub const SPIDER_FAST_DESCENT_STEP: f32 = 0.2;
pub const SPIDER_SCALE: f32 = 0.6;

// Picking radii approximate the half-extent of the text sprites
pub const TAB_PICK_RADIUS: f32 = 4.0;
pub const MENU_PICK_RADIUS: f32 = 2.5;

#[inline]
pub fn hub_camera_eye() -> Vec3 {
    Vec3::from(HUB_CAMERA_EYE)
}
