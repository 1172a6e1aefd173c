use crate::constants::*;
use glam::Vec3;

/// Tunable world parameters; `Default` uses the values in `constants`.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    pub player_speed: f32,
    pub mouse_sensitivity: f32,
    pub web_radius: f32,
    pub hub_margin: f32,
    pub room_size: f32,
    pub room_margin: f32,
    pub room_entry_inset: f32,
    pub page_player_start_y: f32,
    pub basement_player_start_y: f32,
    pub spider_initial_y: f32,
    pub spider_descent_step: f32,
    pub spider_fast_descent_step: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            web_radius: WEB_RADIUS,
            hub_margin: HUB_MARGIN,
            room_size: PAGE_ROOM_SIZE,
            room_margin: ROOM_MARGIN,
            room_entry_inset: ROOM_ENTRY_INSET,
            page_player_start_y: PAGE_PLAYER_START_Y,
            basement_player_start_y: BASEMENT_PLAYER_START_Y,
            spider_initial_y: SPIDER_INITIAL_Y,
            spider_descent_step: SPIDER_DESCENT_STEP,
            spider_fast_descent_step: SPIDER_FAST_DESCENT_STEP,
        }
    }
}

impl WorldConfig {
    /// Where the player stands after entering a room: near the back wall,
    /// facing the content wall at +Z.
    pub fn room_entry_point(&self) -> Vec3 {
        Vec3::new(
            0.0,
            self.page_player_start_y,
            -(self.room_size / 2.0 - self.room_entry_inset),
        )
    }

    /// Largest |x| or |z| the player may reach inside a room.
    #[inline]
    pub fn room_half_extent(&self) -> f32 {
        (self.room_size / 2.0 - self.room_margin).max(0.0)
    }

    /// Largest planar distance from the web centre.
    #[inline]
    pub fn hub_limit(&self) -> f32 {
        (self.web_radius - self.hub_margin).max(0.0)
    }
}
