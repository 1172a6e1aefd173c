//! Per-frame player integration and boundary constraints.

use crate::config::WorldConfig;
use crate::input::DirectionKeys;
use crate::page::Page;
use crate::player::PlayerPose;
use glam::Vec3;

/// Local-frame movement intent: forward is +Z, right is -X.
///
/// Opposing keys cancel; the result is either zero or unit length.
pub fn movement_vector(keys: &DirectionKeys) -> Vec3 {
    let mut v = Vec3::ZERO;
    if keys.forward {
        v.z += 1.0;
    }
    if keys.backward {
        v.z -= 1.0;
    }
    if keys.left {
        v.x += 1.0;
    }
    if keys.right {
        v.x -= 1.0;
    }
    v.normalize_or_zero()
}

#[inline]
pub fn clamp_to_room(pos: Vec3, half_extent: f32) -> Vec3 {
    Vec3::new(
        pos.x.clamp(-half_extent, half_extent),
        pos.y,
        pos.z.clamp(-half_extent, half_extent),
    )
}

/// Pull the player back onto the circle of `radius` when outside it.
#[inline]
pub fn clamp_to_hub(pos: Vec3, radius: f32) -> Vec3 {
    let dist = (pos.x * pos.x + pos.z * pos.z).sqrt();
    if dist > radius {
        let scale = radius / dist;
        Vec3::new(pos.x * scale, pos.y, pos.z * scale)
    } else {
        pos
    }
}

/// Advance the pose by one frame. Returns the applied displacement.
pub fn integrate(pose: &mut PlayerPose, keys: &DirectionKeys, page: Page, cfg: &WorldConfig) -> Vec3 {
    if page == Page::Hell {
        return Vec3::ZERO;
    }
    let before = pose.position;
    let local = movement_vector(keys);
    if local != Vec3::ZERO {
        pose.position += pose.orientation() * local * cfg.player_speed;
    }
    pose.position = if page.is_first_person() {
        clamp_to_room(pose.position, cfg.room_half_extent())
    } else {
        clamp_to_hub(pose.position, cfg.hub_limit())
    };
    pose.position - before
}
