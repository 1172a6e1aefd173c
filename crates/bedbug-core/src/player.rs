use crate::camera::{look_direction, Camera};
use glam::{Quat, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// The single player pose shared by every page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl PlayerPose {
    pub fn reset_to(&mut self, position: Vec3) {
        self.position = position;
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    /// Mouse-look: dragging right turns right, dragging up looks up.
    pub fn apply_look(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    #[inline]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    #[inline]
    pub fn view_direction(&self) -> Vec3 {
        look_direction(self.yaw, self.pitch)
    }

    /// Camera mounted `mount_height` above the player's feet.
    pub fn attached_camera(
        &self,
        mount_height: f32,
        aspect: f32,
        fovy_radians: f32,
        znear: f32,
        zfar: f32,
    ) -> Camera {
        let eye = self.position + Vec3::Y * mount_height;
        // look_at degenerates when looking straight up or down
        let dir = look_direction(self.yaw, self.pitch.clamp(-FRAC_PI_2 + 1e-3, FRAC_PI_2 - 1e-3));
        Camera {
            eye,
            target: eye + dir,
            up: Vec3::Y,
            aspect,
            fovy_radians,
            znear,
            zfar,
        }
    }
}
