//! One scene per page, with visibility derived from the active page.

use crate::interaction::Interactable;
use crate::page::{CameraSlot, Page};
use glam::Vec3;
use smallvec::SmallVec;

/// A camera-facing disc; the only primitive the renderer draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    pub position: Vec3,
    pub size: f32,
    pub color: [f32; 4],
}

impl Billboard {
    #[inline]
    pub fn new(position: Vec3, size: f32, color: [f32; 4]) -> Self {
        Self {
            position,
            size,
            color,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub page: Page,
    pub background: [f32; 3],
    pub wall_text: &'static str,
    pub interactables: SmallVec<[Interactable; 6]>,
    pub props: Vec<Billboard>,
}

/// Scenes indexed by `Page::index`, plus the single active page.
pub struct SceneRegistry {
    scenes: [Scene; 5],
    active: Page,
}

impl SceneRegistry {
    pub fn build(mut make: impl FnMut(Page) -> Scene) -> Self {
        let scenes = std::array::from_fn(|i| make(Page::ALL[i]));
        Self {
            scenes,
            active: Page::Web,
        }
    }

    #[inline]
    pub fn active(&self) -> Page {
        self.active
    }

    /// Hide every scene and show `page`.
    #[inline]
    pub fn show_only(&mut self, page: Page) {
        self.active = page;
    }

    #[inline]
    pub fn is_visible(&self, page: Page) -> bool {
        self.active == page
    }

    pub fn visible_pages(&self) -> impl Iterator<Item = Page> + '_ {
        Page::ALL.into_iter().filter(|p| self.is_visible(*p))
    }

    #[inline]
    pub fn scene(&self, page: Page) -> &Scene {
        &self.scenes[page.index()]
    }

    #[inline]
    pub fn active_scene(&self) -> &Scene {
        self.scene(self.active)
    }

    #[inline]
    pub fn active_camera_slot(&self) -> CameraSlot {
        self.active.camera_slot()
    }
}
