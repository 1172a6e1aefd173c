//! Clickable sprites and ray picking against them.

use crate::camera::Ray;
use crate::page::Page;
use glam::Vec3;

/// What happens when an interactable is clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Open the URL in a new browsing context.
    External(String),
    /// Switch the active page.
    PageLink(Page),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Interactable {
    pub label: String,
    pub position: Vec3,
    pub pick_radius: f32,
    pub color: [f32; 3],
    pub action: Action,
}

impl Interactable {
    pub fn external(
        label: &str,
        position: Vec3,
        pick_radius: f32,
        color: [f32; 3],
        url: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            position,
            pick_radius,
            color,
            action: Action::External(url.to_string()),
        }
    }

    pub fn page_link(
        label: &str,
        position: Vec3,
        pick_radius: f32,
        color: [f32; 3],
        page: Page,
    ) -> Self {
        Self {
            label: label.to_string(),
            position,
            pick_radius,
            color,
            action: Action::PageLink(page),
        }
    }
}

/// Opens external links. The browser implementation is fire-and-forget.
pub trait LinkOpener {
    fn open(&mut self, url: &str);
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // origin inside the sphere: the exit point is still a hit
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Nearest interactable hit by `ray`, with its distance along the ray.
pub fn pick<'a>(ray: &Ray, items: &'a [Interactable]) -> Option<(&'a Interactable, f32)> {
    let mut best = None::<(&Interactable, f32)>;
    for item in items {
        if let Some(t) = ray_sphere(ray.origin, ray.dir, item.position, item.pick_radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((item, t)),
            }
        }
    }
    best
}
