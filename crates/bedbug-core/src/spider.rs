use crate::config::WorldConfig;
use crate::constants::SPIDER_THREAD_SLACK;
use glam::Vec3;

/// The spider hanging over the web on its thread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DescentActor {
    pub descending: bool,
    pub accelerated: bool,
    pub y: f32,
    initial_y: f32,
}

impl DescentActor {
    pub fn new(initial_y: f32) -> Self {
        Self {
            descending: false,
            accelerated: false,
            y: initial_y,
            initial_y,
        }
    }

    #[inline]
    pub fn initial_y(&self) -> f32 {
        self.initial_y
    }

    pub fn reset(&mut self) {
        self.descending = false;
        self.accelerated = false;
        self.y = self.initial_y;
    }

    pub fn begin_descent(&mut self) {
        self.descending = true;
    }

    pub fn accelerate(&mut self) {
        self.accelerated = true;
    }

    /// One frame of descent. Returns the altitude lost.
    pub fn update(&mut self, cfg: &WorldConfig) -> f32 {
        if !self.descending {
            return 0.0;
        }
        let step = if self.accelerated {
            cfg.spider_fast_descent_step
        } else {
            cfg.spider_descent_step
        };
        self.y -= step;
        step
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, self.y, 0.0)
    }

    /// Upper (anchor) and lower (spider) ends of the thread.
    pub fn thread_endpoints(&self) -> (Vec3, Vec3) {
        (
            Vec3::new(0.0, self.initial_y + SPIDER_THREAD_SLACK, 0.0),
            self.position(),
        )
    }
}
