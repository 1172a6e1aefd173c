//! Keyboard and drag state accumulated between frames.

use crate::constants::CLICK_DRAG_THRESHOLD_PX;
use crate::page::Page;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a `KeyboardEvent.key` value to a direction (WASD or arrows).
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Direction::Forward),
            "s" | "S" | "ArrowDown" => Some(Direction::Backward),
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Name used by the on-screen mobile buttons (`btn-forward`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    #[inline]
    pub fn set(&mut self, dir: Direction, pressed: bool) {
        match dir {
            Direction::Forward => self.forward = pressed,
            Direction::Backward => self.backward = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    #[inline]
    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::Forward => self.forward,
            Direction::Backward => self.backward,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
    /// Pixels travelled since the pointer went down.
    pub travel: f32,
}

#[derive(Default, Clone, Debug)]
pub struct InputTracker {
    pub keys: DirectionKeys,
    pub drag: DragState,
    // set when a look-drag ends; the browser click that follows is not a pick
    suppress_click: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the key is a movement key and was consumed.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.keys.set(dir, true);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.keys.set(dir, false);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn press(&mut self, dir: Direction) {
        self.keys.set(dir, true);
    }

    #[inline]
    pub fn release(&mut self, dir: Direction) {
        self.keys.set(dir, false);
    }

    /// Start a look-drag. The hub uses a fixed camera, so dragging is only
    /// armed on the other pages.
    pub fn pointer_down(&mut self, pos: Vec2, page: Page) -> bool {
        self.suppress_click = false;
        if page == Page::Web {
            return false;
        }
        self.drag = DragState {
            active: true,
            last: pos,
            travel: 0.0,
        };
        true
    }

    /// Returns the movement since the previous sample while dragging.
    pub fn pointer_move(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.drag.active {
            return None;
        }
        let delta = pos - self.drag.last;
        self.drag.last = pos;
        self.drag.travel += delta.length();
        Some(delta)
    }

    /// End the gesture. Returns true when it moved far enough to count as
    /// a look-drag, in which case the next click is swallowed.
    pub fn pointer_up(&mut self) -> bool {
        if !self.drag.active {
            return false;
        }
        self.drag.active = false;
        let dragged = self.drag.travel > CLICK_DRAG_THRESHOLD_PX;
        self.suppress_click = dragged;
        dragged
    }

    /// Consume the flag left by a finished look-drag.
    #[inline]
    pub fn take_suppressed_click(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }

    /// Drop every held key and any drag, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys = DirectionKeys::default();
        self.drag.active = false;
    }
}
