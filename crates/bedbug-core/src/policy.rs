//! Hook for the game rules that drive the spider and the bite.
//!
//! The core only moves the spider while it is flagged as descending; when
//! descent starts and when the player is bitten is decided here.

use crate::constants::PLAYER_BODY_HEIGHT;
use crate::player::PlayerPose;
use crate::spider::DescentActor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyEvent {
    BeginDescent,
    Accelerate,
    /// The spider got the player; the app switches to hell.
    Bite,
}

pub struct PolicyContext<'a> {
    pub player: &'a PlayerPose,
    pub spider: &'a DescentActor,
    /// Seconds spent on the web since the last return to it.
    pub hub_time_sec: f32,
}

pub trait GamePolicy {
    /// Called once per web frame, after the spider has moved.
    fn evaluate(&mut self, ctx: &PolicyContext<'_>) -> Option<PolicyEvent>;

    /// Called whenever the app returns to the web.
    fn reset(&mut self) {}
}

/// Never fires; the spider stays put.
#[derive(Default, Clone, Copy, Debug)]
pub struct NoPolicy;

impl GamePolicy for NoPolicy {
    fn evaluate(&mut self, _ctx: &PolicyContext<'_>) -> Option<PolicyEvent> {
        None
    }
}

/// Timed descent: the spider drops after a while on the web, speeds up
/// later and bites once it reaches the player's head.
#[derive(Clone, Copy, Debug)]
pub struct TimedDescent {
    pub begin_after_sec: f32,
    pub accelerate_after_sec: f32,
}

impl Default for TimedDescent {
    fn default() -> Self {
        Self {
            begin_after_sec: 20.0,
            accelerate_after_sec: 35.0,
        }
    }
}

impl GamePolicy for TimedDescent {
    fn evaluate(&mut self, ctx: &PolicyContext<'_>) -> Option<PolicyEvent> {
        let spider = ctx.spider;
        if !spider.descending {
            return (ctx.hub_time_sec >= self.begin_after_sec).then_some(PolicyEvent::BeginDescent);
        }
        if spider.y <= ctx.player.position.y + PLAYER_BODY_HEIGHT {
            return Some(PolicyEvent::Bite);
        }
        if !spider.accelerated && ctx.hub_time_sec >= self.accelerate_after_sec {
            return Some(PolicyEvent::Accelerate);
        }
        None
    }
}
