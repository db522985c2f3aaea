//! Ripple touch-feedback effect.
//!
//! On press a circle expands from the touch point while a background tint
//! fades in; on release both fade back out. [`RippleEffect`] owns the
//! animation state and drives itself through the host's
//! [`FrameScheduler`](crate::scheduler::FrameScheduler).

mod engine;
mod state;

pub use engine::{RippleEffect, TouchKind};
pub use state::{transition, Action, Input, Phase, RippleState};

use crate::widgets::Color;

/// Configuration for the ripple feedback animation.
///
/// All values are fixed at construction time; there is no runtime
/// reconfiguration surface beyond building a new effect.
#[derive(Clone, Debug)]
pub struct RippleConfig {
    /// Base color of both the background tint and the circle
    pub color: Color,
    /// Peak background tint alpha reached when the enter run completes
    pub max_background_alpha: u8,
    /// Wall-clock duration of the enter run in milliseconds
    pub enter_duration_ms: f32,
    /// Wall-clock duration of the exit run in milliseconds
    pub exit_duration_ms: f32,
    /// Interval between animation ticks in milliseconds (~60 Hz)
    pub frame_interval_ms: u64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            color: Color::rgb(1.0, 0.0, 0.0),
            max_background_alpha: 182,
            enter_duration_ms: 2400.0,
            exit_duration_ms: 36.0,
            frame_interval_ms: 16,
        }
    }
}

impl RippleConfig {
    /// Create a new ripple config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ripple config with a custom color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the base color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the enter run duration in milliseconds.
    pub fn enter_duration(mut self, ms: f32) -> Self {
        self.enter_duration_ms = ms;
        self
    }

    /// Set the exit run duration in milliseconds.
    pub fn exit_duration(mut self, ms: f32) -> Self {
        self.exit_duration_ms = ms;
        self
    }

    /// Fixed per-tick increment for the enter run.
    ///
    /// Sized so the run completes in `enter_duration_ms` of wall-clock time
    /// regardless of frame-rate drift.
    pub(crate) fn enter_increment(&self) -> f32 {
        self.frame_interval_ms as f32 / self.enter_duration_ms
    }

    /// Fixed per-tick increment for the exit run.
    pub(crate) fn exit_increment(&self) -> f32 {
        self.frame_interval_ms as f32 / self.exit_duration_ms
    }
}
