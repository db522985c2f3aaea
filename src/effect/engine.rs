use log::{debug, trace};

use super::state::{transition, Action, Input, Phase, RippleState};
use super::RippleConfig;
use crate::animation::{lerp, Easing};
use crate::renderer::Renderer;
use crate::scheduler::{FrameScheduler, TickId};

/// Kind of touch event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    Down,
    /// Reserved for future multi-point tracking; currently a no-op
    Move,
    Up,
    Cancel,
}

/// Which run a pending tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickKind {
    Enter,
    Exit,
}

/// The ripple effect engine.
///
/// Owns the animation state, maps touch events to phase transitions, and
/// advances itself through self-rescheduled ticks on the host's scheduler.
/// At most one tick (enter or exit) is pending at any time: starting either
/// run cancels whatever was pending first.
pub struct RippleEffect {
    config: RippleConfig,
    state: RippleState,
    /// Global effect alpha; attenuates both layers at paint time
    alpha: u8,
    enter_easing: Easing,
    exit_easing: Easing,
    pending: Option<(TickId, TickKind)>,
}

impl RippleEffect {
    pub fn new(config: RippleConfig) -> Self {
        Self {
            config,
            state: RippleState::new(),
            alpha: 255,
            enter_easing: Easing::Decelerate(2.0),
            exit_easing: Easing::Accelerate(2.0),
            pending: None,
        }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Read-only view of the animation state.
    pub fn state(&self) -> &RippleState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Whether a tick is currently scheduled.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Set the global effect alpha. Both layers are painted as fractions of
    /// this value.
    pub fn set_alpha(&mut self, alpha: u8, scheduler: &mut dyn FrameScheduler) {
        if self.alpha != alpha {
            self.alpha = alpha;
            scheduler.request_redraw();
        }
    }

    /// Change the base color of the effect.
    pub fn set_color(&mut self, color: crate::widgets::Color, scheduler: &mut dyn FrameScheduler) {
        if self.config.color != color {
            self.config.color = color;
            scheduler.request_redraw();
        }
    }

    /// Recompute center and radii from new widget bounds.
    pub fn on_bounds_changed(&mut self, width: f32, height: f32) {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        self.state.center = (half_w, half_h);
        let max_radius = half_w.max(half_h);
        self.state.start_radius = max_radius * 0.0;
        self.state.end_radius = max_radius * 1.2;
    }

    /// Forward a touch event into the effect.
    pub fn on_touch(&mut self, kind: TouchKind, x: f32, y: f32, scheduler: &mut dyn FrameScheduler) {
        match kind {
            TouchKind::Down => {
                self.state.touch_released = false;
                self.state.touch_point = (x, y);
                self.state.radius = 0.0;
                self.feed(Input::PressDown, scheduler);
            }
            TouchKind::Move => {}
            TouchKind::Up | TouchKind::Cancel => {
                self.state.touch_released = true;
                self.feed(Input::Release, scheduler);
            }
        }
    }

    /// Handle a tick previously scheduled by this effect.
    ///
    /// Ticks that are no longer pending (cancelled, or superseded by a new
    /// run) are silently ignored.
    pub fn on_tick(&mut self, id: TickId, scheduler: &mut dyn FrameScheduler) {
        match self.pending {
            Some((pending_id, kind)) if pending_id == id => {
                self.pending = None;
                match kind {
                    TickKind::Enter => self.enter_tick(scheduler),
                    TickKind::Exit => self.exit_tick(scheduler),
                }
            }
            _ => trace!("ignoring stray tick {:?}", id),
        }
    }

    /// Run an input through the transition table and perform its action.
    fn feed(&mut self, input: Input, scheduler: &mut dyn FrameScheduler) {
        let (next, action) = transition(self.state.phase, input);
        if next != self.state.phase {
            debug!("ripple phase {:?} -> {:?}", self.state.phase, next);
        }
        self.state.phase = next;
        match action {
            Action::StartEnter => self.start_enter(scheduler),
            Action::StartExit => self.start_exit(scheduler),
            Action::None => {}
        }
    }

    fn start_enter(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.state.circle_alpha = 255;
        self.state.enter_finished = false;
        self.state.progress_enter = 0.0;
        self.cancel_pending(scheduler);
        let id = scheduler.schedule(scheduler.now());
        self.pending = Some((id, TickKind::Enter));
    }

    fn start_exit(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.state.progress_exit = 0.0;
        self.cancel_pending(scheduler);
        let id = scheduler.schedule(scheduler.now());
        self.pending = Some((id, TickKind::Exit));
    }

    fn cancel_pending(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some((id, _)) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    fn enter_tick(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.state.progress_enter += self.config.enter_increment();
        if self.state.progress_enter > 1.0 {
            self.state.progress_enter = 1.0;
            self.apply_enter(1.0, scheduler);
            self.state.enter_finished = true;
            let released = self.state.touch_released;
            self.feed(Input::EnterComplete { released }, scheduler);
            return;
        }
        let real = self.enter_easing.evaluate(self.state.progress_enter);
        self.apply_enter(real, scheduler);
        self.reschedule(TickKind::Enter, scheduler);
    }

    fn exit_tick(&mut self, scheduler: &mut dyn FrameScheduler) {
        // Stray callback guard: an exit tick may only advance once the enter
        // run has finished.
        if !self.state.enter_finished {
            trace!("ignoring exit tick before enter completion");
            return;
        }
        self.state.progress_exit += self.config.exit_increment();
        if self.state.progress_exit > 1.0 {
            self.state.progress_exit = 1.0;
            self.apply_exit(1.0, scheduler);
            self.feed(Input::ExitComplete, scheduler);
            return;
        }
        let real = self.exit_easing.evaluate(self.state.progress_exit);
        self.apply_exit(real, scheduler);
        self.reschedule(TickKind::Exit, scheduler);
    }

    /// Schedule the next tick one frame interval from the current clock
    /// reading, not from the previous target time. Ticks drift with actual
    /// scheduler latency instead of bursting to catch up.
    fn reschedule(&mut self, kind: TickKind, scheduler: &mut dyn FrameScheduler) {
        let at = scheduler.now() + self.config.frame_interval_ms;
        let id = scheduler.schedule(at);
        self.pending = Some((id, kind));
    }

    /// Derive paint parameters from the eased enter progress.
    fn apply_enter(&mut self, real: f32, scheduler: &mut dyn FrameScheduler) {
        let state = &mut self.state;
        state.radius = lerp(state.start_radius, state.end_radius, real);
        state.ripple_center = (
            lerp(state.touch_point.0, state.center.0, real),
            lerp(state.touch_point.1, state.center.1, real),
        );
        state.background_alpha =
            alpha_u8(lerp(0.0, self.config.max_background_alpha as f32, real));
        scheduler.request_redraw();
    }

    /// Derive paint parameters from the eased exit progress.
    fn apply_exit(&mut self, real: f32, scheduler: &mut dyn FrameScheduler) {
        let max_bg = self.config.max_background_alpha as f32;
        self.state.background_alpha = alpha_u8(lerp(max_bg, 0.0, real));
        self.state.circle_alpha = alpha_u8(lerp(255.0, 0.0, real));
        scheduler.request_redraw();
    }

    /// Paint the current frame: the background tint over the full bounds,
    /// then the circle.
    ///
    /// Both layers are composed as fractions of the global effect alpha. The
    /// circle's ceiling is the alpha that makes circle-over-tint reach the
    /// global alpha exactly, so a fully opaque circle never overshoots it.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        let pre = self.alpha as f32;
        let bg = pre * (self.state.background_alpha as f32 / 255.0);
        let max_circle = if bg >= 255.0 {
            0.0
        } else {
            (pre - bg) * 255.0 / (255.0 - bg)
        };
        let circle = max_circle * (self.state.circle_alpha as f32 / 255.0);

        renderer.fill_bounds(self.config.color.with_alpha(bg / 255.0));
        renderer.fill_circle(
            self.state.ripple_center.0,
            self.state.ripple_center.1,
            self.state.radius,
            self.config.color.with_alpha(circle / 255.0),
        );
    }
}

impl Default for RippleEffect {
    fn default() -> Self {
        Self::new(RippleConfig::default())
    }
}

fn alpha_u8(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
