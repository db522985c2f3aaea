//! Animation state and the phase transition table.
//!
//! The two animation runs coordinate exclusively through this table: the
//! touch dispatcher and the tick handlers feed [`Input`]s in, and the
//! returned [`Action`] tells the engine which run (if any) to start. Keeping
//! the table pure makes the enter/exit coordination auditable without a
//! scheduler in the loop.

/// Animation phase of the ripple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing pressed, nothing animating
    #[default]
    Idle,
    /// Enter run in progress (circle expanding, tint fading in)
    Entering,
    /// Enter run finished but the finger is still down
    Held,
    /// Exit run in progress (both layers fading out)
    Exiting,
}

/// Observations fed into the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Finger went down (always restarts the effect)
    PressDown,
    /// Finger went up or the gesture was cancelled
    Release,
    /// The enter run reached progress 1; `released` carries whether the
    /// finger already went up during the run
    EnterComplete { released: bool },
    /// The exit run reached progress 1
    ExitComplete,
}

/// What the engine must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    StartEnter,
    StartExit,
}

/// Pure transition table keyed by `(phase, input)`.
///
/// A release during the enter run does not start the exit run; the exit is
/// deferred until the enter completion tick observes the release. Completion
/// inputs arriving in a phase that cannot produce them are stray scheduled
/// callbacks and leave the state untouched.
pub fn transition(phase: Phase, input: Input) -> (Phase, Action) {
    match (phase, input) {
        (_, Input::PressDown) => (Phase::Entering, Action::StartEnter),

        (Phase::Held, Input::Release) => (Phase::Exiting, Action::StartExit),
        (phase, Input::Release) => (phase, Action::None),

        (Phase::Entering, Input::EnterComplete { released: true }) => {
            (Phase::Exiting, Action::StartExit)
        }
        (Phase::Entering, Input::EnterComplete { released: false }) => (Phase::Held, Action::None),

        (Phase::Exiting, Input::ExitComplete) => (Phase::Idle, Action::None),

        // Stray completion callbacks
        (phase, Input::EnterComplete { .. }) | (phase, Input::ExitComplete) => {
            (phase, Action::None)
        }
    }
}

/// Instantaneous state of the ripple animation.
///
/// Mutated exclusively by the touch handlers and the tick handlers; the
/// render step only reads it.
#[derive(Debug, Clone, Default)]
pub struct RippleState {
    /// Current animation phase
    pub phase: Phase,
    /// Linear progress of the enter run, in [0, 1]
    pub progress_enter: f32,
    /// Linear progress of the exit run, in [0, 1]
    pub progress_exit: f32,
    /// Point where the current press began; set once per press
    pub touch_point: (f32, f32),
    /// Geometric center of the widget bounds
    pub center: (f32, f32),
    /// Circle radius at progress 0
    pub start_radius: f32,
    /// Circle radius at progress 1 (1.2x the larger half-dimension)
    pub end_radius: f32,
    /// Current circle radius
    pub radius: f32,
    /// Current circle center, drifting from touch point toward the bounds
    /// center as the enter run proceeds
    pub ripple_center: (f32, f32),
    /// Background tint alpha, derived only
    pub background_alpha: u8,
    /// Circle alpha, derived only
    pub circle_alpha: u8,
    /// Whether the finger has been lifted during the current press
    pub touch_released: bool,
    /// Whether the enter run has reached progress 1
    pub enter_finished: bool,
}

impl RippleState {
    pub fn new() -> Self {
        Self::default()
    }
}
