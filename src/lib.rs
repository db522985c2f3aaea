pub mod animation;
pub mod effect;
pub mod renderer;
pub mod scheduler;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{lerp, Easing};
    pub use crate::effect::{Phase, RippleConfig, RippleEffect, RippleState, TouchKind};
    pub use crate::renderer::{DrawCommand, RecordingRenderer, Renderer};
    pub use crate::scheduler::{ChangeFlags, FrameScheduler, ManualScheduler, TickId};
    pub use crate::widgets::{
        ripple_button, Color, Event, EventResponse, MouseButton, Rect, RippleButton,
    };
}
