pub mod button;
pub mod widget;

pub use button::{ripple_button, RippleButton};
pub use widget::{Color, Event, EventResponse, MouseButton, Rect};
