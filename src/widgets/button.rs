//! Button host control for the ripple effect.
//!
//! The button is deliberately thin: it owns the effect, maps pointer events
//! to touch kinds, forwards size changes, and paints its background with the
//! effect layered on top. All animation logic lives in
//! [`RippleEffect`](crate::effect::RippleEffect).

use crate::effect::{RippleConfig, RippleEffect, TouchKind};
use crate::renderer::Renderer;
use crate::scheduler::{FrameScheduler, TickId};
use crate::widgets::widget::{Color, Event, EventResponse, MouseButton, Rect};

type ClickCallback = Box<dyn Fn()>;

pub struct RippleButton {
    bounds: Rect,
    background: Color,
    effect: RippleEffect,
    is_pressed: bool,
    on_click: Option<ClickCallback>,
}

/// Create a button with the default ripple configuration.
pub fn ripple_button() -> RippleButton {
    RippleButton::new(RippleConfig::default())
}

impl RippleButton {
    pub fn new(config: RippleConfig) -> Self {
        Self {
            bounds: Rect::default(),
            background: Color::from_hex(0x3F51B5),
            effect: RippleEffect::new(config),
            is_pressed: false,
            on_click: None,
        }
    }

    /// Set the button's own background color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set a callback invoked when a press is released inside the bounds.
    pub fn on_click<F: Fn() + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn effect(&self) -> &RippleEffect {
        &self.effect
    }

    /// Resize the button. Recomputes the effect's center and radii.
    pub fn set_size(&mut self, width: f32, height: f32, scheduler: &mut dyn FrameScheduler) {
        self.bounds = Rect::new(self.bounds.x, self.bounds.y, width, height);
        self.effect.on_bounds_changed(width, height);
        scheduler.request_redraw();
    }

    /// Dispatch a pointer event. Coordinates are in local button space.
    pub fn event(&mut self, event: &Event, scheduler: &mut dyn FrameScheduler) -> EventResponse {
        match event {
            Event::MouseDown { x, y, button } => {
                if *button == MouseButton::Left && self.bounds.contains(*x, *y) {
                    self.is_pressed = true;
                    self.effect.on_touch(TouchKind::Down, *x, *y, scheduler);
                    return EventResponse::Handled;
                }
            }
            Event::MouseMove { x, y } => {
                if self.is_pressed {
                    self.effect.on_touch(TouchKind::Move, *x, *y, scheduler);
                }
            }
            Event::MouseUp { x, y, button } => {
                if self.is_pressed && *button == MouseButton::Left {
                    self.is_pressed = false;
                    self.effect.on_touch(TouchKind::Up, *x, *y, scheduler);
                    if self.bounds.contains(*x, *y) {
                        if let Some(ref callback) = self.on_click {
                            callback();
                        }
                    }
                    return EventResponse::Handled;
                }
            }
            Event::MouseLeave => {
                if self.is_pressed {
                    self.is_pressed = false;
                    let (cx, cy) = self.bounds.center();
                    self.effect.on_touch(TouchKind::Cancel, cx, cy, scheduler);
                    return EventResponse::Handled;
                }
            }
        }
        EventResponse::Ignored
    }

    /// Route a fired scheduler tick to the effect.
    pub fn handle_tick(&mut self, id: TickId, scheduler: &mut dyn FrameScheduler) {
        self.effect.on_tick(id, scheduler);
    }

    /// Paint the button background, then the effect overlay.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        renderer.fill_bounds(self.background);
        self.effect.paint(renderer);
    }
}
