//! End-to-end press/release lifecycle through the button, the manual
//! scheduler, and the recording renderer.

use onda::prelude::*;

/// Drive the host loop until the effect goes quiet: advance one frame,
/// deliver due ticks, repaint when the scheduler asks for it.
fn run_frames(
    button: &mut RippleButton,
    scheduler: &mut ManualScheduler,
    renderer: &mut RecordingRenderer,
) -> usize {
    let mut frames = 0;
    while scheduler.has_pending() {
        if let Some(id) = scheduler.pop_due() {
            button.handle_tick(id, scheduler);
        } else {
            scheduler.advance(16);
            continue;
        }
        if scheduler.take_change_flags().contains(ChangeFlags::NEEDS_PAINT) {
            renderer.clear();
            button.paint(renderer);
            frames += 1;
        }
    }
    frames
}

fn press(button: &mut RippleButton, scheduler: &mut ManualScheduler, x: f32, y: f32) {
    button.event(
        &Event::MouseDown {
            x,
            y,
            button: MouseButton::Left,
        },
        scheduler,
    );
}

fn release(button: &mut RippleButton, scheduler: &mut ManualScheduler, x: f32, y: f32) {
    button.event(
        &Event::MouseUp {
            x,
            y,
            button: MouseButton::Left,
        },
        scheduler,
    );
}

fn circle_command(renderer: &RecordingRenderer) -> (f32, f32, f32, Color) {
    match renderer.commands().last() {
        Some(&DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color,
        }) => (cx, cy, radius, color),
        other => panic!("expected a circle as the last command, got {:?}", other),
    }
}

#[test]
fn press_expands_ripple_to_full_size_and_peak_tint() {
    let mut scheduler = ManualScheduler::new();
    let mut renderer = RecordingRenderer::new();
    let mut button = ripple_button().background(Color::from_hex(0x222222));
    button.set_size(100.0, 100.0, &mut scheduler);
    scheduler.take_change_flags();

    press(&mut button, &mut scheduler, 10.0, 10.0);
    let frames = run_frames(&mut button, &mut scheduler, &mut renderer);
    assert!(frames >= 149, "enter run painted only {} frames", frames);

    let state = button.effect().state();
    assert!(state.enter_finished);
    assert_eq!(state.background_alpha, 182);
    assert!((state.radius - 60.0).abs() < 1e-4);

    // Last painted frame: button background, tint, then the full circle
    // centered on the bounds.
    assert_eq!(renderer.commands().len(), 3);
    let (cx, cy, radius, _) = circle_command(&renderer);
    assert_eq!((cx, cy), (50.0, 50.0));
    assert!((radius - 60.0).abs() < 1e-4);
}

#[test]
fn release_fades_both_layers_to_zero() {
    let mut scheduler = ManualScheduler::new();
    let mut renderer = RecordingRenderer::new();
    let mut button = ripple_button();
    button.set_size(100.0, 100.0, &mut scheduler);

    press(&mut button, &mut scheduler, 10.0, 10.0);
    run_frames(&mut button, &mut scheduler, &mut renderer);

    release(&mut button, &mut scheduler, 10.0, 10.0);
    let frames = run_frames(&mut button, &mut scheduler, &mut renderer);
    assert_eq!(frames, 3); // ceil(36 / 16)

    let state = button.effect().state();
    assert_eq!(state.background_alpha, 0);
    assert_eq!(state.circle_alpha, 0);

    let (_, _, _, color) = circle_command(&renderer);
    assert_eq!(color.a, 0.0);
}

#[test]
fn early_release_defers_exit_until_enter_completes() {
    let mut scheduler = ManualScheduler::new();
    let mut renderer = RecordingRenderer::new();
    let mut button = ripple_button();
    button.set_size(100.0, 100.0, &mut scheduler);

    press(&mut button, &mut scheduler, 10.0, 10.0);

    // A few frames in, release early.
    for _ in 0..10 {
        if let Some(id) = scheduler.pop_due() {
            button.handle_tick(id, &mut scheduler);
        }
        scheduler.advance(16);
    }
    release(&mut button, &mut scheduler, 10.0, 10.0);
    assert_eq!(button.effect().phase(), Phase::Entering);

    // The enter run finishes at full size, then the exit run drains both
    // layers without another touch event.
    run_frames(&mut button, &mut scheduler, &mut renderer);
    let state = button.effect().state();
    assert_eq!(button.effect().phase(), Phase::Idle);
    assert!(state.enter_finished);
    assert_eq!(state.background_alpha, 0);
    assert_eq!(state.circle_alpha, 0);
}

#[test]
fn second_press_restarts_from_new_touch_point() {
    let mut scheduler = ManualScheduler::new();
    let mut renderer = RecordingRenderer::new();
    let mut button = ripple_button();
    button.set_size(100.0, 100.0, &mut scheduler);

    press(&mut button, &mut scheduler, 10.0, 10.0);
    for _ in 0..20 {
        if let Some(id) = scheduler.pop_due() {
            button.handle_tick(id, &mut scheduler);
        }
        scheduler.advance(16);
    }

    // Abandon the in-flight animation with a fresh press elsewhere. The new
    // Down restarts the effect even though no Up ever arrived.
    press(&mut button, &mut scheduler, 90.0, 90.0);
    assert_eq!(scheduler.pending_count(), 1);
    assert_eq!(button.effect().state().touch_point, (90.0, 90.0));
    assert_eq!(button.effect().state().progress_enter, 0.0);

    run_frames(&mut button, &mut scheduler, &mut renderer);
    // Held with the finger down: circle converged on the center again.
    assert_eq!(button.effect().phase(), Phase::Held);
    let (cx, cy, _, _) = circle_command(&renderer);
    assert_eq!((cx, cy), (50.0, 50.0));
}

#[test]
fn resize_recomputes_center_and_end_radius() {
    let mut scheduler = ManualScheduler::new();
    let mut button = ripple_button();
    button.set_size(100.0, 100.0, &mut scheduler);
    button.set_size(200.0, 80.0, &mut scheduler);

    let state = button.effect().state();
    assert_eq!(state.center, (100.0, 40.0));
    assert!((state.end_radius - 120.0).abs() < 1e-4);
}
