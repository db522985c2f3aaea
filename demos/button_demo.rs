//! Headless ripple demo: presses a button, runs the animation to
//! completion on the manual scheduler, and logs the frames the effect
//! produced. Run with `RUST_LOG=debug` to see phase transitions.

use onda::prelude::*;

fn pump(button: &mut RippleButton, scheduler: &mut ManualScheduler) {
    let mut frame = 0u32;
    while let Some(at) = scheduler.next_due() {
        scheduler.advance_to(at);
        while let Some(id) = scheduler.pop_due() {
            button.handle_tick(id, scheduler);
        }
        if scheduler
            .take_change_flags()
            .contains(ChangeFlags::NEEDS_PAINT)
        {
            let mut renderer = RecordingRenderer::new();
            button.paint(&mut renderer);
            frame += 1;
            if frame % 25 == 0 {
                let state = button.effect().state();
                log::info!(
                    "frame {:3}  t={:4}ms  phase={:?}  radius={:5.1}  center=({:4.1}, {:4.1})  bg={:3}  circle={:3}",
                    frame,
                    scheduler.now(),
                    button.effect().phase(),
                    state.radius,
                    state.ripple_center.0,
                    state.ripple_center.1,
                    state.background_alpha,
                    state.circle_alpha,
                );
            }
        }
    }
}

fn main() {
    env_logger::init();

    let mut scheduler = ManualScheduler::new();
    let mut button = ripple_button()
        .background(Color::from_hex(0x3F51B5))
        .on_click(|| log::info!("button clicked"));
    button.set_size(100.0, 100.0, &mut scheduler);

    log::info!("press at (10, 10)");
    button.event(
        &Event::MouseDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        },
        &mut scheduler,
    );
    pump(&mut button, &mut scheduler);

    log::info!("release at (10, 10)");
    button.event(
        &Event::MouseUp {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Left,
        },
        &mut scheduler,
    );
    pump(&mut button, &mut scheduler);

    let state = button.effect().state();
    log::info!(
        "settled after {}ms: phase={:?} bg={} circle={}",
        scheduler.now(),
        button.effect().phase(),
        state.background_alpha,
        state.circle_alpha,
    );
}
