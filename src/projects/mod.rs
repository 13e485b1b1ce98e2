#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod elementary;
pub mod life;

use log::{debug, error, info};
use pixels::{Error, Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::tick_limit::TickLimiter;
use crate::auxiliary::window::{create_window, SCREEN_HEIGHT, SCREEN_WIDTH};
use pixel_automata::CellAutomata;

/// How a driver starts out.
pub struct RunSettings {
    pub ticks_per_second: f64,
    pub start_paused: bool,
}

/// The buffer pixel under a click, or `None` when the click landed outside
/// the drawn buffer (e.g. in the letterbox around it).
fn click_pixel(pos: Result<(usize, usize), (isize, isize)>) -> Option<(isize, isize)> {
    pos.ok().map(|(x, y)| (x as isize, y as isize))
}

/// Opens a window and animates `automata` until the window is closed.
pub fn run_automata<A: CellAutomata + 'static>(mut automata: A, settings: RunSettings) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) =
        create_window(&automata.describe(), &event_loop);

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);

    let mut pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture)?;
    let mut limiter = TickLimiter::new(settings.ticks_per_second);
    let mut paused = settings.start_paused;

    let mut draw_state: Option<bool> = None;

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            automata.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // For everything else, let winit_input_helper collect events to build its state.
        // It returns `true` when it is time to update our state and request a redraw.
        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::P) {
                paused = !paused;
                if paused {
                    info!(
                        "paused at generation {} ({:.1} ticks/s)",
                        automata.generation(),
                        limiter.tps()
                    );
                } else {
                    info!("unpaused");
                }
            }
            let frame_step = input.key_pressed(VirtualKeyCode::Space);
            if frame_step {
                // Space is frame-step, so ensure we're paused
                debug!("frame advanced");
                paused = true;
            }
            if input.key_pressed(VirtualKeyCode::R) {
                info!("reset with random conditions");
                automata.randomize();
            }
            if input.key_pressed(VirtualKeyCode::C) {
                info!("cleared");
                automata.clear();
            }

            // A click toggles one cell; dragging then paints with the state
            // that click produced.
            let (mouse_cell, mouse_prev_cell) = input
                .mouse()
                .map(|(mx, my)| {
                    let (dx, dy) = input.mouse_diff();
                    let prev_x = mx - dx;
                    let prev_y = my - dy;

                    let (mx_i, my_i) = pixels
                        .window_pos_to_pixel((mx, my))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    let (px_i, py_i) = pixels
                        .window_pos_to_pixel((prev_x, prev_y))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    (
                        (mx_i as isize, my_i as isize),
                        (px_i as isize, py_i as isize),
                    )
                })
                .unwrap_or_default();

            if input.mouse_pressed(0) {
                // Only drags get clamped onto the buffer; a click beside it
                // must not land on an edge cell.
                let clicked = input
                    .mouse()
                    .and_then(|pos| click_pixel(pixels.window_pos_to_pixel(pos)));
                draw_state = match clicked {
                    Some((x, y)) => {
                        debug!("Mouse click at {:?}", (x, y));
                        automata.toggle(x, y)
                    }
                    None => {
                        debug!("Mouse click outside the buffer ignored");
                        None
                    }
                };
            } else if let Some(draw_alive) = draw_state {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                if release || held {
                    debug!("Draw {:?} => {:?} alive={}", mouse_prev_cell, mouse_cell, draw_alive);
                    automata.set_line(
                        mouse_prev_cell.0,
                        mouse_prev_cell.1,
                        mouse_cell.0,
                        mouse_cell.1,
                        draw_alive,
                    );
                }
                if release || !held {
                    debug!("Draw end");
                    draw_state = None;
                }
            }
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            let due = frame_step || (!paused && limiter.ready());
            if due && !automata.update() && !paused {
                info!("nothing left to compute, pausing");
                paused = true;
            }
            window.request_redraw();
        }
    });
}
