//! Circle Lab entry point
//!
//! Windowing is the host's job; natively this binary drives both scenes
//! through a scripted session against recording backends and logs the result.
//!
//! Usage: `circle-lab [settings.json]`

use circle_lab::Settings;
use circle_lab::input::{FrameInput, Key};
use circle_lab::renderer::RecordingBackend;
use circle_lab::scene::{BounceScene, CircleScene};

/// Simulated frame rate of the scripted session
const FRAME_RATE: f64 = 60.0;
/// Simulated session length in seconds
const SESSION_SECS: f64 = 10.0;

fn main() {
    env_logger::init();
    log::info!("Circle Lab (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    if let Err(e) = run(&settings) {
        log::error!("Session failed: {}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> circle_lab::Result<()> {
    let mut circle = CircleScene::new(settings)?;
    let mut circle_backend = RecordingBackend::new();
    circle.upload_all(&mut circle_backend);

    let mut bounce = BounceScene::new(settings)?;
    let mut bounce_backend = RecordingBackend::new();
    bounce.upload_all(&mut bounce_backend);

    let dt = (1.0 / FRAME_RATE) as f32;
    let frames = (SESSION_SECS * FRAME_RATE) as u32;

    for frame in 0..frames {
        let time = frame as f64 / FRAME_RATE;
        let input = scripted_input(frame, time, dt);

        circle.frame(&input, &mut circle_backend)?;
        bounce.frame(&input, &mut bounce_backend);
    }

    log::info!(
        "Circle: {} segments, {} vertex uploads, texture slot {}",
        circle.segments(),
        circle_backend.vertex_uploads,
        circle.texture_slot()
    );
    log::info!(
        "Bounce: {} collisions, disc at {:?}, color {:?}",
        bounce.collisions(),
        bounce.disc().position,
        bounce.color()
    );
    Ok(())
}

/// Scroll up for the first second, down for the next, then cycle colors;
/// space is pressed once at two seconds
fn scripted_input(frame: u32, time: f64, dt: f32) -> FrameInput {
    let mut input = FrameInput::at(time, dt);
    match frame {
        0..60 if frame % 6 == 0 => input = input.with_scroll(1.0),
        60..120 if frame % 6 == 0 => input = input.with_scroll(-1.0),
        120 => input = input.with_key_pressed(Key::Space),
        _ => {}
    }
    let color_key = match (frame / 60) % 3 {
        0 => Key::Digit1,
        1 => Key::Digit2,
        _ => Key::Digit3,
    };
    if frame >= 180 && frame % 60 == 0 {
        input = input.with_key_down(color_key);
    }
    input
}
