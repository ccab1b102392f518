//! Ninja Platformer entry point
//!
//! There is no windowing backend here: the native binary plays a scripted
//! headless session and prints the final snapshot as JSON.

use std::path::Path;
use std::process::ExitCode;

use glam::Vec2;
use ninja_platformer::app::{Key, MouseButton};
use ninja_platformer::audio::NullBackend;
use ninja_platformer::consts::SIM_DT;
use ninja_platformer::renderer::vertex::as_bytes;
use ninja_platformer::renderer::{DrawItem, NoAssets};
use ninja_platformer::sim::{GamePhase, LevelLayout};
use ninja_platformer::{App, Settings};

/// Length of the scripted run (20 seconds at 60 Hz)
const DEMO_FRAMES: u32 = 1200;
/// Frames between jump presses
const JUMP_EVERY: u32 = 45;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ninja Platformer (headless) starting...");

    let settings = Settings::load();

    let layout = match std::env::args().nth(1) {
        Some(path) => match LevelLayout::load(Path::new(&path)) {
            Ok(layout) => layout,
            Err(e) => {
                log::error!("Failed to load layout {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => LevelLayout::standard(),
    };

    let mut app = App::new(settings, layout, Box::new(NullBackend), &NoAssets);

    // Press "Start Game"
    app.mouse_down(Vec2::new(400.0, 225.0), MouseButton::Left);
    app.key_down(Key::Right);

    let mut last_phase = app.phase();
    for frame in 0..DEMO_FRAMES {
        if frame % JUMP_EVERY == 0 {
            app.key_down(Key::Space);
        }
        app.update(SIM_DT);

        if app.phase() != last_phase {
            log::info!("Frame {}: {:?} -> {:?}", frame, last_phase, app.phase());
            last_phase = app.phase();
        }
        if app.phase() != GamePhase::Playing {
            break;
        }
    }

    let items = app.render();
    let mesh_bytes: usize = items
        .iter()
        .map(|item| match item {
            DrawItem::Mesh(vertices) => as_bytes(vertices).len(),
            _ => 0,
        })
        .sum();
    log::info!("Final frame: {} draw items, {} vertex bytes", items.len(), mesh_bytes);

    match serde_json::to_string_pretty(&app.session.snapshot()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}
