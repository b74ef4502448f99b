use anyhow::Result;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use sprite_runner::engine::assets::AssetLoader;
use sprite_runner::engine::game_loop::FrameClock;
use sprite_runner::game::config::GameConfig;
use sprite_runner::game::session::Session;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Sprite Runner...");

    let config = GameConfig::from_args(std::env::args());
    info!(
        "Using spritesheet {} ({}x{} grid)",
        config.sheet_path, config.sheet_rows, config.sheet_columns
    );

    let loader = AssetLoader::new(&config.asset_root);
    let texture = loader.probe_texture(&config.sheet_path)?;
    let mut session = Session::new(&config, texture)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(config.window_title)
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut clock = FrameClock::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                session.input_mut().process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                session.input_mut().reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let dt = clock.tick();
                if let Err(e) = session.tick(dt) {
                    error!("Tick failed: {}", e);
                    elwt.exit();
                    return;
                }
                if session.quit_requested() {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }
                // Takes effect from the next tick on
                if session.paused() != clock.is_paused() {
                    if session.paused() {
                        clock.pause();
                    } else {
                        clock.resume();
                    }
                }
                if clock.frame_count() % 600 == 0 {
                    info!(
                        "{:.1} fps, {} draw commands",
                        clock.fps(),
                        session.draw_list().command_count()
                    );
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
