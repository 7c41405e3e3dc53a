use anyhow::{Context, Result};
use glam::{IVec2, Vec3};
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use mmo_client::engine::camera::Camera;
use mmo_client::engine::game_loop::GameLoop;
use mmo_client::engine::input::{Action, InputManager};
use mmo_client::game::creatures::CreatureStats;
use mmo_client::game::{GridMap, World};

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u64 = 600;

/// Built-in map used when no collision file is given on the command line
const DEMO_MAP: &str = "\
-6
6
-4
4
1111111111111
1000000000001
1000011100001
1000000000001
1000000000001
1000000000001
1001000000001
1000000000001
1111111111111
";

fn load_map() -> Result<GridMap> {
    match std::env::args().nth(1) {
        Some(path) => {
            GridMap::load(&path).with_context(|| format!("Failed to load map from {}", path))
        }
        None => GridMap::parse(DEMO_MAP).context("Built-in demo map is malformed"),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting MMO client...");

    let map = load_map()?;
    let mut world = World::new(map, Camera::new(Vec3::ZERO));
    let player = world.spawn_player("Player", IVec2::ZERO);
    world.spawn_creature("Slime", IVec2::new(3, -2), CreatureStats::default());
    world.init();

    let mut input = InputManager::default();
    let mut game_loop = GameLoop::new();
    let mut last_cell = None;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("MMO Client")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

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
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::AboutToWait => {
                if input.just_pressed(Action::Quit) {
                    info!("Quit pressed, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }

                let ticks = game_loop.begin_frame();
                if game_loop.frame_count() % FPS_LOG_INTERVAL == 0 {
                    debug!(
                        "{:.1} fps, {} ticks{}",
                        game_loop.fps(),
                        game_loop.tick_count(),
                        if game_loop.is_paused() { " (paused)" } else { "" }
                    );
                }
                for _ in 0..ticks {
                    world.tick(game_loop.fixed_timestep(), input.player());
                }
                if ticks > 0 {
                    world.late_tick();
                }
                input.update();

                if let Some(creature) = world.objects().get(player) {
                    let cell = creature.cell_pos();
                    if last_cell != Some(cell) {
                        debug!(
                            "Player at cell {} ({:?}), camera {}",
                            cell,
                            creature.state(),
                            world.camera().position()
                        );
                        last_cell = Some(cell);
                    }
                }

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
