use anyhow::Result;
use glam::Vec2;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use rusted_knight::engine::camera::CameraFollow;
use rusted_knight::engine::game_loop::FrameClock;
use rusted_knight::engine::input::InputManager;
use rusted_knight::engine::physics::{presets, PhysicsWorld};
use rusted_knight::game::characters::{Character, MotionConfig};

const SPAWN: (f32, f32) = (0.0, 3.0);
/// Falling below this puts the knight back at the spawn point
const KILL_PLANE: f32 = -30.0;

/// Floor plus a few platforms to jump between
fn build_level(physics: &mut PhysicsWorld) {
    let platforms = [
        (0.0, 0.0, 40.0, 1.0),
        (-8.0, 5.0, 6.0, 0.5),
        (6.0, 8.0, 6.0, 0.5),
        (18.0, 4.0, 8.0, 0.5),
    ];
    for (x, y, width, height) in platforms {
        let body = physics.add_rigid_body(presets::ground_body(x, y));
        physics.add_collider(presets::ground_collider(width, height), body);
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Knight...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Knight")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut physics = PhysicsWorld::new();
    build_level(&mut physics);

    let mut knight = Character::spawn(
        "knight",
        MotionConfig::standard(),
        &mut physics,
        SPAWN.0,
        SPAWN.1,
    )?;
    let mut camera = CameraFollow::new(knight.body_handle, Vec2::new(SPAWN.0, SPAWN.1))
        .with_offset(Vec2::new(0.0, 2.0));

    let mut input = InputManager::new();
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
                input.process_keyboard_event(&event);
                if input.menu_requested() {
                    clock.toggle_pause();
                    // Drop held keys so nothing sticks across the pause
                    input.reset();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_button(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let steps = clock.begin_frame();
                let dt = clock.fixed_timestep();

                for _ in 0..steps {
                    if let Err(err) = knight.update(&mut physics, input.player(), dt) {
                        error!("{} update failed: {}", knight.name, err);
                        elwt.exit();
                        return;
                    }
                    physics.step();
                    camera.update(&physics);

                    // Edges belong to the first step that saw them
                    input.update();
                }

                let fell = knight
                    .position(&physics)
                    .is_some_and(|position| position.y < KILL_PLANE);
                if fell {
                    if let Err(err) = knight.respawn(&mut physics, SPAWN.0, SPAWN.1) {
                        error!("Respawn failed: {}", err);
                        elwt.exit();
                    }
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
