//! Entity debugger demo entry point.
//!
//! A small 3D scene used to exercise the entity debug registry and the
//! bouncing selection indicator, built with:
//! - **raylib** for windowing and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, build the ECS world and resources
//! 2. Spawn and register the demo entities
//! 3. Register observers and systems
//! 4. Run the main loop:
//!    - Advance world time
//!    - Read input, move the selection (attaching/detaching the indicator)
//!    - Animate indicators, drop stale ones, propagate transforms
//!    - Render the scene and, with F11, the registry overlay
//! 5. Optionally print the registry as JSON on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --entities 9 --dump-registry
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use entitydebugger::events::switchdebug::switch_debug_observer;
use entitydebugger::game;
use entitydebugger::resources::appconfig::AppConfig;
use entitydebugger::resources::camera3d::Camera3DRes;
use entitydebugger::resources::debugregistry::EntityDebugRegistry;
use entitydebugger::resources::indicatorarena::IndicatorArena;
use entitydebugger::resources::input::InputState;
use entitydebugger::resources::selection::Selection;
use entitydebugger::resources::worldtime::WorldTime;
use entitydebugger::systems::debugregistry::{prune_despawned_entries, registered_entities};
use entitydebugger::systems::indicator::{indicator_animation_system, prune_stale_indicators};
use entitydebugger::systems::input::update_input_state;
use entitydebugger::systems::propagate_transforms::propagate_transforms;
use entitydebugger::systems::render::render_system;
use entitydebugger::systems::selection::{follow_registry_changes, selection_system};
use entitydebugger::systems::time::update_world_time;

/// Entity debugger demo
#[derive(Parser)]
#[command(version, about = "Inspect registered ECS entities and point at them with a bouncing arrow.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of demo entities to spawn and register.
    #[arg(long, value_name = "N", default_value_t = 6)]
    entities: usize,

    /// Print the registry as JSON when the window closes.
    #[arg(long)]
    dump_registry: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Config & raylib window ---------------
    let mut config = AppConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Entity Debugger");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(Camera3DRes::default());
    world.init_resource::<EntityDebugRegistry>();
    world.init_resource::<IndicatorArena>();
    world.init_resource::<Selection>();
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(follow_registry_changes));
    // Ensure the observers are registered before anything triggers events.
    world.flush();

    game::register_component_descriptors(&mut world);
    game::setup_scene(&mut world, cli.entities);

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            selection_system,
            indicator_animation_system,
            prune_stale_indicators,
            prune_despawned_entries,
            propagate_transforms,
            render_system,
        )
            .chain(),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }

    if cli.dump_registry {
        match serde_json::to_string_pretty(&registered_entities(&world)) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize registry: {}", e),
        }
    }
}
