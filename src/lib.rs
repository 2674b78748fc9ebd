//! Entity debugger library.
//!
//! Tracks chosen ECS entities in an inspectable registry of transform
//! snapshots and marks a selected entity with a bouncing 3D arrow. The
//! components, resources, systems and events are exposed for the demo binary
//! and for integration tests.

pub mod components;
pub mod debugext;
pub mod events;
pub mod game;
pub mod resources;
pub mod snapshot;
pub mod systems;
