//! ECS resources made available to systems.
//!
//! Overview
//! - `appconfig` – window and indicator settings loaded from INI
//! - `camera3d` – shared 3D camera used by the render pass
//! - `componentdescriptors` – which components snapshots list, and their labels
//! - `debugmode` – presence toggles the registry overlay
//! - `debugregistry` – ordered table of entity snapshots
//! - `indicatorarena` – owned storage for active indicators
//! - `input` – per-frame keyboard state of keys relevant to the demo
//! - `selection` – currently inspected entity
//! - `worldtime` – simulation time and delta
pub mod appconfig;
pub mod camera3d;
pub mod componentdescriptors;
pub mod debugmode;
pub mod debugregistry;
pub mod indicatorarena;
pub mod input;
pub mod selection;
pub mod worldtime;
