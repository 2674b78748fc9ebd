//! Debugger systems.
//!
//! Submodules overview
//! - [`debugregistry`] – register, unregister, refresh and list entities
//! - [`indicator`] – animate indicators and drop stale ones
//! - [`indicatorlifecycle`] – attach and detach indicators
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`propagate_transforms`] – compute world transforms down the hierarchy
//! - [`render`] – draw the scene and the registry overlay using Raylib
//! - [`selection`] – move the selection and its indicator from input
//! - [`time`] – update simulation time and delta

pub mod debugregistry;
pub mod indicator;
pub mod indicatorlifecycle;
pub mod input;
pub mod propagate_transforms;
pub mod render;
pub mod selection;
pub mod time;
