//! Event types and observers.
//!
//! Submodules:
//! - [`registry`] – notifications about debug registry changes
//! - [`switchdebug`] – toggle the registry overlay on/off
pub mod registry;
pub mod switchdebug;
