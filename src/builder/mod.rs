//! Builder API for calculator configuration.
//!
//! This module provides fluent builders for calculators and key bindings.
//! Builders validate their configuration and report problems as
//! [`BuildError`] values instead of panicking.

pub mod calculator;
pub mod error;
pub mod keymap;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
pub use keymap::{Key, KeyAction, Keymap, KeymapBuilder};
