//! # Rendering Module
//!
//! Text rendering of game events for the console.

pub mod display;

pub use display::*;
