//! # Utilities Module
//!
//! Utility functions shared by the game systems.

pub mod math;

pub use math::*;
