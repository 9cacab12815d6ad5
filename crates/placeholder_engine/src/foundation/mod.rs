//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Geometry types (points, rectangles, canvas sizes)
//! - Colors and the fixed palette
//! - Logging utilities

pub mod math;
pub mod color;
pub mod logging;
