//! # Config Crate
//!
//! Centralized configuration constants for the signed-field meshing pipeline.
//! Sampling defaults and safety limits are defined here so the
//! field and mesh crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{lattice_spacing, DEFAULT_ISO_LEVEL, DEFAULT_RESOLUTION, MIN_RESOLUTION};
//!
//! assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
//! assert_eq!(lattice_spacing(-1.0, 1.0, 5), 0.5);
//! assert_eq!(DEFAULT_ISO_LEVEL, 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Pure Data**: No runtime state, no platform-specific values

pub mod constants;
