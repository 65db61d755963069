//! # Config Crate
//!
//! Centralized configuration for the Eisen object-code scene pipeline.
//! Tessellation, colour, camera and lighting constants live in
//! [`constants`]; the host-controlled viewer toggles live in [`viewer`].
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, VERTEX_COLOR_SENTINEL};
//! use config::ViewerConfig;
//!
//! let viewer = ViewerConfig::default();
//! assert!(viewer.optimize);
//! assert_eq!(DEFAULT_SEGMENTS, 32);
//! assert!(VERTEX_COLOR_SENTINEL < 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every literal used by the pipeline is named here
//! - **Explicit toggles**: host switches are collected into one value and passed
//!   down, never read ad hoc

pub mod constants;
pub mod viewer;

pub use viewer::ViewerConfig;

#[cfg(test)]
mod tests;
