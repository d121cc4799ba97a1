//! Core types for the cellgrid layout engine.
//!
//! This crate holds the vocabulary shared by the layout engine and its
//! hosts: directions, anchors, padding and the host-settable
//! [`GridConfig`].

pub mod config;
pub mod errors;
pub mod types;

pub use config::GridConfig;
pub use errors::ConfigError;
pub use types::{Alignment, Anchor, Axis, AxisAlign, Direction, Padding};
