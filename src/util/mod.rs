//! Utility types used throughout the library.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`Rgba`] / [`ColorTransform`] - Color model

mod color;
mod error;

pub use color::*;
pub use error::*;
