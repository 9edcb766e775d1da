//! Animation model and decoders.
//!
//! The animation-frames tag is decoded against an [`ObjectCatalog`] into a
//! dense sequence of [`AnimationFrame`] snapshots, each holding one
//! [`SubobjectState`] per cataloged object. [`Clip`] ties the pieces
//! together for multi-tag files.

mod catalog;
mod clip;
mod decode;
mod filter;
mod frame;
mod state;

pub use catalog::*;
pub use clip::*;
pub use decode::*;
pub use filter::*;
pub use frame::*;
pub use state::*;
