//! # GAF
//!
//! Rust reader for the GAF (Generic Animation Format) 2D animation
//! interchange format, focused on the animation-frames tag.
//!
//! Original GAF format and C++ library developed by Catalyst Apps /
//! GAFMedia. All rights to the original belong to the authors. This is an
//! independent Rust implementation aiming to match the original decoder
//! byte for byte, including its quirks.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (colors, errors)
//! - [`tag`] - Tag framing and the little-endian payload cursor
//! - [`anim`] - Animation model and the frame reconstructor
//!
//! ## Example
//!
//! ```ignore
//! use gaf::anim::{Clip, ObjectCatalog};
//! use gaf::tag::{TagStream, TAG_DEFINE_ANIMATION_FRAMES};
//!
//! let catalog: ObjectCatalog = objects.into_iter().collect();
//! let mut clip = Clip::new(catalog, frame_count);
//!
//! let mut stream = TagStream::new(&payload);
//! let header = stream.open_tag()?;
//! assert_eq!(header.kind, TAG_DEFINE_ANIMATION_FRAMES);
//! clip.decode_frames_tag(&mut stream)?;
//!
//! for frame in clip.frames() {
//!     for state in frame.states() {
//!         println!("{} at z {}", state.object_id, state.z_index);
//!     }
//! }
//! ```

pub mod anim;
pub mod tag;
pub mod util;

// Re-export commonly used types
pub use util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::anim::{
        AnimationFrame, Clip, Filter, FilterKind, ObjectCatalog, SubobjectState,
    };
    pub use crate::tag::{TagHeader, TagStream};
    pub use crate::util::{ColorTransform, Error, Result, Rgba};
}
