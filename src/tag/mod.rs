//! Low-level tag framing and the payload byte cursor.
//!
//! A GAF file body is a flat sequence of self-delimited tags:
//!
//! ```text
//! +-------------------+
//! | kind    (u16 LE)  |
//! +-------------------+
//! | size    (u32 LE)  |  payload bytes that follow
//! +-------------------+
//! | ... payload ...   |
//! +-------------------+
//! ```
//!
//! This crate decodes the animation-frames payload; the other kinds are
//! named by constants so container code can recognize and skip them.

mod format;
mod stream;

pub use format::*;
pub use stream::*;
