//! Clip assembly: the catalog plus the reconstructed frame sequence.

use tracing::debug;

use super::catalog::ObjectCatalog;
use super::decode::read_animation_frames;
use super::frame::AnimationFrame;
use crate::tag::TagStream;
use crate::util::Result;

/// One animation clip: a display object catalog and the dense frame
/// sequence decoded from its animation-frames tags.
///
/// The catalog must be populated (from the animation-objects and
/// animation-masks tags) before any animation-frames tag is decoded.
#[derive(Clone, Debug, Default)]
pub struct Clip {
    catalog: ObjectCatalog,
    total_frame_count: u16,
    frames: Vec<AnimationFrame>,
}

impl Clip {
    pub fn new(catalog: ObjectCatalog, total_frame_count: u16) -> Self {
        Self {
            catalog,
            total_frame_count,
            frames: Vec::new(),
        }
    }

    #[inline]
    pub fn catalog(&self) -> &ObjectCatalog {
        &self.catalog
    }

    #[inline]
    pub fn total_frame_count(&self) -> u16 {
        self.total_frame_count
    }

    #[inline]
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Append one frame. Frame order is append order.
    pub fn push_frame(&mut self, frame: AnimationFrame) {
        self.frames.push(frame);
    }

    /// Decode one animation-frames tag payload and append its frames.
    ///
    /// The stream must be positioned at the payload start, boundary pinned
    /// by [`TagStream::open_tag`]. A file may carry several frames tags;
    /// each appends to the clip in file order.
    pub fn decode_frames_tag(&mut self, stream: &mut TagStream<'_>) -> Result<()> {
        let frames = read_animation_frames(stream, &self.catalog, self.total_frame_count)?;
        debug!(
            appended = frames.len(),
            total = self.frames.len() + frames.len(),
            "frames tag decoded"
        );
        self.frames.extend(frames);
        Ok(())
    }
}
