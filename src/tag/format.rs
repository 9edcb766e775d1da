//! Tag framing constants and structures.

/// Closes the tag stream of a file or timeline.
pub const TAG_END: u16 = 0;

/// Texture atlas definition.
pub const TAG_DEFINE_ATLAS: u16 = 1;

/// Mask object table.
pub const TAG_DEFINE_ANIMATION_MASKS: u16 = 2;

/// Animation object table; source of the object catalog.
pub const TAG_DEFINE_ANIMATION_OBJECTS: u16 = 3;

/// Per-frame object state updates; the payload decoded by
/// [`read_animation_frames`](crate::anim::read_animation_frames).
pub const TAG_DEFINE_ANIMATION_FRAMES: u16 = 4;

/// Named part table.
pub const TAG_DEFINE_NAMED_PARTS: u16 = 5;

/// Frame-range sequence table.
pub const TAG_DEFINE_SEQUENCES: u16 = 6;

/// Size of a tag header in bytes (kind code + payload length).
pub const TAG_HEADER_SIZE: usize = 6;

/// Header of one tag record.
///
/// Every tag is self-delimited: the header declares how many payload bytes
/// follow, and readers that do not understand a kind skip exactly that many.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagHeader {
    /// Tag kind code.
    pub kind: u16,
    /// Payload length in bytes, header excluded.
    pub size: u32,
}

impl TagHeader {
    /// End position of the tag's payload, given where the payload starts.
    #[inline]
    pub const fn end_position(&self, payload_start: usize) -> usize {
        payload_start + self.size as usize
    }

    /// Whether this header closes the tag stream.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.kind == TAG_END
    }
}
