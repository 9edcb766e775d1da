//! Decoders for the animation-frames tag.
//!
//! The tag stores per-frame object states sparsely: a batch of state
//! records is attached to each frame index where something changes, and
//! every other frame reuses the table as-is. Reconstruction replays the
//! batches over a per-object table and emits one dense snapshot per frame.
//!
//! Byte layout reference: the format's C++ library,
//! `Library/Sources/TagDefineAnimationFrames.cpp`.

use std::sync::Arc;

use glam::Vec2;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::catalog::ObjectCatalog;
use super::filter::{
    BlurFilter, ColorMatrixFilter, DropShadowFilter, Filter, FilterKind, GlowFilter,
};
use super::frame::AnimationFrame;
use super::state::SubobjectState;
use crate::tag::TagStream;
use crate::util::{ColorTransform, Error, Result, Rgba};

/// Mandatory byte span of a state record: flags, object id, z index, alpha
/// multiplier, affine transform. Used to reject absurd batch counts before
/// allocating for them.
const STATE_RECORD_MIN: usize = 3 + 4 + 4 + 4 + 6 * 4;

/// Reconstruct the dense frame sequence of one animation-frames tag.
///
/// `stream` must be positioned at the start of the tag's payload, with the
/// tag boundary pinned (see [`TagStream::open_tag`]). The catalog supplies
/// the exhaustive object id set: every returned frame holds exactly one
/// state per catalog entry, in catalog order, and the sequence length
/// equals `total_frame_count`.
///
/// Frames are snapshots, not live views — an update batch only replaces
/// table entries, so states already published into earlier frames are never
/// affected.
pub fn read_animation_frames(
    stream: &mut TagStream<'_>,
    catalog: &ObjectCatalog,
    total_frame_count: u16,
) -> Result<Vec<AnimationFrame>> {
    if catalog.is_empty() {
        return Err(Error::precondition("object catalog is empty"));
    }

    // Update-block count; the reconstructor discovers blocks by marker
    // instead of counting them.
    stream.read_u32()?;

    debug!(
        objects = catalog.len(),
        frames = total_frame_count,
        "decoding animation frames"
    );

    let mut table: Vec<Arc<SubobjectState>> = catalog
        .object_ids()
        .map(|id| Arc::new(SubobjectState::empty(id)))
        .collect();

    // Markers are 1-based frame indices.
    let mut next_marker = stream.read_u32()?;
    let mut frames = Vec::with_capacity(total_frame_count as usize);

    for frame_index in 0..u32::from(total_frame_count) {
        if frame_index + 1 == next_marker {
            let update_count = stream.read_u32()? as usize;
            if update_count.saturating_mul(STATE_RECORD_MIN) > stream.remaining() {
                return Err(Error::malformed(format!(
                    "update batch declares {} states but only {} bytes remain",
                    update_count,
                    stream.remaining()
                )));
            }
            trace!(frame = frame_index, updates = update_count, "update batch");

            // Decode the whole batch before touching the table; the write
            // phase is atomic across the batch.
            let mut batch = Vec::with_capacity(update_count);
            for _ in 0..update_count {
                batch.push(read_subobject_state(stream)?);
            }

            for state in batch {
                match catalog.slot_of(state.object_id) {
                    // Overwriting the slot drops the superseded state;
                    // already-emitted frames keep their own clones alive.
                    Some(slot) => table[slot] = Arc::new(state),
                    None => warn!(
                        object_id = state.object_id,
                        frame = frame_index,
                        "update names an object missing from the catalog; ignored"
                    ),
                }
            }
            check_tag_bounds(stream, "state update block")?;

            if stream.position() < stream.tag_end_position() {
                next_marker = stream.read_u32()?;
                check_tag_bounds(stream, "frame marker")?;
            }
            // Otherwise the table is final for the rest of the clip.
        }

        // Reference copies in catalog order; the snapshot never observes
        // later table mutations.
        frames.push(AnimationFrame::new(table.clone()));
    }

    if stream.position() < stream.tag_end_position() {
        debug!(
            unread = stream.tag_end_position() - stream.position(),
            "animation-frames payload has trailing bytes past the last frame"
        );
    }

    Ok(frames)
}

fn check_tag_bounds(stream: &TagStream<'_>, what: &str) -> Result<()> {
    if stream.position() > stream.tag_end_position() {
        return Err(Error::malformed(format!(
            "{} ends at position {}, past the tag end at {}",
            what,
            stream.position(),
            stream.tag_end_position()
        )));
    }
    Ok(())
}

/// Decode one complete per-object state record, advancing the cursor past
/// it.
///
/// The record is fixed-width except for three flag-gated sections (color
/// transform, effects, mask); consumption is fully determined by the flag
/// bytes and the effect kind tags. No lookahead, no backtracking.
pub fn read_subobject_state(stream: &mut TagStream<'_>) -> Result<SubobjectState> {
    let has_color_transform = stream.read_u8()? != 0;
    let has_masks = stream.read_u8()? != 0;
    let has_effect = stream.read_u8()? != 0;

    let object_id = stream.read_u32()?;
    let z_index = stream.read_i32()?;

    // The alpha multiplier always precedes the optional color block.
    let mut color = ColorTransform::IDENTITY;
    color.mult.a = stream.read_f32()?;

    let transform = stream.read_affine()?;

    if has_color_transform {
        let mut v = [0f32; 7];
        for value in &mut v {
            *value = stream.read_f32()?;
        }
        color.offset.a = v[0];
        color.mult.r = v[1];
        color.offset.r = v[2];
        color.mult.g = v[3];
        color.offset.g = v[4];
        color.mult.b = v[5];
        color.offset.b = v[6];
    }

    let mut filters = SmallVec::new();
    if has_effect {
        let effect_count = stream.read_u8()?;
        for _ in 0..effect_count {
            let kind = stream.read_u32()?;
            match read_filter(stream, kind)? {
                Some(filter) => filters.push(filter),
                // Unknown kinds encode no measurable body, so there is
                // nothing to skip over; newer format revisions only append
                // kinds. Tolerate and continue with the next entry.
                None => warn!(kind, "unknown filter kind; skipped"),
            }
        }
    }

    let mask_object_id = if has_masks {
        Some(stream.read_u32()?)
    } else {
        None
    };

    Ok(SubobjectState {
        object_id,
        z_index,
        transform,
        color,
        filters,
        mask_object_id,
    })
}

/// Decode the filter variant selected by an already-read kind tag,
/// consuming exactly the bytes of that variant's layout.
///
/// Returns `Ok(None)` for kind values this decoder does not know; the
/// caller decides whether to tolerate them.
pub fn read_filter(stream: &mut TagStream<'_>, kind: u32) -> Result<Option<Filter>> {
    let kind = match FilterKind::from_u32(kind) {
        Some(kind) => kind,
        None => return Ok(None),
    };

    let filter = match kind {
        FilterKind::Blur => Filter::Blur(BlurFilter {
            size: read_size(stream)?,
        }),
        FilterKind::ColorMatrix => {
            let mut matrix = [0f32; 16];
            let mut offsets = [0f32; 4];
            for column in 0..4 {
                for row in 0..4 {
                    matrix[row * 4 + column] = stream.read_f32()?;
                }
                offsets[column] = stream.read_f32()? / 256.0;
            }
            Filter::ColorMatrix(ColorMatrixFilter { matrix, offsets })
        }
        FilterKind::Glow => Filter::Glow(GlowFilter {
            color: read_packed_color(stream)?,
            size: read_size(stream)?,
            strength: stream.read_f32()?,
            inner_glow: stream.read_u8()? != 0,
            knockout: stream.read_u8()? != 0,
        }),
        FilterKind::DropShadow => Filter::DropShadow(DropShadowFilter {
            color: read_packed_color(stream)?,
            size: read_size(stream)?,
            angle: stream.read_f32()?,
            distance: stream.read_f32()?,
            strength: stream.read_f32()?,
            inner_shadow: stream.read_u8()? != 0,
            knockout: stream.read_u8()? != 0,
        }),
    };
    Ok(Some(filter))
}

fn read_size(stream: &mut TagStream<'_>) -> Result<Vec2> {
    let width = stream.read_f32()?;
    let height = stream.read_f32()?;
    Ok(Vec2::new(width, height))
}

fn read_packed_color(stream: &mut TagStream<'_>) -> Result<Rgba> {
    let c = stream.read_bytes(4)?;
    Ok(translate_color([c[0], c[1], c[2], c[3]]))
}

/// Unpack four stream color bytes into float channels.
///
/// The stream order maps as blue, green, red, alpha. The red/blue swap is
/// how shipped assets are encoded — likely a byte-order artifact of the
/// producing pipeline — and is preserved bit-exactly for compatibility.
fn translate_color(c: [u8; 4]) -> Rgba {
    Rgba {
        r: c[2] as f32 / 255.0,
        g: c[1] as f32 / 255.0,
        b: c[0] as f32 / 255.0,
        a: c[3] as f32 / 255.0,
    }
}
