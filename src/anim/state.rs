//! Per-object state records.

use glam::Affine2;
use smallvec::SmallVec;

use super::filter::Filter;
use crate::util::ColorTransform;

/// Complete visual state of one animation object at one point in a clip.
///
/// States are immutable once decoded: frames share them by reference and
/// the reconstructor replaces whole table entries instead of mutating in
/// place.
#[derive(Clone, Debug, PartialEq)]
pub struct SubobjectState {
    /// Object this state belongs to.
    pub object_id: u32,
    /// Signed draw order.
    pub z_index: i32,
    /// Placement transform, decoded as an opaque unit.
    pub transform: Affine2,
    /// Per-channel multiply-then-add color coefficients.
    pub color: ColorTransform,
    /// Filter effects in composition order. Most states carry none.
    pub filters: SmallVec<[Filter; 1]>,
    /// Object acting as a clip mask, when declared.
    pub mask_object_id: Option<u32>,
}

impl SubobjectState {
    /// Identity placeholder used before an object's first update.
    pub fn empty(object_id: u32) -> Self {
        Self {
            object_id,
            z_index: 0,
            transform: Affine2::IDENTITY,
            color: ColorTransform::IDENTITY,
            filters: SmallVec::new(),
            mask_object_id: None,
        }
    }
}
