//! Dense per-frame snapshots.

use std::sync::Arc;

use super::state::SubobjectState;

/// Snapshot of every object's current state at one frame index.
///
/// Entries follow catalog order. Consecutive frames share state instances
/// when nothing changed between them; a snapshot is a set of reference
/// copies taken at emission time, never a live view of the reconstruction
/// table.
#[derive(Clone, Debug, Default)]
pub struct AnimationFrame {
    states: Vec<Arc<SubobjectState>>,
}

impl AnimationFrame {
    /// Create a frame from catalog-ordered states.
    pub fn new(states: Vec<Arc<SubobjectState>>) -> Self {
        Self { states }
    }

    /// States in catalog order.
    #[inline]
    pub fn states(&self) -> &[Arc<SubobjectState>] {
        &self.states
    }

    /// Number of object states in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the snapshot holds no states.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Find the state of one object id. Linear scan; frames are small.
    pub fn state_for(&self, object_id: u32) -> Option<&SubobjectState> {
        self.states
            .iter()
            .find(|s| s.object_id == object_id)
            .map(|s| s.as_ref())
    }
}
