//! Submission progress: how much of a participant's allocation is filled
//! with artwork.

use crate::allocation::{SlotArtworkMap, SlotId, SlotOwnerMap};
use crate::participant::ParticipantId;

/// Derived fill state of one participant's slots. Never stored, recomputed
/// from the owner and artwork maps on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub total: u32,
    pub filled: u32,
    /// Rounded to the nearest whole percent; 0 when no slots are owned.
    pub percentage: u8,
}

/// Count the slots `participant` owns and how many of them carry artwork.
#[must_use]
pub fn submission_status(
    participant: &ParticipantId,
    owners: &SlotOwnerMap,
    artworks: &SlotArtworkMap,
) -> SubmissionStatus {
    let owned: Vec<SlotId> = owners
        .iter()
        .filter(|(_, owner)| *owner == participant)
        .map(|(slot, _)| *slot)
        .collect();
    let filled = owned
        .iter()
        .filter(|slot| artworks.contains_key(*slot))
        .count();
    let total = owned.len();

    let percentage = if total == 0 {
        0
    } else {
        ((filled as f64 / total as f64) * 100.0).round() as u8
    };

    SubmissionStatus {
        total: total as u32,
        filled: filled as u32,
        percentage,
    }
}
