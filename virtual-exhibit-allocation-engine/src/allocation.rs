//! Slot allocation: partitioning an environment's display slots among the
//! exhibit participants.
//!
//! Allocation is always a full rebuild. Changing the environment, the
//! exhibit kind or the collaborator roster produces a fresh owner map;
//! nothing is patched incrementally, so no stale ownership can survive a
//! re-partition.

use core::fmt;
use core::iter;
use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Environment, EnvironmentId};
use crate::id::RawId;
use crate::participant::{Participant, ParticipantId, Session};

/// 1-based index of a display slot within an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque artwork id, string-normalized exactly like [`ParticipantId`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ArtworkId(String);

impl ArtworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for ArtworkId {
    fn from(raw: RawId) -> Self {
        Self(raw.into_canonical())
    }
}

impl From<&str> for ArtworkId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<u64> for ArtworkId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which participant owns each slot.
///
/// After allocation the key set is exactly `1..=capacity` for the selected
/// environment, every slot has exactly one owner, and owners are drawn only
/// from the owner plus the collaborator roster.
pub type SlotOwnerMap = BTreeMap<SlotId, ParticipantId>;

/// Which artwork fills each slot; a missing key means the slot is unfilled.
pub type SlotArtworkMap = BTreeMap<SlotId, ArtworkId>;

/// Whether the exhibit is curated alone or with collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitKind {
    Solo,
    Collab,
}

impl ExhibitKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Collab => "collab",
        }
    }

    #[must_use]
    pub const fn is_collab(self) -> bool {
        matches!(self, Self::Collab)
    }
}

impl fmt::Display for ExhibitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partition every slot of `environment` among the owner and the
/// collaborators.
///
/// Solo exhibits give every slot to the owner. Collaborative exhibits walk
/// `[owner, collaborators...]` in order: with `base = capacity / n` and
/// `remainder = capacity % n`, the first `remainder` participants receive
/// `base + 1` slots and the rest `base`, each as one contiguous ascending
/// run. The front-loaded remainder makes the split deterministic in roster
/// order.
#[must_use]
pub fn distribute_slots(
    environment: &Environment,
    owner: &ParticipantId,
    kind: ExhibitKind,
    collaborators: &[Participant],
) -> SlotOwnerMap {
    let capacity = environment.slots.get();
    let mut owners = SlotOwnerMap::new();

    match kind {
        ExhibitKind::Solo => {
            for index in 1..=capacity {
                owners.insert(SlotId(index), owner.clone());
            }
        }
        ExhibitKind::Collab => {
            let participants: Vec<&ParticipantId> = iter::once(owner)
                .chain(collaborators.iter().map(|collaborator| &collaborator.id))
                .collect();
            let count = participants.len();
            let base = capacity as usize / count;
            let remainder = capacity as usize % count;

            let mut next_slot = 1_u32;
            for (position, participant) in participants.into_iter().enumerate() {
                let quota = base + usize::from(position < remainder);
                for _ in 0..quota {
                    owners.insert(SlotId(next_slot), participant.clone());
                    next_slot += 1;
                }
            }
        }
    }

    debug_assert_eq!(owners.len(), capacity as usize);
    debug!(
        environment = %environment.id,
        kind = %kind,
        slots = capacity,
        owners = owners.values().counts().len(),
        "distributed slots"
    );
    owners
}

/// The guarded form used by the exhibit flow: resolves the selected
/// environment against the catalog and declines (`None`) when nothing is
/// selected or the id is unknown, in which case the caller leaves its
/// existing allocation untouched.
#[must_use]
pub fn try_distribute(
    catalog: &Catalog,
    selected: Option<EnvironmentId>,
    session: &Session,
    kind: ExhibitKind,
    collaborators: &[Participant],
) -> Option<SlotOwnerMap> {
    let id = selected?;
    let Some(environment) = catalog.get(id) else {
        debug!(environment = %id, "selected environment is not in the catalog, leaving allocation untouched");
        return None;
    };
    Some(distribute_slots(
        environment,
        session.user_id(),
        kind,
        collaborators,
    ))
}
