//! View modes and the per-slot interaction guard.

use crate::allocation::{SlotId, SlotOwnerMap};
use crate::participant::{ParticipantId, Session};

/// Perspective an exhibit is being looked at from.
///
/// A closed set instead of the marketplace UI's string mode flag: the
/// collaborator perspective names exactly who is impersonated, and the
/// spectator modes carry no interacting participant at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// The exhibit owner working on their own exhibit.
    Owner,
    /// Walking through the flow as a specific collaborator.
    Collaborator(ParticipantId),
    /// Moderator review of a submitted exhibit.
    Review,
    /// Watching a live exhibit.
    Monitoring,
    /// Read-only look before publishing.
    Preview,
}

impl ViewMode {
    /// The participant acting in this mode, when the mode allows acting.
    #[must_use]
    pub fn interacting_participant<'a>(
        &'a self,
        session: &'a Session,
    ) -> Option<&'a ParticipantId> {
        match self {
            Self::Owner => Some(session.user_id()),
            Self::Collaborator(id) => Some(id),
            Self::Review | Self::Monitoring | Self::Preview => None,
        }
    }

    #[must_use]
    pub const fn is_spectator(&self) -> bool {
        matches!(self, Self::Review | Self::Monitoring | Self::Preview)
    }
}

/// Whether the current viewer may mutate `slot`.
///
/// Read-only state wins over everything else; an unowned slot is never
/// interactive; otherwise the slot's owner must be the participant acting in
/// the current view mode.
#[must_use]
pub fn can_interact_with_slot(
    slot: SlotId,
    read_only: bool,
    owners: &SlotOwnerMap,
    mode: &ViewMode,
    session: &Session,
) -> bool {
    if read_only {
        return false;
    }
    let Some(owner) = owners.get(&slot) else {
        return false;
    };
    mode.interacting_participant(session) == Some(owner)
}
