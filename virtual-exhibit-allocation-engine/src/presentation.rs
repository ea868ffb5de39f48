//! Slot presentation: mapping a slot's owner to a display style token and a
//! human-readable label. Pure derivations over the owner map, recomputed on
//! every render.

use itertools::Itertools;

use crate::allocation::{ExhibitKind, SlotId, SlotOwnerMap};
use crate::participant::{Participant, ParticipantId, Session};

/// One entry of the collaborative-slot palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Style token understood by the rendering layer.
    pub classes: &'static str,
    /// Legend line shown beside the color swatch.
    pub legend: &'static str,
}

/// Palette for collaborative exhibits. Entry 0 is reserved for the exhibit
/// owner; collaborators follow in roster order.
pub const SLOT_PALETTE: [PaletteEntry; 3] = [
    PaletteEntry {
        classes: "border-primary bg-primary/10",
        legend: "Dark Blue (Your slots)",
    },
    PaletteEntry {
        classes: "border-[#9b87f5] bg-[#9b87f5]/10",
        legend: "Purple (First collaborator's slots)",
    },
    PaletteEntry {
        classes: "border-[#7E69AB] bg-[#7E69AB]/10",
        legend: "Dark Purple (Second collaborator's slots)",
    },
];

/// Style token for solo exhibits, where ownership is never highlighted.
pub const SOLO_SLOT_STYLE: &str = "border-gray-200";

/// Resolve the style token for a slot.
///
/// Solo exhibits always render neutrally. In collaborative exhibits an
/// unowned slot gets the default palette entry, the session user's slots get
/// entry 0, and each collaborator's slots get the entry after their roster
/// position. Rosters longer than the palette wrap around; the lookup never
/// panics.
#[must_use]
pub fn slot_style(
    slot: SlotId,
    kind: ExhibitKind,
    owners: &SlotOwnerMap,
    session: &Session,
    collaborators: &[Participant],
) -> &'static str {
    if !kind.is_collab() {
        return SOLO_SLOT_STYLE;
    }
    let Some(owner) = owners.get(&slot) else {
        return SLOT_PALETTE[0].classes;
    };
    SLOT_PALETTE[palette_index(owner, session, collaborators)].classes
}

fn palette_index(
    owner: &ParticipantId,
    session: &Session,
    collaborators: &[Participant],
) -> usize {
    if owner == session.user_id() {
        return 0;
    }
    match collaborators
        .iter()
        .find_position(|collaborator| &collaborator.id == owner)
    {
        Some((position, _)) => (position + 1) % SLOT_PALETTE.len(),
        // an owner outside the roster collapses to the default entry
        None => 0,
    }
}

/// Human label for a slot's owner: `"Your slot"` for the session user,
/// `"{first_name}'s slot"` for a known collaborator, empty for an owner no
/// longer in the roster.
#[must_use]
pub fn owner_label(
    owner: &ParticipantId,
    session: &Session,
    collaborators: &[Participant],
) -> String {
    if owner == session.user_id() {
        return "Your slot".to_owned();
    }
    collaborators
        .iter()
        .find(|collaborator| &collaborator.id == owner)
        .map_or_else(String::new, |collaborator| {
            format!("{}'s slot", collaborator.first_name)
        })
}
