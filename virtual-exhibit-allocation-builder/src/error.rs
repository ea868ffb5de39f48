//! Rejections surfaced by the exhibit builder.
//!
//! These are precondition failures, not faults: whenever one is returned
//! the builder state is unchanged. `Display` carries the user-facing title
//! shown by the marketplace UI.

use virtual_exhibit_allocation_engine::SlotId;

use crate::notify::Notification;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChangeRejected {
    #[error("Not enough slots to assign for all collaborators and the owner.")]
    InsufficientCapacity { required: u32, available: u32 },
    #[error("Maximum collaborators reached")]
    CollaboratorLimit { max: u32 },
    #[error("Already a collaborator")]
    AlreadyCollaborator,
    #[error("Artwork already selected")]
    DuplicateArtwork,
    #[error("No available slots")]
    NoFreeSlot,
    #[error("Access denied")]
    NotSlotOwner { slot: SlotId },
    #[error("Read-only view")]
    ReadOnly,
}

impl ChangeRejected {
    /// The toast belonging to this rejection, wording from production.
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            Self::InsufficientCapacity { .. } => Notification::warning(self.to_string())
                .with_description("Please select a virtual environment with more available slots."),
            Self::CollaboratorLimit { max } => Notification::error(self.to_string())
                .with_description(format!("You can only add up to {max} collaborators.")),
            Self::AlreadyCollaborator => Notification::warning(self.to_string())
                .with_description("This user is already part of the exhibit."),
            Self::DuplicateArtwork => Notification::error(self.to_string())
                .with_description("This artwork has already been assigned to a slot."),
            Self::NoFreeSlot => Notification::error(self.to_string())
                .with_description("You don't have any available slots for more artwork."),
            Self::NotSlotOwner { .. } => Notification::error(self.to_string())
                .with_description("This slot is assigned to another participant."),
            Self::ReadOnly => Notification::warning(self.to_string())
                .with_description("This exhibit can't be edited in the current view."),
        }
    }
}
