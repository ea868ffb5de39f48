//! Core domain model for collaborative virtual exhibits: the environment
//! catalog, the slot allocator that partitions a room's display slots among
//! the exhibit owner and their collaborators, and the pure helpers that
//! derive slot styling, slot labels, submission progress and interaction
//! permissions from an allocation.
//!
//! Everything in this crate is synchronous and side-effect free; stateful
//! orchestration lives in `virtual-exhibit-allocation-builder`.

pub mod allocation;
pub mod catalog;
mod id;
pub mod interaction;
pub mod participant;
pub mod presentation;
pub mod progress;

pub use allocation::{
    distribute_slots, try_distribute, ArtworkId, ExhibitKind, SlotArtworkMap, SlotId, SlotOwnerMap,
};
pub use catalog::{Catalog, CatalogError, Environment, EnvironmentId, SlotCapacity};
pub use interaction::{can_interact_with_slot, ViewMode};
pub use participant::{Participant, ParticipantId, Session};
pub use presentation::{owner_label, slot_style, PaletteEntry, SLOT_PALETTE, SOLO_SLOT_STYLE};
pub use progress::{submission_status, SubmissionStatus};
