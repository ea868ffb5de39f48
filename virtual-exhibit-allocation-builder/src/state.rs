//! The exhibit-creation flow as one owned state machine.
//!
//! Every mutable piece of the flow lives here: form fields, the selected
//! environment, the collaborator roster, the slot maps and the view mode.
//! Handlers run synchronously to completion on one logical thread; a
//! rejected change returns a [`ChangeRejected`] and leaves the whole state
//! as it was.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use virtual_exhibit_allocation_config::Limits;
use virtual_exhibit_allocation_engine::{
    can_interact_with_slot, owner_label, slot_style, submission_status, try_distribute, ArtworkId,
    Catalog, Environment, EnvironmentId, ExhibitKind, Participant, ParticipantId, Session,
    SlotArtworkMap, SlotId, SlotOwnerMap, SubmissionStatus, ViewMode,
};

use crate::error::ChangeRejected;
use crate::notify::{Notifier, NullNotifier};
use crate::record::{ExhibitRecord, ExhibitStatus, LoadMode};

pub struct ExhibitBuilder {
    session: Session,
    catalog: Catalog,
    limits: Limits,
    notifier: Box<dyn Notifier>,

    title: String,
    category: String,
    artwork_style: String,
    description: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,

    kind: ExhibitKind,
    selected_environment: Option<EnvironmentId>,
    banner_image: Option<String>,
    banner_file: Option<PathBuf>,

    collaborators: Vec<Participant>,
    pending_removal: Option<ParticipantId>,

    slot_owners: SlotOwnerMap,
    slot_artworks: SlotArtworkMap,
    selected_slots: BTreeSet<SlotId>,
    selected_artworks: BTreeSet<ArtworkId>,

    view_mode: ViewMode,
    read_only: bool,
}

impl ExhibitBuilder {
    #[must_use]
    pub fn new(session: Session, catalog: Catalog, limits: Limits) -> Self {
        Self::with_notifier(session, catalog, limits, Box::new(NullNotifier))
    }

    #[must_use]
    pub fn with_notifier(
        session: Session,
        catalog: Catalog,
        limits: Limits,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            catalog,
            limits,
            notifier,
            title: String::new(),
            category: String::new(),
            artwork_style: String::new(),
            description: String::new(),
            start_date: None,
            end_date: None,
            kind: ExhibitKind::Solo,
            selected_environment: None,
            banner_image: None,
            banner_file: None,
            collaborators: Vec::new(),
            pending_removal: None,
            slot_owners: SlotOwnerMap::new(),
            slot_artworks: SlotArtworkMap::new(),
            selected_slots: BTreeSet::new(),
            selected_artworks: BTreeSet::new(),
            view_mode: ViewMode::Owner,
            read_only: false,
        }
    }

    /// Select the virtual room the exhibit is placed in.
    ///
    /// An id that is not in the catalog is ignored. A room with fewer slots
    /// than participants is rejected with a warning toast and the previous
    /// selection stays active. On success the banner falls back to the
    /// room's image, a pending banner upload is dropped and the slots are
    /// re-partitioned.
    pub fn select_environment(&mut self, id: EnvironmentId) -> Result<(), ChangeRejected> {
        let Some(environment) = self.catalog.get(id) else {
            debug!(environment = %id, "ignoring selection of unknown environment");
            return Ok(());
        };
        let required = self.collaborators.len() as u32 + 1;
        let available = environment.slots.get();
        if available < required {
            let rejection = ChangeRejected::InsufficientCapacity {
                required,
                available,
            };
            warn!(environment = %id, required, available, "environment has too few slots");
            self.notifier.notify(rejection.notification());
            return Err(rejection);
        }

        let image = environment.image.clone();
        self.selected_environment = Some(id);
        self.banner_image = Some(image);
        self.banner_file = None;
        self.reallocate();
        info!(environment = %id, slots = available, "environment selected");
        Ok(())
    }

    /// Switch between a solo and a collaborative exhibit. Going solo clears
    /// the roster; any actual change re-partitions the slots.
    pub fn set_exhibit_kind(&mut self, kind: ExhibitKind) {
        if self.kind == kind {
            return;
        }
        self.kind = kind;
        if !kind.is_collab() {
            self.collaborators.clear();
            self.pending_removal = None;
        }
        self.reallocate();
        info!(%kind, "exhibit kind changed");
    }

    /// Append a collaborator to the roster. Roster order is meaningful: it
    /// decides who receives the front-loaded remainder slots.
    pub fn add_collaborator(&mut self, participant: Participant) -> Result<(), ChangeRejected> {
        let max = self.limits.max_collaborators;
        if self.collaborators.len() as u32 >= max {
            let rejection = ChangeRejected::CollaboratorLimit { max };
            warn!(max, "collaborator limit reached");
            self.notifier.notify(rejection.notification());
            return Err(rejection);
        }
        if participant.id == *self.session.user_id()
            || self
                .collaborators
                .iter()
                .any(|existing| existing.id == participant.id)
        {
            let rejection = ChangeRejected::AlreadyCollaborator;
            warn!(collaborator = %participant.id, "participant is already part of the exhibit");
            self.notifier.notify(rejection.notification());
            return Err(rejection);
        }

        let id = participant.id.clone();
        self.collaborators.push(participant);
        self.reallocate();
        info!(collaborator = %id, "collaborator added");
        Ok(())
    }

    /// Stage a collaborator for removal, pending confirmation. Ids outside
    /// the roster are ignored.
    pub fn request_remove_collaborator(&mut self, id: &ParticipantId) {
        if self
            .collaborators
            .iter()
            .any(|collaborator| collaborator.id == *id)
        {
            self.pending_removal = Some(id.clone());
        } else {
            debug!(collaborator = %id, "removal requested for unknown collaborator");
        }
    }

    /// Remove the staged collaborator and re-partition. Without a staged
    /// removal this is a no-op.
    pub fn confirm_remove_collaborator(&mut self) {
        let Some(id) = self.pending_removal.take() else {
            return;
        };
        self.collaborators
            .retain(|collaborator| collaborator.id != id);
        self.reallocate();
        info!(collaborator = %id, "collaborator removed");
    }

    pub fn cancel_remove_collaborator(&mut self) {
        self.pending_removal = None;
    }

    /// Assign an artwork to the acting participant's first unfilled slot
    /// and return that slot.
    pub fn select_artwork(&mut self, artwork: ArtworkId) -> Result<SlotId, ChangeRejected> {
        let participant = self.editing_participant()?;
        if self.selected_artworks.contains(&artwork) {
            let rejection = ChangeRejected::DuplicateArtwork;
            warn!(%artwork, "artwork is already assigned to a slot");
            self.notifier.notify(rejection.notification());
            return Err(rejection);
        }
        let Some(slot) = self.first_unfilled_slot(&participant) else {
            let rejection = ChangeRejected::NoFreeSlot;
            warn!(%participant, "no unfilled slot left for participant");
            self.notifier.notify(rejection.notification());
            return Err(rejection);
        };

        self.slot_artworks.insert(slot, artwork.clone());
        self.selected_slots.insert(slot);
        self.selected_artworks.insert(artwork);
        info!(%slot, %participant, "artwork assigned");
        Ok(slot)
    }

    /// Toggle one of the acting participant's slots. Toggling a slot off
    /// also unassigns its artwork. Clicking another participant's slot is
    /// rejected with an access-denied toast.
    pub fn toggle_slot(&mut self, slot: SlotId) -> Result<(), ChangeRejected> {
        let participant = self.editing_participant()?;
        let Some(owner) = self.slot_owners.get(&slot) else {
            debug!(%slot, "ignoring click on a slot outside the allocation");
            return Ok(());
        };
        if *owner != participant {
            let rejection = ChangeRejected::NotSlotOwner { slot };
            warn!(%slot, %owner, "slot belongs to another participant");
            self.notifier.notify(rejection.notification());
            return Err(rejection);
        }

        if self.selected_slots.contains(&slot) {
            if let Some(artwork) = self.slot_artworks.remove(&slot) {
                self.selected_artworks.remove(&artwork);
            }
            self.selected_slots.remove(&slot);
            debug!(%slot, "slot deselected");
        } else {
            self.selected_slots.insert(slot);
            debug!(%slot, "slot selected");
        }
        Ok(())
    }

    /// Remove the artwork from one of the acting participant's slots. The
    /// slot stays selected. Unlike [`Self::toggle_slot`] a denied clear is
    /// silent; the UI never toasted here.
    pub fn clear_slot(&mut self, slot: SlotId) -> Result<(), ChangeRejected> {
        let participant = self.editing_participant()?;
        let Some(owner) = self.slot_owners.get(&slot) else {
            debug!(%slot, "ignoring clear on a slot outside the allocation");
            return Ok(());
        };
        if *owner != participant {
            debug!(%slot, "clear denied on another participant's slot");
            return Err(ChangeRejected::NotSlotOwner { slot });
        }

        if let Some(artwork) = self.slot_artworks.remove(&slot) {
            self.selected_artworks.remove(&artwork);
            debug!(%slot, %artwork, "slot cleared");
        }
        Ok(())
    }

    /// Populate the builder from a stored exhibit. The spectator load modes
    /// force read-only; `Edit` reopens the exhibit in the owner view. The
    /// stored maps are installed verbatim, with the selected-slot and
    /// selected-artwork sets derived from the artwork map.
    pub fn load_record(&mut self, record: ExhibitRecord, mode: LoadMode) {
        self.view_mode = match mode {
            LoadMode::Edit => ViewMode::Owner,
            LoadMode::Review => ViewMode::Review,
            LoadMode::Monitoring => ViewMode::Monitoring,
            LoadMode::Preview => ViewMode::Preview,
        };
        self.read_only = !matches!(mode, LoadMode::Edit);

        self.title = record.title;
        self.category = record.category;
        // upstream stores the style capitalized, the form works lowercased
        self.artwork_style = record.artwork_style.to_lowercase();
        self.kind = record.exhibit_type;
        self.start_date = record.start_date;
        self.end_date = record.end_date;
        self.description = record.description;
        self.selected_environment = record.selected_environment;
        self.banner_image = record.banner_image;
        self.banner_file = None;
        self.collaborators = record.collaborators;
        self.pending_removal = None;
        self.slot_owners = record.slot_owner_map;
        self.selected_artworks = record.slot_artwork_map.values().cloned().collect();
        self.selected_slots = record.slot_artwork_map.keys().copied().collect();
        self.slot_artworks = record.slot_artwork_map;
        info!(?mode, "exhibit record loaded");
    }

    /// Snapshot the current state as a stored exhibit.
    #[must_use]
    pub fn record(&self, status: ExhibitStatus) -> ExhibitRecord {
        ExhibitRecord {
            title: self.title.clone(),
            category: self.category.clone(),
            artwork_style: self.artwork_style.clone(),
            exhibit_type: self.kind,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description.clone(),
            selected_environment: self.selected_environment,
            banner_image: self.banner_image.clone(),
            collaborators: self.collaborators.clone(),
            slot_owner_map: self.slot_owners.clone(),
            slot_artwork_map: self.slot_artworks.clone(),
            status,
        }
    }

    /// Walk through the flow as one of the collaborators. Ids outside the
    /// roster are ignored.
    pub fn view_as_collaborator(&mut self, id: &ParticipantId) {
        if self
            .collaborators
            .iter()
            .any(|collaborator| collaborator.id == *id)
        {
            self.view_mode = ViewMode::Collaborator(id.clone());
            debug!(collaborator = %id, "switched to collaborator view");
        } else {
            debug!(collaborator = %id, "cannot view as unknown collaborator");
        }
    }

    pub fn view_as_owner(&mut self) {
        self.view_mode = ViewMode::Owner;
    }

    // form field setters

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_artwork_style(&mut self, style: impl Into<String>) {
        self.artwork_style = style.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    /// Stage a banner upload. Selecting an environment drops it again in
    /// favor of the room's image.
    pub fn set_banner_file(&mut self, path: PathBuf) {
        self.banner_file = Some(path);
    }

    // derived views

    /// Style token for a slot under the current allocation and view.
    #[must_use]
    pub fn slot_style(&self, slot: SlotId) -> &'static str {
        slot_style(
            slot,
            self.kind,
            &self.slot_owners,
            &self.session,
            &self.collaborators,
        )
    }

    /// Label for a slot's owner; an unallocated slot is labelled as the
    /// session user's.
    #[must_use]
    pub fn slot_label(&self, slot: SlotId) -> String {
        let owner = self
            .slot_owners
            .get(&slot)
            .unwrap_or_else(|| self.session.user_id());
        owner_label(owner, &self.session, &self.collaborators)
    }

    /// Whether the current viewer may mutate the slot.
    #[must_use]
    pub fn can_interact(&self, slot: SlotId) -> bool {
        can_interact_with_slot(
            slot,
            self.read_only,
            &self.slot_owners,
            &self.view_mode,
            &self.session,
        )
    }

    #[must_use]
    pub fn submission_status_for(&self, participant: &ParticipantId) -> SubmissionStatus {
        submission_status(participant, &self.slot_owners, &self.slot_artworks)
    }

    /// Fill state of every participant, owner first, then the roster in
    /// order. Powers the collaborator progress panel.
    #[must_use]
    pub fn submission_overview(&self) -> Vec<(Participant, SubmissionStatus)> {
        std::iter::once(self.session.user())
            .chain(self.collaborators.iter())
            .map(|participant| {
                (
                    participant.clone(),
                    submission_status(&participant.id, &self.slot_owners, &self.slot_artworks),
                )
            })
            .collect()
    }

    // accessors

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn current_environment(&self) -> Option<&Environment> {
        self.selected_environment.and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn artwork_style(&self) -> &str {
        &self.artwork_style
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    #[must_use]
    pub fn kind(&self) -> ExhibitKind {
        self.kind
    }

    #[must_use]
    pub fn selected_environment(&self) -> Option<EnvironmentId> {
        self.selected_environment
    }

    #[must_use]
    pub fn banner_image(&self) -> Option<&str> {
        self.banner_image.as_deref()
    }

    #[must_use]
    pub fn banner_file(&self) -> Option<&Path> {
        self.banner_file.as_deref()
    }

    #[must_use]
    pub fn collaborators(&self) -> &[Participant] {
        &self.collaborators
    }

    #[must_use]
    pub fn pending_removal(&self) -> Option<&ParticipantId> {
        self.pending_removal.as_ref()
    }

    #[must_use]
    pub fn slot_owners(&self) -> &SlotOwnerMap {
        &self.slot_owners
    }

    #[must_use]
    pub fn slot_artworks(&self) -> &SlotArtworkMap {
        &self.slot_artworks
    }

    #[must_use]
    pub fn selected_slots(&self) -> &BTreeSet<SlotId> {
        &self.selected_slots
    }

    #[must_use]
    pub fn selected_artworks(&self) -> &BTreeSet<ArtworkId> {
        &self.selected_artworks
    }

    #[must_use]
    pub fn view_mode(&self) -> &ViewMode {
        &self.view_mode
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    // internals

    /// The participant mutating slots in the current view, or `ReadOnly`
    /// when the view does not allow mutations at all.
    fn editing_participant(&self) -> Result<ParticipantId, ChangeRejected> {
        if self.read_only {
            return Err(ChangeRejected::ReadOnly);
        }
        self.view_mode
            .interacting_participant(&self.session)
            .cloned()
            .ok_or(ChangeRejected::ReadOnly)
    }

    fn first_unfilled_slot(&self, participant: &ParticipantId) -> Option<SlotId> {
        self.slot_owners
            .iter()
            .find(|(slot, owner)| *owner == participant && !self.slot_artworks.contains_key(*slot))
            .map(|(slot, _)| *slot)
    }

    /// Rebuild the slot partition and drop every slot/artwork selection.
    /// Without a resolvable environment the existing state stays untouched.
    fn reallocate(&mut self) {
        let Some(owners) = try_distribute(
            &self.catalog,
            self.selected_environment,
            &self.session,
            self.kind,
            &self.collaborators,
        ) else {
            return;
        };
        self.selected_slots.clear();
        self.selected_artworks.clear();
        self.slot_artworks.clear();
        self.slot_owners = owners;
    }
}
