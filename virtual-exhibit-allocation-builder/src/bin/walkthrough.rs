//! Scripted tour of the exhibit-creation flow on the built-in catalog.
//!
//! Run with `RUST_LOG=debug` to see every handler trace; rejected changes
//! surface through the [`TracingNotifier`] as warn/error events.

use anyhow::Context as _;
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;
use virtual_exhibit_allocation_builder::{ExhibitBuilder, ExhibitStatus, TracingNotifier};
use virtual_exhibit_allocation_config::Settings;
use virtual_exhibit_allocation_engine::{
    ArtworkId, Catalog, EnvironmentId, ExhibitKind, Participant, ParticipantId, Session, SlotId,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("loading settings")?;
    let catalog = match &settings.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::builtin().clone(),
    };

    let session = Session::new(Participant::new("100", "Mara"));
    let mut exhibit = ExhibitBuilder::with_notifier(
        session,
        catalog,
        settings.limits.clone(),
        Box::new(TracingNotifier),
    );

    exhibit.set_title("Urban Dreamscape");
    exhibit.set_category("Urban");
    exhibit.set_artwork_style("abstract");
    exhibit.set_description("A collaborative exploration of city life.");
    exhibit.set_start_date(Some("2026-09-01".parse::<NaiveDate>()?));
    exhibit.set_end_date(Some("2026-09-15".parse::<NaiveDate>()?));

    exhibit.set_exhibit_kind(ExhibitKind::Collab);
    for (id, name) in [
        ("201", "Jane"),
        ("202", "Sam"),
        ("203", "Priya"),
        ("204", "Leo"),
        ("205", "Noor"),
    ] {
        exhibit
            .add_collaborator(Participant::new(id, name))
            .context("filling the roster")?;
    }

    // six participants cannot share the four-slot room
    let _ = exhibit.select_environment(EnvironmentId(1));

    // trim the roster down to two collaborators, confirming each removal
    exhibit.request_remove_collaborator(&ParticipantId::from("204"));
    exhibit.cancel_remove_collaborator();
    for id in ["203", "204", "205"] {
        exhibit.request_remove_collaborator(&ParticipantId::from(id));
        exhibit.confirm_remove_collaborator();
    }

    exhibit
        .select_environment(EnvironmentId(3))
        .context("the ten-slot room fits three participants")?;

    exhibit
        .select_artwork(ArtworkId::from("sunrise-over-glass"))
        .context("assigning the owner's first artwork")?;
    exhibit
        .select_artwork(ArtworkId::from("concrete-bloom"))
        .context("assigning the owner's second artwork")?;

    exhibit.view_as_collaborator(&ParticipantId::from("201"));
    exhibit
        .select_artwork(ArtworkId::from("night-commute"))
        .context("assigning Jane's artwork")?;
    exhibit.view_as_owner();

    // clicking a collaborator's slot as the owner is denied with a toast
    let _ = exhibit.toggle_slot(SlotId(5));

    println!("slot  owner       style                      artwork");
    for (slot, _) in exhibit.slot_owners() {
        let artwork = exhibit
            .slot_artworks()
            .get(slot)
            .map_or("-", ArtworkId::as_str);
        println!(
            "{:>4}  {:<10}  {:<25}  {artwork}",
            slot,
            exhibit.slot_label(*slot),
            exhibit.slot_style(*slot),
        );
    }

    println!();
    for (participant, status) in exhibit.submission_overview() {
        println!(
            "{:<10}  {}/{} slots filled ({}%)",
            participant.first_name, status.filled, status.total, status.percentage,
        );
    }

    let record = exhibit.record(ExhibitStatus::Pending);
    println!();
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
