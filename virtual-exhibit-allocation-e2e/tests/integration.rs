// cargo test -p virtual-exhibit-allocation-e2e --test integration

use tracing::info;
use virtual_exhibit_allocation_builder::{ExhibitStatus, LoadMode};
use virtual_exhibit_allocation_e2e::{
    init_test_logging, recording_gallery_builder, write_gallery_catalog,
};
use virtual_exhibit_allocation_engine::{
    ArtworkId, Catalog, EnvironmentId, ExhibitKind, Participant, ParticipantId, SlotId,
};

#[test]
fn a_bumpy_creation_session_recovers_and_snapshots() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = write_gallery_catalog(dir.path()).unwrap();
    let catalog = Catalog::from_path(&catalog_path).unwrap();
    let (mut exhibit, recorder) = recording_gallery_builder(catalog, 4);

    info!("filling the roster up to and past the limit");
    exhibit.set_exhibit_kind(ExhibitKind::Collab);
    for (id, name) in [("201", "Jane"), ("202", "Sam"), ("203", "Priya"), ("204", "Leo")] {
        exhibit.add_collaborator(Participant::new(id, name)).unwrap();
    }
    assert!(exhibit.add_collaborator(Participant::new("205", "Noor")).is_err());

    info!("the atrium is too small for five participants");
    assert!(exhibit.select_environment(EnvironmentId(1)).is_err());
    assert_eq!(exhibit.selected_environment(), None);

    info!("the long hall fits, with the remainder front-loaded");
    exhibit.select_environment(EnvironmentId(2)).unwrap();
    let shares: Vec<u32> = std::iter::once(exhibit.session().user())
        .chain(exhibit.collaborators().iter())
        .map(|participant| {
            exhibit
                .slot_owners()
                .values()
                .filter(|owner| **owner == participant.id)
                .count() as u32
        })
        .collect();
    assert_eq!(shares, vec![2, 2, 1, 1, 1]);

    info!("dropping Leo reshuffles the partition");
    exhibit.request_remove_collaborator(&ParticipantId::from("204"));
    exhibit.confirm_remove_collaborator();
    assert_eq!(exhibit.collaborators().len(), 3);
    assert_eq!(
        exhibit.slot_owners().get(&SlotId(7)),
        Some(&ParticipantId::from("203"))
    );

    info!("the owner fills both of their slots, then overreaches");
    assert_eq!(exhibit.select_artwork(ArtworkId::from("sunrise")), Ok(SlotId(1)));
    assert!(exhibit.select_artwork(ArtworkId::from("sunrise")).is_err());
    assert_eq!(exhibit.select_artwork(ArtworkId::from("harbor")), Ok(SlotId(2)));
    assert!(exhibit.select_artwork(ArtworkId::from("overflow")).is_err());

    info!("Jane contributes through her own view");
    exhibit.view_as_collaborator(&ParticipantId::from("201"));
    assert_eq!(exhibit.select_artwork(ArtworkId::from("night-commute")), Ok(SlotId(3)));
    exhibit.view_as_owner();

    assert_eq!(
        recorder.titles(),
        vec![
            "Maximum collaborators reached",
            "Not enough slots to assign for all collaborators and the owner.",
            "Artwork already selected",
            "No available slots",
        ]
    );

    let overview = exhibit.submission_overview();
    assert_eq!(overview[0].1.percentage, 100);
    assert_eq!(overview[1].1.percentage, 50);
}

#[test]
fn a_snapshot_survives_the_wire_and_reopens_for_monitoring() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = write_gallery_catalog(dir.path()).unwrap();
    let catalog = Catalog::from_path(&catalog_path).unwrap();

    let (mut exhibit, _recorder) = recording_gallery_builder(catalog.clone(), 5);
    exhibit.set_title("Harbor Lights");
    exhibit.set_artwork_style("impressionist");
    exhibit.set_exhibit_kind(ExhibitKind::Collab);
    exhibit.add_collaborator(Participant::new("201", "Jane")).unwrap();
    exhibit.select_environment(EnvironmentId(1)).unwrap();
    exhibit.select_artwork(ArtworkId::from("pier-at-dawn")).unwrap();

    let wire = serde_json::to_string(&exhibit.record(ExhibitStatus::Monitoring)).unwrap();
    info!(%wire, "exhibit snapshot serialized");
    let record = serde_json::from_str(&wire).unwrap();

    let (mut reopened, recorder) = recording_gallery_builder(catalog, 5);
    reopened.load_record(record, LoadMode::Monitoring);

    assert!(reopened.is_read_only());
    assert_eq!(reopened.title(), "Harbor Lights");
    assert_eq!(reopened.slot_owners(), exhibit.slot_owners());
    assert_eq!(reopened.slot_artworks(), exhibit.slot_artworks());
    assert!(reopened.toggle_slot(SlotId(1)).is_err());
    assert!(recorder.titles().is_empty());

    let overview = reopened.submission_overview();
    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].1.filled, 1);
    assert_eq!(overview[0].1.total, 2);
}
