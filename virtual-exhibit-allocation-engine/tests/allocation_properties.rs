//! Property tests for the slot partition and the progress derivation.

use proptest::prelude::*;

use virtual_exhibit_allocation_engine::{
    distribute_slots, submission_status, ArtworkId, Environment, EnvironmentId, ExhibitKind,
    Participant, ParticipantId, SlotArtworkMap, SlotCapacity, SlotId, SlotOwnerMap,
};

fn environment(slots: u32) -> Environment {
    Environment {
        id: EnvironmentId(1),
        image: "room.png".to_owned(),
        slots: SlotCapacity::new(slots).unwrap(),
    }
}

fn roster(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|index| Participant::new(format!("c{index}"), format!("Collaborator {index}")))
        .collect()
}

proptest! {
    #[test]
    fn collab_partition_covers_every_slot_exactly_once(
        capacity in 1_u32..=60,
        collab_count in 0_usize..=8,
    ) {
        let owner = ParticipantId::from("owner");
        let collaborators = roster(collab_count);
        let owners = distribute_slots(
            &environment(capacity),
            &owner,
            ExhibitKind::Collab,
            &collaborators,
        );

        let keys: Vec<u32> = owners.keys().map(|slot| slot.0).collect();
        let expected: Vec<u32> = (1..=capacity).collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn shares_differ_by_at_most_one_and_the_remainder_is_front_loaded(
        capacity in 1_u32..=60,
        collab_count in 0_usize..=8,
    ) {
        let owner = ParticipantId::from("owner");
        let collaborators = roster(collab_count);
        let owners = distribute_slots(
            &environment(capacity),
            &owner,
            ExhibitKind::Collab,
            &collaborators,
        );

        let ids: Vec<&ParticipantId> = std::iter::once(&owner)
            .chain(collaborators.iter().map(|collaborator| &collaborator.id))
            .collect();
        let count = ids.len();
        let base = capacity as usize / count;
        let remainder = capacity as usize % count;

        for (position, id) in ids.into_iter().enumerate() {
            let slots: Vec<u32> = owners
                .iter()
                .filter(|(_, slot_owner)| *slot_owner == id)
                .map(|(slot, _)| slot.0)
                .collect();

            let expected = base + usize::from(position < remainder);
            prop_assert_eq!(slots.len(), expected);

            // each share is one contiguous ascending run
            if let (Some(first), Some(last)) = (slots.first(), slots.last()) {
                prop_assert_eq!(last - first + 1, slots.len() as u32);
            }
        }
    }

    #[test]
    fn solo_partition_belongs_entirely_to_the_owner(
        capacity in 1_u32..=60,
        collab_count in 0_usize..=8,
    ) {
        let owner = ParticipantId::from("owner");
        let owners = distribute_slots(
            &environment(capacity),
            &owner,
            ExhibitKind::Solo,
            &roster(collab_count),
        );

        prop_assert_eq!(owners.len() as u32, capacity);
        prop_assert!(owners.values().all(|slot_owner| *slot_owner == owner));
    }

    #[test]
    fn submission_percentage_is_always_a_valid_percent(
        (total, filled) in (0_u32..=30).prop_flat_map(|total| (Just(total), 0..=total)),
    ) {
        let participant = ParticipantId::from("p");
        let mut owners = SlotOwnerMap::new();
        let mut artworks = SlotArtworkMap::new();
        for index in 1..=total {
            owners.insert(SlotId(index), participant.clone());
        }
        for index in 1..=filled {
            artworks.insert(SlotId(index), ArtworkId::new(format!("a{index}")));
        }

        let status = submission_status(&participant, &owners, &artworks);
        prop_assert!(status.percentage <= 100);
        prop_assert_eq!(status.total, total);
        prop_assert_eq!(status.filled, filled);
    }
}
