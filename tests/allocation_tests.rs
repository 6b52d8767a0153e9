//! Integration tests for the button allocator and configuration emitter.
//!
//! These tests verify:
//! - The full allocate -> emit -> reload round trip through the JSON schema
//! - The allocator's invariants under arbitrary inputs (property tests)

use arkdeck::models::{Card, LayoutConfig, QueueOrder, StreamDeckConfig};
use arkdeck::services::emitter;
use arkdeck::ButtonAllocator;
use proptest::prelude::*;

fn card(code: &str, front: Option<&str>, back: Option<&str>) -> Card {
    Card {
        code: Some(code.to_string()),
        name: None,
        imagesrc: front.map(String::from),
        backimagesrc: back.map(String::from),
    }
}

#[test]
fn test_allocate_then_emit_round_trip() {
    let cards = vec![
        card("01013", Some("/bundles/cards/01013.jpg"), None),
        card("01012", None, Some("/bundles/cards/01012b.png")),
        card("01011", Some("/bundles/cards/01011.jpg"), None),
    ];

    let allocator = ButtonAllocator::new(LayoutConfig::default());
    let allocation = allocator.allocate(&cards, &[12, 13], &[5, 6, 7, 8, 9]);

    let bytes = emitter::emit(&allocation.config).unwrap();
    let reloaded: StreamDeckConfig = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        reloaded.streamdeck_info.main_folder_button_id_list,
        vec![12, 13, 5, 6, 7, 8, 9]
    );
    assert_eq!(reloaded.folder_list.len(), 1);
    assert_eq!(reloaded.folder_list[0].main_folder_button_id, 12);
    assert_eq!(reloaded.entry_count(), 3);

    // Front-to-back consumption preserves the caller's order.
    let texts: Vec<&str> = reloaded.folder_list[0]
        .folder_contents
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(texts, vec!["01013", "01012", "01011"]);
}

#[test]
fn test_legacy_order_inverts_consumption() {
    let cards = vec![
        card("01013", Some("/a.jpg"), None),
        card("01012", Some("/b.jpg"), None),
    ];
    let layout = LayoutConfig {
        queue_order: QueueOrder::TailFirst,
        ..LayoutConfig::default()
    };
    let allocation = ButtonAllocator::new(layout).allocate(&cards, &[12], &[]);

    let texts: Vec<&str> = allocation.config.folder_list[0]
        .folder_contents
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(texts, vec!["01012", "01013"]);
}

fn arb_card() -> impl Strategy<Value = Card> {
    (
        proptest::option::of("[0-9]{5}"),
        proptest::option::of("/bundles/cards/[a-z0-9]{1,8}\\.png"),
        proptest::option::of("/bundles/cards/[a-z0-9]{1,8}\\.png"),
    )
        .prop_map(|(code, front, back)| Card {
            code,
            name: None,
            imagesrc: front,
            backimagesrc: back,
        })
}

proptest! {
    #[test]
    fn prop_allocator_invariants(
        cards in proptest::collection::vec(arb_card(), 0..60),
        primary in proptest::collection::vec(0u32..15, 1..4),
        secondary in proptest::collection::vec(0u32..15, 0..4),
        slots in 1u32..20,
        tail_first in any::<bool>(),
    ) {
        let reserved = slots / 2; // always a valid slot index
        let layout = LayoutConfig {
            slots_per_folder: slots,
            reserved_slot_index: reserved,
            queue_order: if tail_first { QueueOrder::TailFirst } else { QueueOrder::FrontToBack },
            ..LayoutConfig::default()
        };
        let allocation = ButtonAllocator::new(layout).allocate(&cards, &primary, &secondary);
        let config = &allocation.config;

        // Output never exceeds the global slot budget.
        prop_assert!(config.entry_count() <= primary.len() * (slots as usize - 1));

        // The reserved slot is never assigned.
        for folder in &config.folder_list {
            for entry in &folder.folder_contents {
                prop_assert_ne!(entry.button_id, reserved);
                prop_assert!(entry.button_id < slots);
                // Every emitted entry came from a placeable card.
                prop_assert!(!entry.text.is_empty());
                prop_assert!(entry.image.file_name().is_some());
            }
            // Empty folders never appear.
            prop_assert!(!folder.folder_contents.is_empty());
            // Only primary folders are populated.
            prop_assert!(primary.contains(&folder.main_folder_button_id));
        }

        // The combined menu list is primary + secondary, not deduplicated.
        prop_assert_eq!(
            config.streamdeck_info.main_folder_button_id_list.len(),
            primary.len() + secondary.len()
        );

        // Every queue element is accounted for exactly once.
        prop_assert_eq!(
            allocation.placed + allocation.skipped + allocation.unplaced,
            cards.len()
        );
    }
}
