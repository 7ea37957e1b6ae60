//! Tests for state allocation and transition table generation.

use inv_core::{CorruptReason, GenerationError, allocate, build_table, reservation_count};
use inv_model::{
    Button, ButtonId, Driver, GroupKind, GroupReference, Item, ItemId, STATE_BUDGET, StateValue,
    SyncMode,
};

fn v(value: u8) -> StateValue {
    StateValue::new(value)
}

fn toggle(index: usize, sync: SyncMode) -> Item {
    Item::new(ItemId::new(index), format!("T{index}"), sync)
}

fn values(set: &[StateValue]) -> Vec<u8> {
    set.iter().map(StateValue::get).collect()
}

// ============================================================================
// Reservation
// ============================================================================

#[test]
fn three_auto_unsaved_toggles_reserve_two_values_each() {
    let items: Vec<Item> = (0..3).map(|i| toggle(i, SyncMode::Auto)).collect();

    let allocation = allocate(&items, &[]).unwrap();
    let table = build_table(&items, &allocation);

    assert_eq!(allocation.used, 6);
    for (index, spec) in table.iter().enumerate() {
        let on = v(1 + 2 * index as u8);
        let off = v(2 + 2 * index as u8);
        assert_eq!(spec.enable_conditions.iter().copied().collect::<Vec<_>>(), vec![on]);
        assert_eq!(spec.disable_conditions.iter().copied().collect::<Vec<_>>(), vec![off]);
        assert_eq!(spec.driver, Driver::SharedState);
        assert!(!spec.local_only_enable);
    }
}

#[test]
fn off_toggle_enable_group_broadcasts_one_value() {
    let items = vec![
        toggle(0, SyncMode::Off).with_enable_group(vec![GroupReference::enable(ItemId::new(1))]),
        toggle(1, SyncMode::Off),
    ];

    let allocation = allocate(&items, &[]).unwrap();
    let table = build_table(&items, &allocation);

    assert_eq!(allocation.used, 1);
    assert_eq!(allocation.slots[0].enable_trigger, Some(v(1)));
    assert_eq!(values(&allocation.sets[0].enable_values), vec![1]);
    assert_eq!(values(&allocation.sets[1].enable_values), vec![1]);
    assert!(allocation.sets[1].disable_values.is_empty());
    assert!(table[1].local_only_enable);
    assert!(!table[1].local_only_disable);
    assert_eq!(table[1].driver, Driver::SharedState);
}

#[test]
fn off_toggle_without_groups_reserves_nothing() {
    let items = vec![toggle(0, SyncMode::Off), toggle(1, SyncMode::Manual)];

    let allocation = allocate(&items, &[]).unwrap();
    let table = build_table(&items, &allocation);

    assert!(allocation.slots[0].reserved().is_empty());
    assert!(table[0].enable_conditions.is_empty());
    assert!(table[0].disable_conditions.is_empty());
    assert_eq!(table[0].driver, Driver::DirectParameter);
    // The manual toggle still starts at 1.
    assert_eq!(allocation.slots[1].sync_on, Some(v(1)));
}

#[test]
fn manual_toggle_reserves_exactly_two_with_groups() {
    let items = vec![
        toggle(0, SyncMode::Manual)
            .with_enable_group(vec![GroupReference::disable(ItemId::new(1))])
            .with_disable_group(vec![GroupReference::enable(ItemId::new(1))]),
        toggle(1, SyncMode::Off),
    ];

    let allocation = allocate(&items, &[]).unwrap();

    assert_eq!(allocation.used, 2);
    assert_eq!(allocation.slots[0].reserved(), vec![v(1), v(2)]);
    assert_eq!(allocation.slots[0].enable_trigger, Some(v(1)));
    assert_eq!(allocation.slots[0].disable_trigger, Some(v(2)));
    assert_eq!(values(&allocation.sets[1].disable_values), vec![1]);
    assert_eq!(values(&allocation.sets[1].enable_values), vec![2]);
}

#[test]
fn auto_unsaved_with_groups_adds_trigger_values() {
    let items = vec![
        toggle(0, SyncMode::Auto)
            .with_enable_group(vec![GroupReference::disable(ItemId::new(1))])
            .with_disable_group(vec![GroupReference::disable(ItemId::new(1))]),
        toggle(1, SyncMode::Manual),
    ];

    let allocation = allocate(&items, &[]).unwrap();

    assert_eq!(allocation.used, 6);
    assert_eq!(allocation.slots[0].sync_on, Some(v(1)));
    assert_eq!(allocation.slots[0].sync_off, Some(v(2)));
    assert_eq!(allocation.slots[0].enable_trigger, Some(v(3)));
    assert_eq!(allocation.slots[0].disable_trigger, Some(v(4)));
    assert_eq!(values(&allocation.sets[0].enable_values), vec![1, 3]);
    assert_eq!(values(&allocation.sets[0].disable_values), vec![2, 4]);
    // Target keeps its own values first, group values after.
    assert_eq!(values(&allocation.sets[1].disable_values), vec![6, 3, 4]);
    assert_eq!(values(&allocation.sets[1].enable_values), vec![5]);
}

#[test]
fn auto_saved_toggles_use_the_saved_parameter() {
    let items = vec![
        toggle(0, SyncMode::Auto).saved(true).initial(true),
        toggle(1, SyncMode::Auto)
            .saved(true)
            .with_disable_group(vec![GroupReference::disable(ItemId::new(0))]),
    ];

    let allocation = allocate(&items, &[]).unwrap();
    let table = build_table(&items, &allocation);

    assert_eq!(allocation.used, 1);
    assert!(allocation.slots[0].reserved().is_empty());
    assert_eq!(allocation.slots[1].disable_trigger, Some(v(1)));
    assert_eq!(table[1].driver, Driver::SharedState);
    assert!(!table[1].local_only_disable);
    // The first toggle is now a group target, so it leaves the saved-only path.
    assert_eq!(values(&allocation.sets[0].disable_values), vec![1]);
    assert_eq!(table[0].driver, Driver::SharedState);
    assert!(table[0].initial);

    let lone = vec![toggle(0, SyncMode::Auto).saved(true)];
    let lone_allocation = allocate(&lone, &[]).unwrap();
    let lone_table = build_table(&lone, &lone_allocation);
    assert_eq!(lone_table[0].driver, Driver::SavedParameter);
    assert!(lone_table[0].enable_conditions.is_empty());
}

#[test]
fn buttons_follow_toggles_in_declaration_order() {
    let items = vec![toggle(0, SyncMode::Manual), toggle(1, SyncMode::Off)];
    let buttons = vec![
        Button::new(ButtonId::new(0), "Reset")
            .with_group(vec![GroupReference::disable(ItemId::new(0))]),
        Button::new(ButtonId::new(1), "Equip")
            .with_group(vec![GroupReference::enable(ItemId::new(1))]),
        Button::new(ButtonId::new(2), "Noop"),
    ];

    let allocation = allocate(&items, &buttons).unwrap();

    assert_eq!(allocation.used, 5);
    assert_eq!(allocation.button_value(ButtonId::new(0)), Some(v(3)));
    assert_eq!(allocation.button_value(ButtonId::new(1)), Some(v(4)));
    assert_eq!(allocation.button_value(ButtonId::new(2)), Some(v(5)));
    assert_eq!(values(&allocation.sets[0].disable_values), vec![2, 3]);
    assert_eq!(values(&allocation.sets[1].enable_values), vec![4]);
}

#[test]
fn shared_group_values_are_deduplicated() {
    let items = vec![
        toggle(0, SyncMode::Manual).with_enable_group(vec![
            GroupReference::enable(ItemId::new(1)),
            GroupReference::enable(ItemId::new(1)),
        ]),
        toggle(1, SyncMode::Off),
    ];

    let allocation = allocate(&items, &[]).unwrap();

    assert_eq!(values(&allocation.sets[1].enable_values), vec![1]);
}

// ============================================================================
// Budget
// ============================================================================

#[test]
fn budget_of_exactly_255_succeeds() {
    let items: Vec<Item> = (0..127).map(|i| toggle(i, SyncMode::Manual)).collect();
    let buttons = vec![Button::new(ButtonId::new(0), "Last")];
    assert_eq!(reservation_count(&items, &buttons), STATE_BUDGET);

    let allocation = allocate(&items, &buttons).unwrap();

    assert_eq!(allocation.used, 255);
    assert_eq!(allocation.button_value(ButtonId::new(0)), Some(v(255)));
}

#[test]
fn budget_of_256_is_rejected() {
    let items: Vec<Item> = (0..128).map(|i| toggle(i, SyncMode::Manual)).collect();

    let error = allocate(&items, &[]).unwrap_err();

    match error {
        GenerationError::BudgetExceeded { used, available } => {
            assert_eq!(used, 256);
            assert_eq!(available, 255);
        }
        other => panic!("expected BudgetExceeded, got {other:?}"),
    }
}

// ============================================================================
// Corrupt references
// ============================================================================

#[test]
fn missing_target_is_corrupt() {
    let items = vec![
        toggle(0, SyncMode::Off),
        toggle(1, SyncMode::Manual).with_disable_group(vec![
            GroupReference::enable(ItemId::new(0)),
            GroupReference::enable(ItemId::new(5)),
        ]),
    ];

    let error = allocate(&items, &[]).unwrap_err();

    match error {
        GenerationError::CorruptGroupReference {
            item,
            group,
            slot,
            reason,
        } => {
            assert_eq!(item, "T1");
            assert_eq!(group, GroupKind::Disable);
            assert_eq!(slot, 1);
            assert_eq!(
                reason,
                CorruptReason::MissingTarget {
                    target: "#5".to_string()
                }
            );
        }
        other => panic!("expected CorruptGroupReference, got {other:?}"),
    }
}

#[test]
fn self_reference_is_corrupt() {
    let items = vec![toggle(0, SyncMode::Auto)
        .with_enable_group(vec![GroupReference::disable(ItemId::new(0))])];

    let error = allocate(&items, &[]).unwrap_err();

    assert!(matches!(
        error,
        GenerationError::CorruptGroupReference {
            reason: CorruptReason::SelfReference,
            slot: 0,
            group: GroupKind::Enable,
            ..
        }
    ));
}

#[test]
fn button_with_missing_target_is_corrupt() {
    let items = vec![toggle(0, SyncMode::Off)];
    let buttons = vec![Button::new(ButtonId::new(0), "Drop")
        .with_group(vec![GroupReference::enable(ItemId::new(1))])];

    let error = allocate(&items, &buttons).unwrap_err();

    assert!(error.to_string().contains("\"Drop\""));
    assert!(matches!(
        error,
        GenerationError::CorruptGroupReference {
            group: GroupKind::Button,
            ..
        }
    ));
}

#[test]
fn corrupt_reference_wins_over_budget() {
    let mut items: Vec<Item> = (0..200).map(|i| toggle(i, SyncMode::Manual)).collect();
    items[0].enable_group = vec![GroupReference::enable(ItemId::new(999))];

    let error = allocate(&items, &[]).unwrap_err();

    assert!(matches!(error, GenerationError::CorruptGroupReference { .. }));
}
