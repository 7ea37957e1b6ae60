//! Tests for flattening preset trees.

use inv_core::{CorruptReason, GenerationError, flatten};
use inv_model::{
    ButtonItem, GroupKind, GroupReference, ItemId, ItemRef, Page, PageItem, Preset, Reaction,
    SyncMode, ToggleItem,
};

fn wardrobe() -> Preset {
    Preset::new("Wardrobe")
        .with_page(
            Page::new("Root")
                .with_item(PageItem::toggle(
                    "Hat",
                    ToggleItem::new(SyncMode::Manual)
                        .on_enable(ItemRef::new(1, 0), Reaction::Disable),
                ))
                .with_item(PageItem::button(
                    "Strip",
                    ButtonItem::default()
                        .on_press(ItemRef::new(0, 0), Reaction::Disable)
                        .on_press(ItemRef::new(1, 0), Reaction::Disable),
                ))
                .with_item(PageItem::subpage("More", 1)),
        )
        .with_page(
            Page::new("More")
                .with_item(PageItem::toggle(
                    "Hood",
                    ToggleItem::new(SyncMode::Auto).saved(true).initial(true),
                ))
                .with_item(PageItem::control("Gesture")),
        )
}

#[test]
fn numbers_toggles_and_buttons_separately() {
    let snapshot = flatten(&wardrobe()).unwrap();

    let names: Vec<&str> = snapshot.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Hat", "Hood"]);
    assert_eq!(snapshot.items[1].id, ItemId::new(1));
    assert!(snapshot.items[1].saved);
    assert!(snapshot.items[1].initial);
    assert_eq!(snapshot.buttons.len(), 1);
    assert_eq!(snapshot.buttons[0].name, "Strip");
    assert_eq!(
        snapshot.item_locations,
        vec![ItemRef::new(0, 0), ItemRef::new(1, 0)]
    );
    assert_eq!(snapshot.button_locations, vec![ItemRef::new(0, 1)]);
}

#[test]
fn resolves_group_members_to_item_ids() {
    let snapshot = flatten(&wardrobe()).unwrap();

    assert_eq!(
        snapshot.items[0].enable_group,
        vec![GroupReference::disable(ItemId::new(1))]
    );
    assert_eq!(
        snapshot.buttons[0].button_group,
        vec![
            GroupReference::disable(ItemId::new(0)),
            GroupReference::disable(ItemId::new(1)),
        ]
    );
}

#[test]
fn reference_to_missing_position_is_corrupt() {
    let preset = Preset::new("Broken").with_page(Page::new("Root").with_item(PageItem::toggle(
        "Hat",
        ToggleItem::new(SyncMode::Off).on_disable(ItemRef::new(3, 0), Reaction::Enable),
    )));

    let error = flatten(&preset).unwrap_err();

    match error {
        GenerationError::CorruptGroupReference {
            item,
            group,
            slot,
            reason,
        } => {
            assert_eq!(item, "Hat");
            assert_eq!(group, GroupKind::Disable);
            assert_eq!(slot, 0);
            assert_eq!(
                reason,
                CorruptReason::MissingTarget {
                    target: "page 3 item 0".to_string()
                }
            );
        }
        other => panic!("expected CorruptGroupReference, got {other:?}"),
    }
}

#[test]
fn reference_to_non_toggle_is_corrupt() {
    let preset = Preset::new("Broken").with_page(
        Page::new("Root")
            .with_item(PageItem::toggle(
                "Hat",
                ToggleItem::new(SyncMode::Manual).on_enable(ItemRef::new(0, 1), Reaction::Enable),
            ))
            .with_item(PageItem::button("Strip", ButtonItem::default())),
    );

    let error = flatten(&preset).unwrap_err();

    assert!(matches!(
        error,
        GenerationError::CorruptGroupReference {
            reason: CorruptReason::NotAToggle { ref target, ref kind },
            ..
        } if target == "Strip" && kind == "Button"
    ));
}

#[test]
fn self_reference_is_corrupt() {
    let preset = Preset::new("Broken").with_page(Page::new("Root").with_item(PageItem::toggle(
        "Hat",
        ToggleItem::new(SyncMode::Auto).on_enable(ItemRef::new(0, 0), Reaction::Disable),
    )));

    let error = flatten(&preset).unwrap_err();

    assert!(matches!(
        error,
        GenerationError::CorruptGroupReference {
            reason: CorruptReason::SelfReference,
            ..
        }
    ));
}
