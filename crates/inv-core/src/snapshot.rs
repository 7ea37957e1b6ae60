//! Flatten a preset tree into the index arena the allocator works on.
//!
//! Toggles and buttons are numbered separately in declaration order (pages
//! first, then items within a page). Group members are resolved from tree
//! positions to `ItemId`s here, so the allocator never sees a dangling
//! reference that flattening could have caught.

use std::collections::BTreeMap;

use inv_model::{
    Button, ButtonId, GroupItem, GroupKind, GroupReference, Item, ItemId, ItemRef, PageItemKind,
    Preset, Snapshot,
};
use tracing::debug;

use crate::error::{CorruptReason, GenerationError, Result};

/// Build the snapshot for one generation pass.
///
/// # Errors
///
/// Returns [`GenerationError::CorruptGroupReference`] for the first group
/// member that points at a missing item, a non-toggle, or its own owner.
pub fn flatten(preset: &Preset) -> Result<Snapshot> {
    let mut toggle_ids: BTreeMap<ItemRef, ItemId> = BTreeMap::new();
    let mut snapshot = Snapshot::default();

    for (at, item) in preset.iter_items() {
        match item.kind {
            PageItemKind::Toggle(_) => {
                toggle_ids.insert(at, ItemId::new(snapshot.item_locations.len()));
                snapshot.item_locations.push(at);
            }
            PageItemKind::Button(_) => snapshot.button_locations.push(at),
            PageItemKind::Subpage { .. } | PageItemKind::Control => {}
        }
    }

    let resolver = Resolver {
        preset,
        toggle_ids: &toggle_ids,
    };
    for (at, item) in preset.iter_items() {
        match &item.kind {
            PageItemKind::Toggle(toggle) => {
                let id = ItemId::new(snapshot.items.len());
                let enable_group =
                    resolver.resolve(&item.name, at, GroupKind::Enable, &toggle.enable_group)?;
                let disable_group =
                    resolver.resolve(&item.name, at, GroupKind::Disable, &toggle.disable_group)?;
                snapshot.items.push(
                    Item::new(id, item.name.clone(), toggle.sync)
                        .saved(toggle.saved)
                        .initial(toggle.initial)
                        .with_enable_group(enable_group)
                        .with_disable_group(disable_group),
                );
            }
            PageItemKind::Button(button) => {
                let id = ButtonId::new(snapshot.buttons.len());
                let group =
                    resolver.resolve(&item.name, at, GroupKind::Button, &button.button_group)?;
                snapshot
                    .buttons
                    .push(Button::new(id, item.name.clone()).with_group(group));
            }
            PageItemKind::Subpage { .. } | PageItemKind::Control => {}
        }
    }

    debug!(
        preset = %preset.name,
        toggles = snapshot.items.len(),
        buttons = snapshot.buttons.len(),
        "flattened preset"
    );
    Ok(snapshot)
}

struct Resolver<'a> {
    preset: &'a Preset,
    toggle_ids: &'a BTreeMap<ItemRef, ItemId>,
}

impl Resolver<'_> {
    fn resolve(
        &self,
        owner_name: &str,
        owner: ItemRef,
        group: GroupKind,
        members: &[GroupItem],
    ) -> Result<Vec<GroupReference>> {
        members
            .iter()
            .enumerate()
            .map(|(slot, member)| {
                let corrupt = |reason| GenerationError::CorruptGroupReference {
                    item: owner_name.to_string(),
                    group,
                    slot,
                    reason,
                };
                if member.target == owner {
                    return Err(corrupt(CorruptReason::SelfReference));
                }
                match (self.preset.get(member.target), self.toggle_ids.get(&member.target)) {
                    (Some(_), Some(id)) => Ok(GroupReference::new(*id, member.reaction)),
                    (Some(target), None) => Err(corrupt(CorruptReason::NotAToggle {
                        target: target.name.clone(),
                        kind: target.item_type().to_string(),
                    })),
                    (None, _) => Err(corrupt(CorruptReason::MissingTarget {
                        target: member.target.to_string(),
                    })),
                }
            })
            .collect()
    }
}
