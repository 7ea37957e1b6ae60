//! State allocator for the shared 8-bit channel.
//!
//! Every event that other participants must observe gets its own integer
//! state value:
//!
//! - **Sync values**: an on/off pair for toggles whose presses are broadcast
//!   (`Manual`) or periodically re-sent (`Auto` without `saved`).
//! - **Group triggers**: one value per populated enable/disable group, fired
//!   when the toggle is switched on/off by its owner. `Manual` toggles reuse
//!   their sync pair for this; their sync values are only sent on a press.
//! - **Button presses**: one value per button, after all toggles.
//!
//! Value `0` is the idle value and is never assigned. Values are handed out
//! in declaration order and never reused.
//!
//! The pass runs in three steps: references are checked, the total is
//! counted against [`STATE_BUDGET`], then values are assigned. A failure in
//! either check returns before anything is assigned.

use inv_model::{
    ActiveStateSet, Allocation, Button, ButtonState, GroupKind, GroupReference, Item, ItemSlots,
    Reaction, STATE_BUDGET, StateValue, SyncMode,
};
use tracing::{debug, trace};

use crate::error::{CorruptReason, GenerationError, Result};

/// Where a group trigger value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSlot {
    /// The group is empty; nothing fires.
    Unused,
    /// The trigger is the matching sync value.
    SharedWithSync,
    /// The trigger reserves a value of its own.
    Own,
}

impl TriggerSlot {
    fn own_count(self) -> usize {
        usize::from(self == TriggerSlot::Own)
    }
}

/// Reservation policy for a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlan {
    /// Reserve an on/off sync pair.
    pub sync_pair: bool,
    pub enable: TriggerSlot,
    pub disable: TriggerSlot,
}

impl SlotPlan {
    pub fn for_item(item: &Item) -> Self {
        Self::new(
            item.sync,
            item.saved,
            item.enable_group_size() > 0,
            item.disable_group_size() > 0,
        )
    }

    pub fn new(
        sync: SyncMode,
        saved: bool,
        enable_populated: bool,
        disable_populated: bool,
    ) -> Self {
        let trigger = |populated: bool, shared: bool| match (populated, shared) {
            (false, _) => TriggerSlot::Unused,
            (true, true) => TriggerSlot::SharedWithSync,
            (true, false) => TriggerSlot::Own,
        };
        match (sync, saved) {
            (SyncMode::Manual, _) => Self {
                sync_pair: true,
                enable: trigger(enable_populated, true),
                disable: trigger(disable_populated, true),
            },
            (SyncMode::Auto, false) => Self {
                sync_pair: true,
                enable: trigger(enable_populated, false),
                disable: trigger(disable_populated, false),
            },
            (SyncMode::Off, _) | (SyncMode::Auto, true) => Self {
                sync_pair: false,
                enable: trigger(enable_populated, false),
                disable: trigger(disable_populated, false),
            },
        }
    }

    /// Values this plan reserves.
    pub fn count(&self) -> usize {
        2 * usize::from(self.sync_pair) + self.enable.own_count() + self.disable.own_count()
    }
}

/// Naive number of non-idle values `items` and `buttons` need.
pub fn reservation_count(items: &[Item], buttons: &[Button]) -> usize {
    items
        .iter()
        .map(|item| SlotPlan::for_item(item).count())
        .sum::<usize>()
        + buttons.len()
}

/// Allocate state values for one snapshot.
///
/// `items[i].id` must be `ItemId::new(i)`; group targets are resolved by
/// index.
///
/// # Errors
///
/// - [`GenerationError::CorruptGroupReference`] when a target is out of range
///   or references its own item.
/// - [`GenerationError::BudgetExceeded`] when more than [`STATE_BUDGET`]
///   values are needed.
pub fn allocate(items: &[Item], buttons: &[Button]) -> Result<Allocation> {
    debug_assert!(
        items
            .iter()
            .enumerate()
            .all(|(index, item)| item.id.index() == index)
    );
    check_references(items, buttons)?;

    let used = reservation_count(items, buttons);
    if used > STATE_BUDGET {
        return Err(GenerationError::BudgetExceeded {
            used,
            available: STATE_BUDGET,
        });
    }

    let mut values = ValueCounter::new();
    let mut slots = Vec::with_capacity(items.len());
    for item in items {
        let plan = SlotPlan::for_item(item);
        let mut reserved = ItemSlots::default();
        if plan.sync_pair {
            reserved.sync_on = Some(values.next_value()?);
            reserved.sync_off = Some(values.next_value()?);
        }
        reserved.enable_trigger = match plan.enable {
            TriggerSlot::Unused => None,
            TriggerSlot::SharedWithSync => reserved.sync_on,
            TriggerSlot::Own => Some(values.next_value()?),
        };
        reserved.disable_trigger = match plan.disable {
            TriggerSlot::Unused => None,
            TriggerSlot::SharedWithSync => reserved.sync_off,
            TriggerSlot::Own => Some(values.next_value()?),
        };
        debug!(
            item = %item.name,
            sync = %item.sync,
            saved = item.saved,
            values = ?reserved.reserved(),
            "reserved item values"
        );
        slots.push(reserved);
    }

    let mut sets: Vec<ActiveStateSet> = slots.iter().map(own_set).collect();
    for (item, reserved) in items.iter().zip(&slots) {
        if let Some(value) = reserved.enable_trigger {
            propagate(&mut sets, &item.enable_group, value);
        }
        if let Some(value) = reserved.disable_trigger {
            propagate(&mut sets, &item.disable_group, value);
        }
    }

    let mut button_states = Vec::with_capacity(buttons.len());
    for button in buttons {
        let value = values.next_value()?;
        debug!(button = %button.name, %value, "reserved button value");
        propagate(&mut sets, &button.button_group, value);
        button_states.push(ButtonState {
            id: button.id,
            value,
        });
    }

    debug!(used, available = STATE_BUDGET, "allocation complete");
    Ok(Allocation {
        sets,
        slots,
        buttons: button_states,
        used,
    })
}

fn check_references(items: &[Item], buttons: &[Button]) -> Result<()> {
    let count = items.len();
    for item in items {
        check_group(count, &item.name, Some(item), GroupKind::Enable, &item.enable_group)?;
        check_group(count, &item.name, Some(item), GroupKind::Disable, &item.disable_group)?;
    }
    for button in buttons {
        check_group(count, &button.name, None, GroupKind::Button, &button.button_group)?;
    }
    Ok(())
}

fn check_group(
    item_count: usize,
    name: &str,
    owner: Option<&Item>,
    group: GroupKind,
    members: &[GroupReference],
) -> Result<()> {
    for (slot, member) in members.iter().enumerate() {
        let reason = if member.target.index() >= item_count {
            CorruptReason::MissingTarget {
                target: member.target.to_string(),
            }
        } else if owner.is_some_and(|item| item.id == member.target) {
            CorruptReason::SelfReference
        } else {
            continue;
        };
        return Err(GenerationError::CorruptGroupReference {
            item: name.to_string(),
            group,
            slot,
            reason,
        });
    }
    Ok(())
}

fn own_set(reserved: &ItemSlots) -> ActiveStateSet {
    let mut set = ActiveStateSet::default();
    for value in [reserved.sync_on, reserved.enable_trigger].into_iter().flatten() {
        set.push_enable(value);
    }
    for value in [reserved.sync_off, reserved.disable_trigger]
        .into_iter()
        .flatten()
    {
        set.push_disable(value);
    }
    set
}

/// Targets were range-checked by `check_references`.
fn propagate(sets: &mut [ActiveStateSet], members: &[GroupReference], value: StateValue) {
    for member in members {
        let Some(set) = sets.get_mut(member.target.index()) else {
            continue;
        };
        trace!(target_item = %member.target, reaction = %member.reaction, %value, "group member");
        match member.reaction {
            Reaction::Enable => set.push_enable(value),
            Reaction::Disable => set.push_disable(value),
        }
    }
}

struct ValueCounter {
    next: usize,
}

impl ValueCounter {
    fn new() -> Self {
        Self {
            next: usize::from(StateValue::IDLE.get()) + 1,
        }
    }

    fn next_value(&mut self) -> Result<StateValue> {
        let value =
            StateValue::try_from(self.next).map_err(|_| GenerationError::BudgetExceeded {
                used: self.next,
                available: STATE_BUDGET,
            })?;
        self.next += 1;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inv_model::ItemId;

    fn toggle(index: usize, sync: SyncMode) -> Item {
        Item::new(ItemId::new(index), format!("T{index}"), sync)
    }

    #[test]
    fn plan_counts_follow_sync_policy() {
        let target = vec![GroupReference::enable(ItemId::new(9))];
        let grouped = |item: Item| {
            item.with_enable_group(target.clone())
                .with_disable_group(target.clone())
        };

        assert_eq!(SlotPlan::for_item(&toggle(0, SyncMode::Off)).count(), 0);
        assert_eq!(SlotPlan::for_item(&grouped(toggle(0, SyncMode::Off))).count(), 2);
        assert_eq!(SlotPlan::for_item(&toggle(0, SyncMode::Manual)).count(), 2);
        assert_eq!(SlotPlan::for_item(&grouped(toggle(0, SyncMode::Manual))).count(), 2);
        assert_eq!(SlotPlan::for_item(&toggle(0, SyncMode::Auto)).count(), 2);
        assert_eq!(SlotPlan::for_item(&grouped(toggle(0, SyncMode::Auto))).count(), 4);
        assert_eq!(
            SlotPlan::for_item(&toggle(0, SyncMode::Auto).saved(true)).count(),
            0
        );
        assert_eq!(
            SlotPlan::for_item(&grouped(toggle(0, SyncMode::Auto).saved(true))).count(),
            2
        );
    }

    #[test]
    fn manual_triggers_share_sync_values() {
        let item = toggle(0, SyncMode::Manual)
            .with_enable_group(vec![GroupReference::enable(ItemId::new(1))]);
        let plan = SlotPlan::for_item(&item);
        assert_eq!(plan.enable, TriggerSlot::SharedWithSync);
        assert_eq!(plan.disable, TriggerSlot::Unused);
    }

    #[test]
    fn counter_starts_after_idle() {
        let mut counter = ValueCounter::new();
        assert_eq!(counter.next_value().unwrap(), StateValue::new(1));
        assert_eq!(counter.next_value().unwrap(), StateValue::new(2));
    }
}
