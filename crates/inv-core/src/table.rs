//! Transition table builder.
//!
//! Turns an [`Allocation`] into per-toggle guard conditions. The builder
//! performs no checks of its own; a table is only ever built from a
//! successful allocation.

use std::collections::BTreeSet;

use inv_model::{Allocation, Driver, Item, StateValue, SyncMode, TransitionSpec};

/// Build one [`TransitionSpec`] per item, in item order.
pub fn build_table(items: &[Item], allocation: &Allocation) -> Vec<TransitionSpec> {
    items
        .iter()
        .map(|item| {
            let set = allocation.set(item.id);
            let disable_conditions: BTreeSet<StateValue> = set
                .map(|set| set.disable_values.iter().copied().collect())
                .unwrap_or_default();
            let enable_conditions: BTreeSet<StateValue> = set
                .map(|set| set.enable_values.iter().copied().collect())
                .unwrap_or_default();
            transition_for(item, disable_conditions, enable_conditions)
        })
        .collect()
}

fn transition_for(
    item: &Item,
    disable_conditions: BTreeSet<StateValue>,
    enable_conditions: BTreeSet<StateValue>,
) -> TransitionSpec {
    let local = item.sync == SyncMode::Off;
    let idle = disable_conditions.is_empty() && enable_conditions.is_empty();
    let driver = match (item.sync, item.saved, idle) {
        (SyncMode::Off, _, true) => Driver::DirectParameter,
        (SyncMode::Auto, true, true) => Driver::SavedParameter,
        _ => Driver::SharedState,
    };
    TransitionSpec {
        item: item.id,
        local_only_disable: local && !disable_conditions.is_empty(),
        local_only_enable: local && !enable_conditions.is_empty(),
        disable_conditions,
        enable_conditions,
        driver,
        initial: item.initial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inv_model::{ActiveStateSet, ItemId};

    fn allocation_with(set: ActiveStateSet) -> Allocation {
        Allocation {
            sets: vec![set],
            slots: vec![Default::default()],
            buttons: vec![],
            used: 0,
        }
    }

    #[test]
    fn off_item_without_values_is_direct() {
        let item = Item::new(ItemId::new(0), "Glasses", SyncMode::Off);
        let table = build_table(&[item], &allocation_with(ActiveStateSet::default()));
        assert_eq!(table[0].driver, Driver::DirectParameter);
        assert!(!table[0].local_only_enable);
        assert!(!table[0].local_only_disable);
    }

    #[test]
    fn off_item_with_values_is_local_only() {
        let item = Item::new(ItemId::new(0), "Glasses", SyncMode::Off);
        let mut set = ActiveStateSet::default();
        set.push_enable(StateValue::new(3));
        let table = build_table(&[item], &allocation_with(set));
        assert_eq!(table[0].driver, Driver::SharedState);
        assert!(table[0].local_only_enable);
        assert!(!table[0].local_only_disable);
    }

    #[test]
    fn conditions_are_sorted() {
        let item = Item::new(ItemId::new(0), "Cape", SyncMode::Manual);
        let mut set = ActiveStateSet::default();
        set.push_enable(StateValue::new(9));
        set.push_enable(StateValue::new(1));
        let table = build_table(&[item], &allocation_with(set));
        let ordered: Vec<u8> = table[0].enable_conditions.iter().map(|v| v.get()).collect();
        assert_eq!(ordered, vec![1, 9]);
    }
}
