//! Allocator and transition table output.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::{ButtonId, ItemId, StateValue};

/// Values that drive one toggle off (`disable_values`) or on (`enable_values`).
///
/// Insertion ordered and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStateSet {
    pub disable_values: Vec<StateValue>,
    pub enable_values: Vec<StateValue>,
}

impl ActiveStateSet {
    pub fn push_enable(&mut self, value: StateValue) {
        if !self.enable_values.contains(&value) {
            self.enable_values.push(value);
        }
    }

    pub fn push_disable(&mut self, value: StateValue) {
        if !self.disable_values.contains(&value) {
            self.disable_values.push(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enable_values.is_empty() && self.disable_values.is_empty()
    }
}

/// The values a toggle reserved for its own events.
///
/// For `Manual` toggles the sync values double as group triggers, so
/// `enable_trigger == sync_on` when the toggle has an enable group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSlots {
    pub sync_on: Option<StateValue>,
    pub sync_off: Option<StateValue>,
    pub enable_trigger: Option<StateValue>,
    pub disable_trigger: Option<StateValue>,
}

impl ItemSlots {
    /// Distinct values this toggle reserved, in reservation order.
    pub fn reserved(&self) -> Vec<StateValue> {
        let mut out = Vec::with_capacity(4);
        for value in [
            self.sync_on,
            self.sync_off,
            self.enable_trigger,
            self.disable_trigger,
        ]
        .into_iter()
        .flatten()
        {
            if !out.contains(&value) {
                out.push(value);
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub id: ButtonId,
    pub value: StateValue,
}

/// Result of one allocation pass. Every vector is indexed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub sets: Vec<ActiveStateSet>,
    pub slots: Vec<ItemSlots>,
    pub buttons: Vec<ButtonState>,
    /// Non-idle values reserved.
    pub used: usize,
}

impl Allocation {
    pub fn set(&self, id: ItemId) -> Option<&ActiveStateSet> {
        self.sets.get(id.index())
    }

    pub fn slots(&self, id: ItemId) -> Option<&ItemSlots> {
        self.slots.get(id.index())
    }

    pub fn button_value(&self, id: ButtonId) -> Option<StateValue> {
        self.buttons.get(id.index()).map(|state| state.value)
    }
}

/// How the emitter should drive a toggle's boolean parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Driver {
    /// A direct boolean edge; the shared channel is not involved.
    DirectParameter,
    /// Restored once from the saved parameter at load.
    SavedParameter,
    /// Guarded by the shared channel's values.
    SharedState,
}

impl Driver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::DirectParameter => "direct",
            Driver::SavedParameter => "saved",
            Driver::SharedState => "shared",
        }
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guard conditions for one toggle's layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub item: ItemId,
    pub disable_conditions: BTreeSet<StateValue>,
    pub enable_conditions: BTreeSet<StateValue>,
    /// Only the locally controlling participant reacts to the disable set.
    pub local_only_disable: bool,
    /// Only the locally controlling participant reacts to the enable set.
    pub local_only_enable: bool,
    pub driver: Driver,
    pub initial: bool,
}
