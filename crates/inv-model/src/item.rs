//! Flat snapshot entities consumed by the allocator.

use serde::{Deserialize, Serialize};

use crate::enums::{Reaction, SyncMode};
use crate::ids::{ButtonId, ItemId};
use crate::preset::ItemRef;

/// A resolved group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReference {
    pub target: ItemId,
    pub reaction: Reaction,
}

impl GroupReference {
    pub fn new(target: ItemId, reaction: Reaction) -> Self {
        Self { target, reaction }
    }

    pub fn enable(target: ItemId) -> Self {
        Self::new(target, Reaction::Enable)
    }

    pub fn disable(target: ItemId) -> Self {
        Self::new(target, Reaction::Disable)
    }
}

/// One logical toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub sync: SyncMode,
    pub saved: bool,
    pub initial: bool,
    pub enable_group: Vec<GroupReference>,
    pub disable_group: Vec<GroupReference>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, sync: SyncMode) -> Self {
        Self {
            id,
            name: name.into(),
            sync,
            saved: false,
            initial: false,
            enable_group: Vec::new(),
            disable_group: Vec::new(),
        }
    }

    #[must_use]
    pub fn saved(mut self, saved: bool) -> Self {
        self.saved = saved;
        self
    }

    #[must_use]
    pub fn initial(mut self, initial: bool) -> Self {
        self.initial = initial;
        self
    }

    #[must_use]
    pub fn with_enable_group(mut self, group: Vec<GroupReference>) -> Self {
        self.enable_group = group;
        self
    }

    #[must_use]
    pub fn with_disable_group(mut self, group: Vec<GroupReference>) -> Self {
        self.disable_group = group;
        self
    }

    pub fn enable_group_size(&self) -> usize {
        self.enable_group.len()
    }

    pub fn disable_group_size(&self) -> usize {
        self.disable_group.len()
    }

    pub fn has_groups(&self) -> bool {
        !self.enable_group.is_empty() || !self.disable_group.is_empty()
    }
}

/// A momentary button. Fires its group and is never a group target itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub id: ButtonId,
    pub name: String,
    pub button_group: Vec<GroupReference>,
}

impl Button {
    pub fn new(id: ButtonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            button_group: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: Vec<GroupReference>) -> Self {
        self.button_group = group;
        self
    }
}

/// The immutable input of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub buttons: Vec<Button>,
    /// Tree position of each item, indexed by `ItemId`.
    pub item_locations: Vec<ItemRef>,
    /// Tree position of each button, indexed by `ButtonId`.
    pub button_locations: Vec<ItemRef>,
}

impl Snapshot {
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.get(id.index())
    }
}
