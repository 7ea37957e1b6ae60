//! Row selection for `inv items`.

use inv_model::{Item, ItemType, SyncMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub sync: Option<SyncMode>,
    pub kind: Option<ItemType>,
}

impl ItemFilter {
    pub fn new(sync: Option<SyncMode>, kind: Option<ItemType>) -> Self {
        Self { sync, kind }
    }

    pub fn keeps_toggle(&self, item: &Item) -> bool {
        self.kind.is_none_or(|kind| kind == ItemType::Toggle)
            && self.sync.is_none_or(|sync| sync == item.sync)
    }

    /// Buttons carry no sync mode, so any sync filter hides them.
    pub fn keeps_buttons(&self) -> bool {
        self.sync.is_none() && self.kind.is_none_or(|kind| kind == ItemType::Button)
    }
}
