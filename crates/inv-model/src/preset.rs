//! The declarative preset tree as authored.
//!
//! Cross references between items are tree positions ([`ItemRef`]) rather
//! than pointers, so a stale reference left behind by copy-paste is
//! detectable as an out-of-range position when the preset is flattened.

use serde::{Deserialize, Serialize};

use crate::enums::{ItemType, Reaction, SyncMode};

/// A complete inventory: an ordered list of menu pages. Page 0 is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Look up an item by tree position.
    pub fn get(&self, target: ItemRef) -> Option<&PageItem> {
        self.pages
            .get(target.page)
            .and_then(|page| page.items.get(target.item))
    }

    /// Iterate every item with its tree position, in declaration order.
    pub fn iter_items(&self) -> impl Iterator<Item = (ItemRef, &PageItem)> {
        self.pages.iter().enumerate().flat_map(|(page_index, page)| {
            page.items
                .iter()
                .enumerate()
                .map(move |(item_index, item)| (ItemRef::new(page_index, item_index), item))
        })
    }
}

/// One menu page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub items: Vec<PageItem>,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: PageItem) -> Self {
        self.items.push(item);
        self
    }
}

/// An entry on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageItem {
    pub name: String,
    pub kind: PageItemKind,
}

impl PageItem {
    pub fn toggle(name: impl Into<String>, toggle: ToggleItem) -> Self {
        Self {
            name: name.into(),
            kind: PageItemKind::Toggle(toggle),
        }
    }

    pub fn button(name: impl Into<String>, button: ButtonItem) -> Self {
        Self {
            name: name.into(),
            kind: PageItemKind::Button(button),
        }
    }

    pub fn subpage(name: impl Into<String>, page: usize) -> Self {
        Self {
            name: name.into(),
            kind: PageItemKind::Subpage { page },
        }
    }

    pub fn control(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PageItemKind::Control,
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self.kind {
            PageItemKind::Toggle(_) => ItemType::Toggle,
            PageItemKind::Button(_) => ItemType::Button,
            PageItemKind::Subpage { .. } => ItemType::Subpage,
            PageItemKind::Control => ItemType::Control,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageItemKind {
    Toggle(ToggleItem),
    Button(ButtonItem),
    Subpage { page: usize },
    /// An expression control with no inventory state of its own.
    Control,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleItem {
    pub sync: SyncMode,
    pub saved: bool,
    /// State the toggle starts in.
    pub initial: bool,
    pub enable_group: Vec<GroupItem>,
    pub disable_group: Vec<GroupItem>,
}

impl ToggleItem {
    pub fn new(sync: SyncMode) -> Self {
        Self {
            sync,
            ..Self::default()
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
    pub fn on_enable(mut self, target: ItemRef, reaction: Reaction) -> Self {
        self.enable_group.push(GroupItem { target, reaction });
        self
    }

    #[must_use]
    pub fn on_disable(mut self, target: ItemRef, reaction: Reaction) -> Self {
        self.disable_group.push(GroupItem { target, reaction });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonItem {
    pub button_group: Vec<GroupItem>,
}

impl ButtonItem {
    #[must_use]
    pub fn on_press(mut self, target: ItemRef, reaction: Reaction) -> Self {
        self.button_group.push(GroupItem { target, reaction });
        self
    }
}

/// A group member: force `target` into `reaction` when the group fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupItem {
    pub target: ItemRef,
    pub reaction: Reaction,
}

/// Position of an item in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub page: usize,
    pub item: usize,
}

impl ItemRef {
    pub fn new(page: usize, item: usize) -> Self {
        Self { page, item }
    }
}

impl std::fmt::Display for ItemRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page {} item {}", self.page, self.item)
    }
}
