//! Type-safe enumerations for inventory presets.
//!
//! Sync modes and item kinds parse case-insensitively so CLI filters accept
//! the spellings editors export; every enum renders a canonical name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// How a toggle's state reaches other participants.
///
/// - **Off**: local only. The toggle drives its own boolean parameter and
///   never occupies the shared state channel unless it has groups to
///   broadcast.
/// - **Manual**: every on/off press is broadcast through the shared channel.
/// - **Auto**: presses are broadcast and the current state is periodically
///   re-sent so late joiners converge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SyncMode {
    #[default]
    Off,
    Manual,
    Auto,
}

impl SyncMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncMode::Off => "Off",
            SyncMode::Manual => "Manual",
            SyncMode::Auto => "Auto",
        }
    }

    /// Returns true if this mode uses the shared channel for its own presses.
    pub fn is_synced(&self) -> bool {
        !matches!(self, SyncMode::Off)
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SyncMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OFF" | "LOCAL" => Ok(SyncMode::Off),
            "MANUAL" => Ok(SyncMode::Manual),
            "AUTO" | "AUTOMATIC" => Ok(SyncMode::Auto),
            _ => Err(ModelError::UnknownVariant {
                kind: "sync mode",
                value: s.to_string(),
            }),
        }
    }
}

/// The state a group member is forced into when its group fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    Enable,
    Disable,
}

impl Reaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Enable => "Enable",
            Reaction::Disable => "Disable",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of entry on a menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Toggle,
    Button,
    Subpage,
    Control,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Toggle => "Toggle",
            ItemType::Button => "Button",
            ItemType::Subpage => "Subpage",
            ItemType::Control => "Control",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TOGGLE" => Ok(ItemType::Toggle),
            "BUTTON" => Ok(ItemType::Button),
            "SUBPAGE" | "SUBMENU" => Ok(ItemType::Subpage),
            "CONTROL" => Ok(ItemType::Control),
            _ => Err(ModelError::UnknownVariant {
                kind: "item type",
                value: s.to_string(),
            }),
        }
    }
}

/// Which group list of an item a reference was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Fires when the owning toggle is switched on.
    Enable,
    /// Fires when the owning toggle is switched off.
    Disable,
    /// Fires when the owning button is pressed.
    Button,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Enable => "enable",
            GroupKind::Disable => "disable",
            GroupKind::Button => "button",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
