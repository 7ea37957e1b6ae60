#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Ordinal of a toggle within one generation snapshot.
///
/// Assigned once per pass and used as the index into every derived table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(usize);

impl ItemId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordinal of a button within one generation snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ButtonId(usize);

impl ButtonId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A code on the shared 8-bit state channel.
///
/// Downstream layers bake these into literal guard conditions, so the numeric
/// value is the contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct StateValue(u8);

impl StateValue {
    /// The channel's resting value. Never assigned to an event.
    pub const IDLE: StateValue = StateValue(0);

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_idle(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<usize> for StateValue {
    type Error = ModelError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ModelError::StateValueOutOfRange(value))
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
