//! Errors that abort a generation pass.

use std::fmt;

use inv_model::GroupKind;
use thiserror::Error;

/// Why a group reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorruptReason {
    /// The target is not part of the current snapshot.
    MissingTarget { target: String },
    /// The reference points back at the item that owns the group.
    SelfReference,
    /// The target exists but is not a toggle.
    NotAToggle { target: String, kind: String },
}

impl fmt::Display for CorruptReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptReason::MissingTarget { target } => write!(f, "target {target} does not exist"),
            CorruptReason::SelfReference => f.write_str("item references itself"),
            CorruptReason::NotAToggle { target, kind } => {
                write!(f, "target {target} is a {kind}, not a toggle")
            }
        }
    }
}

/// Errors raised by flattening, allocation or generation.
///
/// Every variant is terminal: no partial output accompanies it.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("corrupt {group} group member on \"{item}\" (slot {slot}): {reason}")]
    CorruptGroupReference {
        item: String,
        group: GroupKind,
        slot: usize,
        reason: CorruptReason,
    },

    #[error("state budget exceeded: {used} values needed, {available} available")]
    BudgetExceeded { used: usize, available: usize },

    #[error("preset has {} validation error(s): {}", .errors.len(), .errors.join("; "))]
    Validation { errors: Vec<String> },
}

pub type Result<T> = std::result::Result<T, GenerationError>;
