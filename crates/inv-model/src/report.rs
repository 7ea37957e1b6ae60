use serde::{Deserialize, Serialize};

use crate::preset::ItemRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl IssueSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        }
    }
}

/// A problem found while validating a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable issue code (e.g., "page-item-limit").
    pub code: String,
    /// Human-readable message describing the issue.
    pub message: String,
    pub severity: IssueSeverity,
    /// Page the issue was found on.
    pub page: Option<usize>,
    /// Item the issue was found on.
    pub item: Option<ItemRef>,
}

/// Validation report for a whole preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub preset: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
    }
}

/// Whether a preset's reservations fit the shared channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Non-idle values the preset needs.
    pub used: usize,
    /// Non-idle values the channel offers.
    pub available: usize,
    pub passed: bool,
}

impl BudgetReport {
    pub fn new(used: usize, available: usize) -> Self {
        Self {
            used,
            available,
            passed: used <= available,
        }
    }

    pub fn remaining(&self) -> usize {
        self.available.saturating_sub(self.used)
    }
}
