pub mod enums;
pub mod error;
pub mod ids;
pub mod item;
pub mod options;
pub mod preset;
pub mod report;
pub mod state;

pub use enums::{GroupKind, ItemType, Reaction, SyncMode};
pub use error::{ModelError, Result};
pub use ids::{ButtonId, ItemId, StateValue};
pub use item::{Button, GroupReference, Item, Snapshot};
pub use options::{DEFAULT_PAGE_ITEM_LIMIT, GenerationOptions, STATE_BUDGET, ValidationOptions};
pub use preset::{ButtonItem, GroupItem, ItemRef, Page, PageItem, PageItemKind, Preset, ToggleItem};
pub use report::{BudgetReport, IssueSeverity, ValidationIssue, ValidationReport};
pub use state::{ActiveStateSet, Allocation, ButtonState, Driver, ItemSlots, TransitionSpec};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_counts() {
        let report = ValidationReport {
            preset: "Outfits".to_string(),
            issues: vec![
                ValidationIssue {
                    code: "page-item-limit".to_string(),
                    message: "too many items".to_string(),
                    severity: IssueSeverity::Error,
                    page: Some(0),
                    item: None,
                },
                ValidationIssue {
                    code: "empty-name".to_string(),
                    message: "unnamed item".to_string(),
                    severity: IssueSeverity::Warning,
                    page: Some(0),
                    item: Some(ItemRef::new(0, 3)),
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn budget_report_boundary() {
        assert!(BudgetReport::new(STATE_BUDGET, STATE_BUDGET).passed);
        assert!(!BudgetReport::new(STATE_BUDGET + 1, STATE_BUDGET).passed);
        assert_eq!(BudgetReport::new(300, STATE_BUDGET).remaining(), 0);
    }
}
