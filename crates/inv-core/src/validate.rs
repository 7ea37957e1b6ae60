//! Structural checks on a preset before generation.
//!
//! Validation never aborts; it collects every finding into a
//! [`ValidationReport`]. Group reference integrity is left to flattening,
//! which treats it as fatal.

use std::collections::{BTreeSet, VecDeque};

use inv_model::{
    GroupItem, GroupKind, IssueSeverity, ItemRef, PageItemKind, Preset, ValidationIssue,
    ValidationOptions, ValidationReport,
};
use tracing::debug;

pub fn validate_preset(preset: &Preset, options: &ValidationOptions) -> ValidationReport {
    let mut issues = Vec::new();

    if preset.pages.is_empty() {
        issues.push(issue(
            "empty-preset",
            IssueSeverity::Error,
            format!("preset \"{}\" has no pages", preset.name),
            None,
            None,
        ));
    }

    for (page_index, page) in preset.pages.iter().enumerate() {
        if page.items.len() > options.page_item_limit {
            issues.push(issue(
                "page-item-limit",
                IssueSeverity::Error,
                format!(
                    "page \"{}\" has {} items, limit is {}",
                    page.name,
                    page.items.len(),
                    options.page_item_limit
                ),
                Some(page_index),
                None,
            ));
        }

        let mut seen = BTreeSet::new();
        for (item_index, item) in page.items.iter().enumerate() {
            let at = ItemRef::new(page_index, item_index);
            let name = item.name.trim();
            if name.is_empty() {
                issues.push(issue(
                    "empty-name",
                    IssueSeverity::Warning,
                    format!("{} on page \"{}\" has no name", item.item_type(), page.name),
                    Some(page_index),
                    Some(at),
                ));
            } else if !seen.insert(name) {
                issues.push(issue(
                    "duplicate-name",
                    IssueSeverity::Warning,
                    format!("\"{name}\" appears more than once on page \"{}\"", page.name),
                    Some(page_index),
                    Some(at),
                ));
            }

            match &item.kind {
                PageItemKind::Subpage { page: target } if *target >= preset.pages.len() => {
                    issues.push(issue(
                        "missing-subpage",
                        IssueSeverity::Error,
                        format!("subpage \"{name}\" points at missing page {target}"),
                        Some(page_index),
                        Some(at),
                    ));
                }
                PageItemKind::Subpage { page: target } if *target == page_index => {
                    issues.push(issue(
                        "self-subpage",
                        IssueSeverity::Warning,
                        format!("subpage \"{name}\" points at its own page"),
                        Some(page_index),
                        Some(at),
                    ));
                }
                PageItemKind::Toggle(toggle) => {
                    check_members(&mut issues, name, at, GroupKind::Enable, &toggle.enable_group);
                    check_members(&mut issues, name, at, GroupKind::Disable, &toggle.disable_group);
                }
                PageItemKind::Button(button) => {
                    check_members(&mut issues, name, at, GroupKind::Button, &button.button_group);
                }
                PageItemKind::Subpage { .. } | PageItemKind::Control => {}
            }
        }
    }

    if options.warn_unreachable_pages {
        for page_index in unreachable_pages(preset) {
            issues.push(issue(
                "unreachable-page",
                IssueSeverity::Warning,
                format!(
                    "page \"{}\" is not reachable from the root page",
                    preset.pages[page_index].name
                ),
                Some(page_index),
                None,
            ));
        }
    }

    if options.warnings_as_errors {
        for issue in &mut issues {
            issue.severity = IssueSeverity::Error;
        }
    }

    let report = ValidationReport {
        preset: preset.name.clone(),
        issues,
    };
    debug!(
        preset = %preset.name,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated preset"
    );
    report
}

fn check_members(
    issues: &mut Vec<ValidationIssue>,
    name: &str,
    at: ItemRef,
    group: GroupKind,
    members: &[GroupItem],
) {
    let mut seen = BTreeSet::new();
    for member in members {
        if !seen.insert(member.target) {
            issues.push(issue(
                "duplicate-group-member",
                IssueSeverity::Warning,
                format!(
                    "{group} group of \"{name}\" lists {} more than once",
                    member.target
                ),
                Some(at.page),
                Some(at),
            ));
        }
    }
}

/// Pages not reachable from page 0 through subpage items, in page order.
fn unreachable_pages(preset: &Preset) -> Vec<usize> {
    if preset.pages.is_empty() {
        return Vec::new();
    }
    let mut reached = vec![false; preset.pages.len()];
    let mut queue = VecDeque::from([0usize]);
    reached[0] = true;
    while let Some(page_index) = queue.pop_front() {
        for item in &preset.pages[page_index].items {
            if let PageItemKind::Subpage { page: target } = item.kind
                && target < reached.len()
                && !reached[target]
            {
                reached[target] = true;
                queue.push_back(target);
            }
        }
    }
    reached
        .iter()
        .enumerate()
        .filter(|(_, reached)| !**reached)
        .map(|(index, _)| index)
        .collect()
}

fn issue(
    code: &str,
    severity: IssueSeverity,
    message: String,
    page: Option<usize>,
    item: Option<ItemRef>,
) -> ValidationIssue {
    ValidationIssue {
        code: code.to_string(),
        message,
        severity,
        page,
        item,
    }
}
