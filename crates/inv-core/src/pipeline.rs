//! One complete generation pass.
//!
//! # Stage Order
//!
//! 1. **Validate** - structural checks on the preset tree
//! 2. **Flatten** - number toggles and buttons, resolve group members
//! 3. **Allocate** - assign state values
//! 4. **Build table** - derive per-toggle guard conditions
//!
//! A pass returns either a complete [`Generation`] or the first error.

use inv_model::{
    Allocation, BudgetReport, ButtonState, Driver, GenerationOptions, ItemId, PageItemKind,
    Preset, STATE_BUDGET, Snapshot, StateValue, TransitionSpec, ValidationOptions,
    ValidationReport,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{info, info_span, warn};

use crate::allocator::{SlotPlan, allocate};
use crate::error::{GenerationError, Result};
use crate::snapshot::flatten;
use crate::table::build_table;
use crate::validate::validate_preset;

/// Everything an emitter needs to materialize a preset.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub preset: String,
    pub snapshot: Snapshot,
    pub allocation: Allocation,
    pub table: Vec<TransitionSpec>,
    pub validation: ValidationReport,
    pub budget: BudgetReport,
}

impl Generation {
    pub fn transition(&self, id: ItemId) -> Option<&TransitionSpec> {
        self.table.get(id.index())
    }

    pub fn item_name(&self, id: ItemId) -> Option<&str> {
        self.snapshot.item(id).map(|item| item.name.as_str())
    }

    /// Lowercase hex SHA-256 over the table and button values.
    ///
    /// Two passes over the same snapshot produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for spec in &self.table {
            hasher.update((spec.item.index() as u64).to_le_bytes());
            hasher.update([driver_tag(spec.driver)]);
            hasher.update([
                u8::from(spec.local_only_disable),
                u8::from(spec.local_only_enable),
                u8::from(spec.initial),
            ]);
            hash_values(&mut hasher, spec.disable_conditions.iter().map(StateValue::get));
            hash_values(&mut hasher, spec.enable_conditions.iter().map(StateValue::get));
        }
        hash_buttons(&mut hasher, &self.allocation.buttons);
        hex::encode(hasher.finalize())
    }
}

fn driver_tag(driver: Driver) -> u8 {
    match driver {
        Driver::DirectParameter => 0,
        Driver::SavedParameter => 1,
        Driver::SharedState => 2,
    }
}

fn hash_values(hasher: &mut Sha256, values: impl ExactSizeIterator<Item = u8>) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update([value]);
    }
}

fn hash_buttons(hasher: &mut Sha256, buttons: &[ButtonState]) {
    hasher.update((buttons.len() as u64).to_le_bytes());
    for button in buttons {
        hasher.update((button.id.index() as u64).to_le_bytes());
        hasher.update([button.value.get()]);
    }
}

/// Run a full generation pass over `preset`.
///
/// # Errors
///
/// - [`GenerationError::Validation`] when validation reports errors and
///   `options.fail_on_validation_errors` is set.
/// - Any flattening or allocation error.
pub fn generate(preset: &Preset, options: &GenerationOptions) -> Result<Generation> {
    let span = info_span!("generate", preset = %preset.name);
    let _guard = span.enter();

    let validation = validate_preset(preset, &options.validation);
    if validation.has_errors() {
        if options.fail_on_validation_errors {
            return Err(GenerationError::Validation {
                errors: validation
                    .errors()
                    .map(|issue| issue.message.clone())
                    .collect(),
            });
        }
        warn!(
            errors = validation.error_count(),
            "continuing despite validation errors"
        );
    }

    let snapshot = flatten(preset)?;
    let allocation = allocate(&snapshot.items, &snapshot.buttons)?;
    let table = build_table(&snapshot.items, &allocation);
    let budget = BudgetReport::new(allocation.used, STATE_BUDGET);
    info!(
        toggles = snapshot.items.len(),
        buttons = snapshot.buttons.len(),
        used = budget.used,
        available = budget.available,
        "generated transition table"
    );

    Ok(Generation {
        preset: preset.name.clone(),
        snapshot,
        allocation,
        table,
        validation,
        budget,
    })
}

/// Outcome of [`preflight`]: everything that would stop [`generate`].
#[derive(Debug)]
pub struct Preflight {
    pub validation: ValidationReport,
    pub budget: BudgetReport,
    /// The first corrupt group member, if any.
    pub reference_error: Option<GenerationError>,
}

impl Preflight {
    pub fn passed(&self) -> bool {
        !self.validation.has_errors() && self.budget.passed && self.reference_error.is_none()
    }
}

/// Validate, resolve group references and count the budget without
/// allocating. Never fails; every finding lands in the returned [`Preflight`].
pub fn preflight(preset: &Preset, options: &ValidationOptions) -> Preflight {
    let validation = validate_preset(preset, options);
    let reference_error = flatten(preset).err();
    if let Some(error) = &reference_error {
        warn!(preset = %preset.name, %error, "corrupt group reference");
    }
    Preflight {
        validation,
        budget: check_budget(preset),
        reference_error,
    }
}

/// Count the values `preset` needs without allocating.
///
/// Group members are counted as declared; corrupt members are reported by
/// [`preflight`] and rejected by [`generate`].
pub fn check_budget(preset: &Preset) -> BudgetReport {
    let used = preset
        .iter_items()
        .map(|(_, item)| match &item.kind {
            PageItemKind::Toggle(toggle) => SlotPlan::new(
                toggle.sync,
                toggle.saved,
                !toggle.enable_group.is_empty(),
                !toggle.disable_group.is_empty(),
            )
            .count(),
            PageItemKind::Button(_) => 1,
            PageItemKind::Subpage { .. } | PageItemKind::Control => 0,
        })
        .sum();
    let report = BudgetReport::new(used, STATE_BUDGET);
    if !report.passed {
        warn!(preset = %preset.name, used, available = STATE_BUDGET, "state budget exceeded");
    }
    report
}
