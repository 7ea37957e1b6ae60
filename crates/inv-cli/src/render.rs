//! Plain-text rendering of a generation, one line per toggle.
//!
//! ```text
//! #0 Jacket [Manual] shared on=1 off=2,3
//! ```

use inv_core::Generation;
use inv_model::StateValue;

pub fn render_plain(generation: &Generation) -> String {
    let mut lines = vec![
        format!("preset: {}", generation.preset),
        format!(
            "budget: {}/{} used",
            generation.budget.used, generation.budget.available
        ),
    ];
    for spec in &generation.table {
        let Some(item) = generation.snapshot.item(spec.item) else {
            continue;
        };
        let mode = if item.saved {
            format!("{} saved", item.sync)
        } else {
            item.sync.to_string()
        };
        let mut line = format!(
            "{} {} [{}] {} on={} off={}",
            spec.item,
            item.name,
            mode,
            spec.driver,
            join_values(spec.enable_conditions.iter()),
            join_values(spec.disable_conditions.iter()),
        );
        if spec.local_only_enable || spec.local_only_disable {
            line.push_str(" (local)");
        }
        lines.push(line);
    }
    for state in &generation.allocation.buttons {
        let name = generation
            .snapshot
            .button(state.id)
            .map_or("", |button| button.name.as_str());
        lines.push(format!("button {} {} = {}", state.id, name, state.value));
    }
    lines.join("\n")
}

pub fn join_values<'a>(values: impl Iterator<Item = &'a StateValue>) -> String {
    let joined: Vec<String> = values.map(ToString::to_string).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(",")
    }
}
