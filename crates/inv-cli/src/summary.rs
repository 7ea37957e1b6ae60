use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inv_core::Generation;
use inv_cli::filter::ItemFilter;
use inv_cli::render::join_values;
use inv_model::{BudgetReport, Driver, IssueSeverity, Snapshot, SyncMode, ValidationReport};

pub fn print_generation(generation: &Generation) {
    println!("Preset: {}", generation.preset);
    println!("Fingerprint: {}", generation.fingerprint());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Toggle"),
        header_cell("Sync"),
        header_cell("Driver"),
        header_cell("Enable on"),
        header_cell("Disable on"),
        header_cell("Local"),
        header_cell("Default"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Center);
    for spec in &generation.table {
        let Some(item) = generation.snapshot.item(spec.item) else {
            continue;
        };
        let sync = if item.saved {
            format!("{} (saved)", item.sync)
        } else {
            item.sync.to_string()
        };
        table.add_row(vec![
            dim_cell(spec.item.index()),
            Cell::new(&item.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sync),
            driver_cell(spec.driver),
            values_cell(join_values(spec.enable_conditions.iter())),
            values_cell(join_values(spec.disable_conditions.iter())),
            flag_cell(spec.local_only_enable || spec.local_only_disable),
            flag_cell(spec.initial),
        ]);
    }
    println!("{table}");

    if !generation.allocation.buttons.is_empty() {
        let mut buttons = Table::new();
        buttons.set_header(vec![
            header_cell("Id"),
            header_cell("Button"),
            header_cell("Value"),
        ]);
        apply_table_style(&mut buttons);
        align_column(&mut buttons, 0, CellAlignment::Right);
        align_column(&mut buttons, 2, CellAlignment::Right);
        for state in &generation.allocation.buttons {
            let name = generation
                .snapshot
                .button(state.id)
                .map_or("", |button| button.name.as_str());
            buttons.add_row(vec![
                dim_cell(state.id.index()),
                Cell::new(name),
                Cell::new(state.value.get()),
            ]);
        }
        println!();
        println!("{buttons}");
    }
    print_budget(&generation.budget);
    if generation.validation.has_errors() {
        print_validation(&generation.validation);
    }
}

pub fn print_validation(report: &ValidationReport) {
    if report.issues.is_empty() {
        println!("Validation: no issues");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Page"),
        header_cell("Item"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            optional_cell(issue.page),
            optional_cell(issue.item.map(|at| at.item)),
            Cell::new(&issue.message),
        ]);
    }
    println!("Issues:");
    println!("{table}");
    println!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
}

pub fn print_budget(budget: &BudgetReport) {
    let status = if budget.passed { "ok" } else { "EXCEEDED" };
    println!(
        "State budget: {}/{} values used, {} remaining ({status})",
        budget.used,
        budget.available,
        budget.remaining()
    );
}

pub fn print_items(snapshot: &Snapshot, filter: ItemFilter) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Page"),
        header_cell("Slot"),
        header_cell("Sync"),
        header_cell("Groups"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (item, at) in snapshot.items.iter().zip(&snapshot.item_locations) {
        if !filter.keeps_toggle(item) {
            continue;
        }
        table.add_row(vec![
            Cell::new("toggle"),
            dim_cell(item.id.index()),
            Cell::new(&item.name),
            Cell::new(at.page),
            Cell::new(at.item),
            sync_cell(item.sync),
            Cell::new(format!(
                "+{} / -{}",
                item.enable_group_size(),
                item.disable_group_size()
            )),
        ]);
    }
    let buttons = snapshot
        .buttons
        .iter()
        .zip(&snapshot.button_locations)
        .filter(|_| filter.keeps_buttons());
    for (button, at) in buttons {
        table.add_row(vec![
            Cell::new("button"),
            dim_cell(button.id.index()),
            Cell::new(&button.name),
            Cell::new(at.page),
            Cell::new(at.item),
            dim_cell("-"),
            Cell::new(button.button_group.len()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn driver_cell(driver: Driver) -> Cell {
    match driver {
        Driver::SharedState => Cell::new(driver).fg(Color::Green),
        Driver::SavedParameter => Cell::new(driver).fg(Color::Yellow),
        Driver::DirectParameter => dim_cell(driver),
    }
}

fn sync_cell(sync: SyncMode) -> Cell {
    if sync.is_synced() {
        Cell::new(sync)
    } else {
        dim_cell(sync)
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn values_cell(values: String) -> Cell {
    if values == "-" {
        dim_cell(values)
    } else {
        Cell::new(values)
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn optional_cell(value: Option<usize>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
