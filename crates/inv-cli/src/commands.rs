use anyhow::{Context, Result};
use tracing::{info, info_span};

use inv_cli::filter::ItemFilter;
use inv_cli::load::load_preset;
use inv_cli::render::render_plain;
use inv_core::{flatten, generate, preflight};
use inv_model::{GenerationOptions, ValidationOptions};

use crate::cli::{CheckArgs, GenerateArgs, ItemsArgs};
use crate::summary::{print_budget, print_generation, print_items, print_validation};

/// Returns the process exit code.
pub fn run_generate(args: &GenerateArgs) -> Result<i32> {
    let preset = load_preset(&args.input.preset)?;
    let span = info_span!("command", command = "generate", preset = %preset.name);
    let _guard = span.enter();

    let mut options = if args.strict {
        GenerationOptions::strict()
    } else {
        GenerationOptions::default()
    };
    if args.allow_invalid {
        options = options.allow_invalid();
    }
    if let Some(limit) = args.page_item_limit {
        options.validation = options.validation.with_page_item_limit(limit);
    }

    let generation = generate(&preset, &options)
        .with_context(|| format!("generate preset \"{}\"", preset.name))?;
    if args.json {
        let json = serde_json::to_string_pretty(&generation).context("serialize generation")?;
        println!("{json}");
    } else if args.plain {
        println!("{}", render_plain(&generation));
    } else {
        print_generation(&generation);
    }
    info!(fingerprint = %generation.fingerprint(), "generation complete");
    Ok(0)
}

/// Returns the process exit code: 1 when validation errors, a corrupt group
/// member or budget overflow were found.
pub fn run_check(args: &CheckArgs) -> Result<i32> {
    let preset = load_preset(&args.input.preset)?;
    let span = info_span!("command", command = "check", preset = %preset.name);
    let _guard = span.enter();

    let mut options = if args.strict {
        ValidationOptions::strict()
    } else {
        ValidationOptions::default()
    };
    if let Some(limit) = args.page_item_limit {
        options = options.with_page_item_limit(limit);
    }

    let report = preflight(&preset, &options);
    println!("Preset: {}", preset.name);
    print_validation(&report.validation);
    if let Some(error) = &report.reference_error {
        println!("References: {error}");
    }
    print_budget(&report.budget);
    Ok(if report.passed() { 0 } else { 1 })
}

pub fn run_items(args: &ItemsArgs) -> Result<i32> {
    let preset = load_preset(&args.input.preset)?;
    let snapshot =
        flatten(&preset).with_context(|| format!("flatten preset \"{}\"", preset.name))?;
    print_items(&snapshot, ItemFilter::new(args.sync, args.kind));
    Ok(0)
}
