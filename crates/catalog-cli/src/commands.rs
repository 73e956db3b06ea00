use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use catalog_cli::pipeline::{load_table, plan_mapping, run_import, write_result_json};
use catalog_map::{PLATFORMS, detect_platform, save_field_map, score_platforms};
use catalog_model::{PlatformId, TransformOptions};

use crate::cli::{DetectArgs, ImportArgs, MapArgs, ReportFormatArg};
use crate::summary::{apply_table_style, print_plan, print_result, print_scores};

pub fn run_platforms() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Platform", "Name", "Layout", "Group by"]);
    apply_table_style(&mut table);
    for config in PLATFORMS {
        let layout = match config.multi_row_group_column() {
            Some(_) => "multi-row",
            None => "one row per product",
        };
        table.add_row(vec![
            config.id.as_str(),
            config.display_name,
            layout,
            config.group_by.unwrap_or("-"),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_detect(args: &DetectArgs) -> Result<()> {
    let table = load_table(&args.csv)?;
    let scores = score_platforms(&table.headers);
    print_scores(&scores);
    let platform = detect_platform(&table.headers);
    println!("Platform: {platform}");
    Ok(())
}

pub fn run_map(args: &MapArgs) -> Result<()> {
    let source = &args.source;
    let table = load_table(&source.csv)?;
    let plan = plan_mapping(
        &table.headers,
        source.platform.map(PlatformId::from),
        source.mapping.as_deref(),
    )?;
    print_plan(&plan);
    if let Some(path) = &args.save {
        save_field_map(path, &plan.field_map)
            .with_context(|| format!("write field map: {}", path.display()))?;
        info!(path = %path.display(), entries = plan.field_map.len(), "field map saved");
        println!("Field map written to {}", path.display());
    }
    Ok(())
}

/// Runs a full import and returns whether any row was rejected.
pub fn run_import_command(args: &ImportArgs) -> Result<bool> {
    let source = &args.source;
    let options = TransformOptions::new()
        .with_default_category(args.default_category.trim())
        .with_default_currency(args.currency.trim().to_lowercase());
    let outcome = run_import(
        &source.csv,
        source.platform.map(PlatformId::from),
        source.mapping.as_deref(),
        &options,
    )?;
    match args.format {
        ReportFormatArg::Table => {
            let how = if outcome.plan.detected { "detected" } else { "selected" };
            println!("Platform: {} ({how})", outcome.plan.platform);
            print_result(&outcome.result);
        }
        ReportFormatArg::Json => {
            let json = serde_json::to_string_pretty(&outcome.result)
                .context("serialize transform result")?;
            println!("{json}");
        }
    }
    if let Some(path) = &args.output {
        write_result_json(path, &outcome.result)?;
    }
    Ok(outcome.result.has_errors())
}
