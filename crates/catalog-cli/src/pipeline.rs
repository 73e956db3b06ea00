//! Import stages shared by the CLI subcommands.
//!
//! Each stage is a plain function so the binary only wires arguments and
//! prints; the stages themselves are exercised directly by tests.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use catalog_ingest::{CsvTable, read_csv_table};
use catalog_map::{
    MappingSummary, detect_platform, get_default_field_map, load_field_map, summarize_mapping,
};
use catalog_model::{FieldMap, PlatformId, TransformOptions, TransformResult};
use catalog_transform::transform_csv_to_products;

/// Platform and field map chosen for one file.
#[derive(Debug, Clone)]
pub struct MappingPlan {
    pub platform: PlatformId,
    /// True when the platform was inferred from the headers.
    pub detected: bool,
    pub field_map: FieldMap,
    pub summary: MappingSummary,
}

/// Everything an import run produced.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub plan: MappingPlan,
    pub result: TransformResult,
}

pub fn load_table(path: &Path) -> Result<CsvTable> {
    let table = read_csv_table(path)?;
    info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "csv loaded"
    );
    Ok(table)
}

/// Uses `explicit` when given, otherwise detects the platform from `headers`.
pub fn resolve_platform(headers: &[String], explicit: Option<PlatformId>) -> (PlatformId, bool) {
    match explicit {
        Some(platform) => (platform, false),
        None => (detect_platform(headers), true),
    }
}

/// Builds the platform's default map and overlays the manual map at
/// `mapping`, if any.
///
/// An unknown platform without a manual map is rejected: no column would
/// feed any field.
pub fn plan_mapping(
    headers: &[String],
    explicit: Option<PlatformId>,
    mapping: Option<&Path>,
) -> Result<MappingPlan> {
    let (platform, detected) = resolve_platform(headers, explicit);
    let mut field_map = get_default_field_map(platform, headers);
    match mapping {
        Some(path) => {
            let overrides = load_field_map(path)
                .with_context(|| format!("read field map: {}", path.display()))?;
            field_map.merge_override(&overrides);
        }
        None if platform == PlatformId::Unknown => {
            bail!("could not detect the export platform; pass --platform or --mapping");
        }
        None => {}
    }
    let summary = summarize_mapping(&field_map, headers);
    if !summary.is_complete() {
        let missing: Vec<&str> = summary
            .missing_required
            .iter()
            .map(|field| field.as_str())
            .collect();
        warn!(missing = ?missing, "field map leaves required fields unmapped");
    }
    for column in &summary.absent_columns {
        warn!(column = %column, "mapped column not present in file");
    }
    Ok(MappingPlan {
        platform,
        detected,
        field_map,
        summary,
    })
}

/// Reads, maps and transforms one CSV file.
pub fn run_import(
    path: &Path,
    explicit: Option<PlatformId>,
    mapping: Option<&Path>,
    options: &TransformOptions,
) -> Result<ImportOutcome> {
    let span = info_span!("import", path = %path.display());
    let _guard = span.enter();
    let table = load_table(path)?;
    let plan = plan_mapping(&table.headers, explicit, mapping)?;
    let result = transform_csv_to_products(&table.rows, &plan.field_map, plan.platform, options);
    Ok(ImportOutcome { plan, result })
}

/// Writes the transform result as pretty JSON.
pub fn write_result_json(path: &Path, result: &TransformResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize transform result")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "result written");
    Ok(())
}
