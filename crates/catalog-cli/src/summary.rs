use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_cli::pipeline::MappingPlan;
use catalog_map::{MappingSummary, PlatformScore};
use catalog_model::{PublishStatus, TransformResult, VualProduct};

pub fn print_plan(plan: &MappingPlan) {
    let how = if plan.detected { "detected" } else { "selected" };
    println!("Platform: {} ({how})", plan.platform);
    print_mapping(&plan.summary);
}

fn print_mapping(summary: &MappingSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Field")]);
    apply_table_style(&mut table);
    for entry in &summary.mapped {
        table.add_row(vec![
            Cell::new(&entry.column),
            field_cell(entry.field.as_str(), entry.field.is_required()),
        ]);
    }
    for column in &summary.unmapped_columns {
        table.add_row(vec![dim_cell(column), dim_cell("-")]);
    }
    println!("{table}");
    if !summary.missing_required.is_empty() {
        let missing: Vec<&str> = summary
            .missing_required
            .iter()
            .map(|field| field.as_str())
            .collect();
        eprintln!("Missing required fields: {}", missing.join(", "));
    }
    if !summary.absent_columns.is_empty() {
        eprintln!(
            "Mapped columns not in file: {}",
            summary.absent_columns.join(", ")
        );
    }
}

pub fn print_scores(scores: &[PlatformScore]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Platform"),
        header_cell("Matched"),
        header_cell("Signature"),
        header_cell("Score"),
        header_cell("Candidate"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for score in scores {
        table.add_row(vec![
            platform_cell(score.platform.as_str()),
            Cell::new(score.match_count()),
            Cell::new(score.signature_len),
            Cell::new(format!("{:.2}", score.score())),
            check_cell(score.is_candidate()),
        ]);
    }
    println!("{table}");
}

pub fn print_result(result: &TransformResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Product"),
        header_cell("Category"),
        header_cell("Price"),
        header_cell("Status"),
        header_cell("Variants"),
        header_cell("Images"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for product in &result.products {
        table.add_row(product_row(product));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(result.variant_count()).add_attribute(Attribute::Bold),
        Cell::new(result.image_count()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "Products: {}  Errors: {}  Warnings: {}",
        result.product_count(),
        result.errors.len(),
        result.warnings.len()
    );
    print_issue_table(result);
}

fn product_row(product: &VualProduct) -> Vec<Cell> {
    vec![
        Cell::new(&product.name).add_attribute(Attribute::Bold),
        Cell::new(&product.category),
        Cell::new(format!("{} {}", product.price, product.currency.to_uppercase())),
        status_cell(product.status),
        count_cell(product.variants.len()),
        count_cell(product.images.len()),
    ]
}

fn print_issue_table(result: &TransformResult) {
    if result.errors.is_empty() && result.warnings.is_empty() {
        return;
    }
    let mut issues: Vec<(usize, Cell, &str, &str)> = Vec::new();
    for error in &result.errors {
        let severity = Cell::new("ERROR").fg(Color::Red);
        issues.push((error.row, severity, error.field.as_str(), error.message.as_str()));
    }
    for warning in &result.warnings {
        let severity = Cell::new("WARN").fg(Color::Yellow);
        issues.push((warning.row, severity, warning.field.as_str(), warning.message.as_str()));
    }
    issues.sort_by_key(|issue| issue.0);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for (row, severity, field, message) in issues {
        table.add_row(vec![Cell::new(row), severity, Cell::new(field), Cell::new(message)]);
    }
    println!();
    println!("Issues:");
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn platform_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn field_cell(name: &str, required: bool) -> Cell {
    if required {
        Cell::new(name).add_attribute(Attribute::Bold)
    } else {
        Cell::new(name)
    }
}

fn status_cell(status: PublishStatus) -> Cell {
    match status {
        PublishStatus::Published => Cell::new(status.as_str()).fg(Color::Green),
        PublishStatus::Draft => dim_cell(status.as_str()),
    }
}

fn check_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
