//! Terminal summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunOutcome;

const CLAMP_AUDIT_LIMIT: usize = 20;

pub fn print_summary(outcome: &RunOutcome) {
    println!("Rows: {}", outcome.rows);
    if let Some(path) = &outcome.outputs.processed_csv {
        println!("Processed file: {}", path.display());
    }
    if let Some(path) = &outcome.outputs.database {
        println!("Database: {}", path.display());
    }
    for chart in &outcome.outputs.charts {
        println!("Chart: {}", chart.display());
    }

    print_renames(outcome);
    print_clamp_audit(outcome);
    print_numeric(outcome);
    print_frequencies(outcome);
    print_correlation(outcome);
    print_grouped(outcome);

    if !outcome.errors.is_empty() {
        eprintln!("Errors:");
        for error in &outcome.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_renames(outcome: &RunOutcome) {
    if outcome.renames.is_empty() {
        return;
    }
    let mut table = styled_table(vec!["Original column", "Normalized"]);
    for rename in &outcome.renames {
        table.add_row(vec![
            Cell::new(&rename.original),
            Cell::new(&rename.normalized),
        ]);
    }
    println!();
    println!("Normalized columns:");
    println!("{table}");
}

fn print_clamp_audit(outcome: &RunOutcome) {
    println!();
    if outcome.clamped.is_empty() {
        println!("Cost audit: no negative {} values found", outcome.cost_column);
        return;
    }
    let mut table = styled_table(vec!["Row", "Original value"]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for clamp in outcome.clamped.iter().take(CLAMP_AUDIT_LIMIT) {
        table.add_row(vec![
            Cell::new(clamp.row),
            Cell::new(format!("{:.2}", clamp.original)).fg(Color::Red),
        ]);
    }
    println!(
        "Cost audit: {} negative {} value(s) clamped to zero:",
        outcome.clamped.len(),
        outcome.cost_column
    );
    println!("{table}");
    if outcome.clamped.len() > CLAMP_AUDIT_LIMIT {
        println!(
            "... and {} more",
            outcome.clamped.len() - CLAMP_AUDIT_LIMIT
        );
    }
}

fn print_numeric(outcome: &RunOutcome) {
    if outcome.numeric.is_empty() {
        return;
    }
    let mut table = styled_table(vec!["Column", "Count", "Mean", "Std", "Min", "Max"]);
    for idx in 1..=5 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for summary in &outcome.numeric {
        table.add_row(vec![
            Cell::new(&summary.column),
            Cell::new(summary.count),
            stat_cell(summary.mean),
            stat_cell(summary.std),
            stat_cell(summary.min),
            stat_cell(summary.max),
        ]);
    }
    println!();
    println!("Numeric summary:");
    println!("{table}");
}

fn print_frequencies(outcome: &RunOutcome) {
    let has_counts = outcome.frequencies.iter().any(|(_, counts)| !counts.is_empty());
    if !has_counts {
        return;
    }
    let mut table = styled_table(vec!["Column", "Value", "Count"]);
    align_column(&mut table, 2, CellAlignment::Right);
    for (column, counts) in &outcome.frequencies {
        for count in counts {
            table.add_row(vec![
                Cell::new(column),
                Cell::new(&count.value),
                Cell::new(count.count),
            ]);
        }
    }
    println!();
    println!("Categorical counts:");
    println!("{table}");
}

fn print_correlation(outcome: &RunOutcome) {
    let matrix = &outcome.correlation;
    if matrix.is_empty() {
        return;
    }
    let mut header = vec![header_cell("")];
    header.extend(matrix.columns.iter().map(|name| header_cell(name)));
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for idx in 1..=matrix.columns.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for (i, name) in matrix.columns.iter().enumerate() {
        let mut row = vec![header_cell(name)];
        for j in 0..matrix.columns.len() {
            row.push(stat_cell(matrix.get(i, j)));
        }
        table.add_row(row);
    }
    println!();
    println!("Correlation matrix:");
    println!("{table}");
}

fn print_grouped(outcome: &RunOutcome) {
    let has_groups = outcome.grouped.iter().any(|(_, means)| !means.is_empty());
    if !has_groups {
        return;
    }
    let mut table = styled_table(vec!["Grouped by", "Group", "Count", "Mean cost"]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (column, means) in &outcome.grouped {
        for mean in means {
            table.add_row(vec![
                Cell::new(column),
                Cell::new(&mean.group),
                Cell::new(mean.count),
                Cell::new(format!("{:.2}", mean.mean)),
            ]);
        }
    }
    println!();
    println!("Mean {} by category:", outcome.cost_column);
    println!("{table}");
}

fn styled_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
