use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{
    CampaignOutcome, EstimateOutcome, FieldOutcome, RegisterOutcome, SegmentsOutcome, TagRow,
};

pub fn print_segments(outcome: &SegmentsOutcome) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Characters typed"), Cell::new(outcome.characters)]);
    table.add_row(vec![
        Cell::new("Effective length"),
        Cell::new(outcome.result.effective_length),
    ]);
    table.add_row(vec![
        Cell::new("Segments").add_attribute(Attribute::Bold),
        Cell::new(outcome.result.segment_count).add_attribute(Attribute::Bold),
    ]);
    let tags = if outcome.tags.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(outcome.tags.join(", "))
    };
    table.add_row(vec![Cell::new("Merge tags"), tags]);
    println!("{table}");
    if !outcome.duplicate_tags.is_empty() {
        eprintln!("Warnings:");
        for tag in &outcome.duplicate_tags {
            eprintln!("- {tag} can only be used once per message");
        }
    }
}

pub fn print_tags(rows: &[TagRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tag"),
        header_cell("Label"),
        header_cell("Counted as"),
        header_cell("Length"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        let replacement = if row.replacement.is_empty() {
            dim_cell("(tag text)")
        } else {
            Cell::new(&row.replacement)
        };
        table.add_row(vec![
            Cell::new(&row.tag)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&row.label),
            replacement,
            Cell::new(row.counted_length),
        ]);
    }
    println!("{table}");
}

pub fn print_field(outcome: &FieldOutcome) {
    match &outcome.message {
        None => {
            println!("{}: ok", outcome.field);
            if let Some(normalized) = &outcome.normalized {
                println!("normalized: {normalized}");
            }
        }
        Some(message) => println!("{}: {message}", outcome.field),
    }
}

pub fn print_register(outcome: &RegisterOutcome) {
    if outcome.valid {
        println!("Registration details are valid.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for error in outcome.report.iter() {
        let problem = if error.violation.is_required() {
            Cell::new(error.message()).fg(Color::Yellow)
        } else {
            Cell::new(error.message()).fg(Color::Red)
        };
        table.add_row(vec![Cell::new(error.field), problem]);
    }
    println!("{table}");
    eprintln!("{} field(s) need attention", outcome.report.len());
}

pub fn print_estimate(outcome: &EstimateOutcome) {
    let estimate = &outcome.estimate;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Segments per message"), Cell::new(estimate.segment_count)]);
    table.add_row(vec![Cell::new("Contacts"), Cell::new(estimate.contact_count)]);
    table.add_row(vec![Cell::new("Total segments"), Cell::new(estimate.total_segments)]);
    table.add_row(vec![
        Cell::new("Cost per segment"),
        Cell::new(format!("{:.2} {}", estimate.cost_per_segment, outcome.currency)),
    ]);
    table.add_row(vec![
        Cell::new("Total cost").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2} {}", estimate.total_cost, outcome.currency))
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Current balance"), Cell::new(estimate.current_balance)]);
    table.add_row(vec![
        Cell::new("Remaining balance"),
        balance_cell(estimate.remaining_balance),
    ]);
    println!("{table}");
    if let Some(problem) = &outcome.problem {
        eprintln!("Cannot send: {problem}");
    }
}

pub fn print_campaign(outcome: &CampaignOutcome, currency: &str) {
    println!("States: {}", outcome.states.join(" -> "));
    if let Some(receipt) = &outcome.receipt {
        let payload = &receipt.payload;
        let mut table = Table::new();
        table.set_header(vec![header_cell("Field"), header_cell("Value")]);
        apply_table_style(&mut table);
        table.add_row(vec![Cell::new("Campaign"), Cell::new(&receipt.campaign_id)]);
        table.add_row(vec![Cell::new("Sender"), Cell::new(&payload.sender)]);
        table.add_row(vec![Cell::new("Contacts"), Cell::new(payload.contact_count)]);
        table.add_row(vec![Cell::new("Segments"), Cell::new(payload.segment_count)]);
        table.add_row(vec![
            Cell::new("Total cost"),
            Cell::new(format!("{:.2} {currency}", payload.total_cost)),
        ]);
        let scheduled = match payload.scheduled_at {
            Some(at) => Cell::new(at.to_rfc3339()),
            None => dim_cell("now"),
        };
        table.add_row(vec![Cell::new("Scheduled"), scheduled]);
        println!("{table}");
    }
    if let Some(error) = &outcome.error {
        eprintln!("Blocked: {error}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn balance_cell(value: f64) -> Cell {
    if value < 0.0 {
        Cell::new(value).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::Green)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
