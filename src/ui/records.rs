//! Terminal rendering of timesheet rows and Pareto tables.

use crate::core::filter::total_hours;
use crate::core::pareto::ParetoRow;
use crate::models::record::ActivityRecord;
use crate::utils::colors::{HIGHLIGHT, RESET, color_for_duration};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

/// Print records as a table. Rows mentioning `highlight` are coloured.
pub fn print_records(records: &[ActivityRecord], highlight: Option<&str>) {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Shift"),
        Column::left("Lane"),
        Column::left("Start"),
        Column::left("End"),
        Column::left("Description"),
        Column::right("Hours"),
    ]);

    for r in records {
        table.add_row(vec![
            r.date.clone(),
            r.shift.clone(),
            r.lane.to_string(),
            r.start_time.clone(),
            r.end_time.clone(),
            r.description.clone(),
            format!("{:.2}", r.duration_hours),
        ]);
    }

    let (header, lines) = table.render_lines();
    println!("{header}");
    println!("{}", "-".repeat(header.chars().count()));

    for (r, line) in records.iter().zip(lines) {
        let marked = highlight.is_some_and(|k| !k.trim().is_empty() && r.mentions(k));
        if marked {
            println!("{HIGHLIGHT}{line}{RESET}");
        } else {
            println!("{}{line}{RESET}", color_for_duration(r.duration_hours));
        }
    }

    println!("\nTotal: {} ({} rows)", format_hours(total_hours(records)), records.len());
}

pub fn print_pareto(rows: &[ParetoRow]) {
    let mut table = Table::new(vec![
        Column::left("Description"),
        Column::right("Hours"),
        Column::right("Cumulative %"),
    ]);

    for p in rows {
        table.add_row(vec![
            p.description.clone(),
            format!("{:.2}", p.hours),
            format!("{:.2}", p.cumulative_pct),
        ]);
    }

    print!("{}", table.render());
}
