use prettytable::{Cell, Row, Table};

use crate::generator::search::SearchStats;

/// Renders the end-of-run outcome counters as a table.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Outcome"), Cell::new("Count")]));

    let rows = [
        ("Attempts", stats.attempts),
        ("No solution", stats.no_solution),
        ("Too easy", stats.too_easy),
        ("Too hard", stats.too_hard),
        ("Not unique", stats.not_unique),
        ("Empty samples", stats.empty_samples),
    ];

    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}
