//! Table rendering for the console.

use comfy_table::{Cell, CellAlignment, Table};

use courseval_core::{Averages, CourseSummary, Evaluation};

fn number(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

fn average(value: f64) -> Cell {
    number(format!("{value:.2}"))
}

/// Evaluation history, one row per evaluation in insertion order.
pub fn history_table(evaluations: &[Evaluation]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Teacher", "Contents", "Examination"]);

    for e in evaluations {
        table.add_row(vec![number(e.teacher), number(e.contents), number(e.exam)]);
    }

    table
}

/// The four average lines printed under an evaluation summary.
pub fn average_lines(averages: &Averages) -> Vec<String> {
    vec![
        format!("Teacher: {:.2}", averages.teacher),
        format!("Contents: {:.2}", averages.contents),
        format!("Examination: {:.2}", averages.exam),
        format!("Total average: {:.2}", averages.total),
    ]
}

/// A course listing, in whatever order the rows are given.
pub fn course_table(rows: &[CourseSummary<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Code",
        "Name",
        "Evaluations",
        "Teacher",
        "Contents",
        "Exam",
        "Average",
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.code),
            Cell::new(row.name),
            number(row.evaluation_count),
            average(row.averages.teacher),
            average(row.averages.contents),
            average(row.averages.exam),
            average(row.averages.total),
        ]);
    }

    table
}
