//! Terminal rendering of command results.
//!
//! Each command has its own presentation: plain lines, a comma-joined list or
//! a grid with headers. Rendering never fails; empty results produce an
//! explanatory message instead.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::catalog::Command;
use crate::db::{ResultSet, Scalar};

const INCOMPLETE_HEADERS: [&str; 5] = ["Student ID", "First Name", "Last Name", "Email", "Course Name"];
const FAILING_HEADERS: [&str; 6] = ["Student ID", "First Name", "Last Name", "Email", "Course Name", "Mark"];

/// Render `result` the way `command` presents it.
///
/// `args` are the validated argument tokens, used in headings and empty-state
/// messages.
pub fn render(command: Command, args: &[String], result: &ResultSet) -> String {
    let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or_default();

    match command {
        Command::Demo => result
            .rows()
            .iter()
            .map(|row| join_values(row, " "))
            .collect::<Vec<_>>()
            .join("\n"),
        Command::ViewSubjects => {
            if result.is_empty() {
                format!("No subjects found for student {}", arg(0))
            } else {
                format!("Subjects taken by student {}: {}", arg(0), first_column_list(result))
            }
        }
        Command::LookupAddress => match result.rows().first() {
            Some(row) => format!("Address: {}", join_values(row, ", ")),
            None => format!("No address found for {} {}", arg(0), arg(1)),
        },
        Command::ListReviews => {
            if result.is_empty() {
                return format!("No reviews found for student {}", arg(0));
            }
            let labels = ["Completeness", "Efficiency", "Style", "Documentation", "Review"];
            result
                .rows()
                .iter()
                .map(|row| {
                    labels
                        .iter()
                        .zip(row)
                        .map(|(label, value)| format!("{}: {}", label, value))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Command::ListCourses => {
            if result.is_empty() {
                format!("No courses found for teacher {}", arg(0))
            } else {
                format!("Courses taught by teacher {}: {}", arg(0), first_column_list(result))
            }
        }
        Command::ListIncomplete => {
            if result.is_empty() {
                "No students found who haven't completed their course.".to_string()
            } else {
                grid_table(&INCOMPLETE_HEADERS, result.rows())
            }
        }
        Command::ListFailing => {
            if result.is_empty() {
                "No students found with a mark of 30 or below.".to_string()
            } else {
                grid_table(&FAILING_HEADERS, result.rows())
            }
        }
        Command::Exit => String::new(),
    }
}

fn join_values(row: &[Scalar], separator: &str) -> String {
    row.iter().map(Scalar::to_string).collect::<Vec<_>>().join(separator)
}

fn first_column_list(result: &ResultSet) -> String {
    result
        .column_values(0)
        .map(Scalar::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format rows as a bordered grid with a header row.
///
/// Numbers are right-aligned, everything else left-aligned.
pub fn grid_table(headers: &[&str], rows: &[Vec<Scalar>]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_style(TableComponent::LeftBorderIntersections, '+')
        .set_style(TableComponent::RightBorderIntersections, '+')
        .set_header(headers.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());

    for row in rows {
        table.add_row(row.iter().map(grid_cell).collect::<Vec<_>>());
    }

    format!("{table}")
}

fn grid_cell(value: &Scalar) -> Cell {
    let cell = Cell::new(value);
    match value {
        Scalar::Integer(_) | Scalar::Real(_) => cell.set_alignment(CellAlignment::Right),
        _ => cell,
    }
}
