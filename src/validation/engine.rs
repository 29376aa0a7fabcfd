//! Validation Engine
//!
//! The four board checks plus the diagnostic layer that names the row or
//! column behind each failure.

use log::debug;
use serde::Serialize;

use crate::board::{Board, Cell, INTERIOR, SIZE};
use crate::validation::visibility::{
    count_from_left, count_from_right, visible_from_left, visible_from_right, VisibilityPolicy,
};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic message for a validation issue.
///
/// `row` and `col` are 0-based board coordinates; a row-wide issue carries
/// only `row`, a column-wide issue only `col`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a board
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, row: Option<usize>, col: Option<usize>, message: String) {
        self.diagnostics.push(Diagnostic {
            row,
            col,
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, row: Option<usize>, col: Option<usize>, message: String) {
        self.diagnostics.push(Diagnostic {
            row,
            col,
            message,
            severity: Severity::Warning,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// True when no unresolved marker remains anywhere on the board.
pub fn is_complete(board: &Board) -> bool {
    board.rows().iter().flatten().all(|cell| !cell.is_unresolved())
}

/// True when every interior row holds distinct building heights.
pub fn row_uniqueness(board: &Board) -> bool {
    board.interior_rows().all(|(_, row)| distinct_heights(row))
}

/// True when every left/right hint matches the visible count of its row.
///
/// A '*' border imposes no constraint. Both sides are checked
/// independently; either side failing fails the row.
pub fn row_visibility(board: &Board, policy: VisibilityPolicy) -> bool {
    board.interior_rows().all(|(i, row)| {
        let left_ok = board
            .left_hint(i)
            .map_or(true, |hint| visible_from_left(row, hint, policy));
        let right_ok = board
            .right_hint(i)
            .map_or(true, |hint| visible_from_right(row, hint, policy));
        left_ok && right_ok
    })
}

/// Uniqueness and visibility applied to the columns via transposition.
pub fn column_checks(board: &Board, policy: VisibilityPolicy) -> bool {
    let transposed = board.transpose();
    row_uniqueness(&transposed) && row_visibility(&transposed, policy)
}

/// Overall verdict: all four checks must pass.
///
/// The checks are independent predicates; each is evaluated on every call
/// rather than short-circuiting, so an incomplete board still reports the
/// other checks truthfully in the debug log.
pub fn check_skyscrapers(board: &Board, policy: VisibilityPolicy) -> bool {
    let columns = column_checks(board, policy);
    let complete = is_complete(board);
    let visibility = row_visibility(board, policy);
    let uniqueness = row_uniqueness(board);
    debug!(
        "columns={columns} complete={complete} visibility={visibility} uniqueness={uniqueness}"
    );
    columns && complete && visibility && uniqueness
}

/// Run all checks and report a diagnostic for every concrete failure.
///
/// Agrees with [`check_skyscrapers`]: the result is valid exactly when the
/// boolean verdict is true. Digits outside the 1-5 height range are
/// format-legal and reported as warnings, which do not affect validity.
pub fn validate_board(board: &Board, policy: VisibilityPolicy) -> ValidationResult {
    let mut result = ValidationResult::new();

    scan_cells(board, &mut result);
    check_lines(board, Axis::Row, policy, &mut result);
    check_lines(&board.transpose(), Axis::Column, policy, &mut result);

    result
}

/// Which orientation a set of line checks reports against.
#[derive(Clone, Copy)]
enum Axis {
    Row,
    Column,
}

impl Axis {
    fn line_name(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }

    fn near_edge(self) -> &'static str {
        match self {
            Axis::Row => "left",
            Axis::Column => "top",
        }
    }

    fn far_edge(self) -> &'static str {
        match self {
            Axis::Row => "right",
            Axis::Column => "bottom",
        }
    }

    fn coords(self, index: usize) -> (Option<usize>, Option<usize>) {
        match self {
            Axis::Row => (Some(index), None),
            Axis::Column => (None, Some(index)),
        }
    }
}

/// Report unresolved cells and out-of-range digits cell by cell.
fn scan_cells(board: &Board, result: &mut ValidationResult) {
    for row in 0..SIZE {
        for col in 0..SIZE {
            match board.cell(row, col) {
                Cell::Unresolved => result.add_error(
                    Some(row),
                    Some(col),
                    format!("unresolved cell at row {row}, column {col}"),
                ),
                Cell::Digit(d) if !(1..=5).contains(&d) => result.add_warning(
                    Some(row),
                    Some(col),
                    format!("digit {d} at row {row}, column {col} is outside the 1-5 range"),
                ),
                _ => {}
            }
        }
    }
}

/// Uniqueness and hint diagnostics for each interior line of `board`.
///
/// Called once with the board itself (rows) and once with its transpose
/// (columns); `axis` selects the coordinate and edge wording.
fn check_lines(board: &Board, axis: Axis, policy: VisibilityPolicy, result: &mut ValidationResult) {
    let name = axis.line_name();

    for (i, line) in board.interior_rows() {
        let mut seen = [false; 10];
        for cell in &line[INTERIOR] {
            if let Some(height) = cell.digit() {
                if seen[height as usize] {
                    let (row, col) = axis.coords(i);
                    result.add_error(row, col, format!("duplicate height {height} in {name} {i}"));
                } else {
                    seen[height as usize] = true;
                }
            }
        }

        if let Some(hint) = board.left_hint(i) {
            let observed = count_from_left(line, policy);
            if observed != hint as usize {
                let (row, col) = axis.coords(i);
                result.add_error(
                    row,
                    col,
                    format!(
                        "{} hint {hint} on {name} {i} not satisfied ({observed} visible)",
                        axis.near_edge()
                    ),
                );
            }
        }

        if let Some(hint) = board.right_hint(i) {
            let observed = count_from_right(line, policy);
            if observed != hint as usize {
                let (row, col) = axis.coords(i);
                result.add_error(
                    row,
                    col,
                    format!(
                        "{} hint {hint} on {name} {i} not satisfied ({observed} visible)",
                        axis.far_edge()
                    ),
                );
            }
        }
    }
}

/// Distinct-heights predicate for one line's interior cells.
fn distinct_heights(line: &[Cell; SIZE]) -> bool {
    let mut seen = [false; 10];
    for cell in &line[INTERIOR] {
        if let Some(height) = cell.digit() {
            if seen[height as usize] {
                return false;
            }
            seen[height as usize] = true;
        }
    }
    true
}
