//! Grid topology and winning-line generation.
//!
//! A topology owns the grid dimensions and the derived set of winning
//! lines. Lines are a pure function of (rows, columns, run length) and
//! are regenerated from scratch on every dimension change. The run
//! length is fixed at creation: growing the grid adds more runs of that
//! length, it never lengthens existing ones.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Run length used by [`Topology::new`].
pub const DEFAULT_RUN_LENGTH: usize = 3;

/// Orientation of a winning line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum LineKind {
    /// Horizontal run.
    Row,
    /// Vertical run.
    Column,
    /// Down-right diagonal run.
    Diagonal,
    /// Down-left diagonal run.
    AntiDiagonal,
}

/// A winning line: an ordered run of distinct board indices that ends
/// the game when uniformly occupied by one player's mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: Vec<usize>,
}

impl Line {
    fn new(kind: LineKind, cells: Vec<usize>) -> Self {
        Self { kind, cells }
    }

    /// Returns the orientation of this line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the board indices covered by this line.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }
}

/// Errors that can occur when creating a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TopologyError {
    /// Rows or columns below the minimum of 1.
    #[display("Invalid dimensions {_0}x{_1}: rows and columns must be at least 1")]
    InvalidDimensions(usize, usize),

    /// Run length below the minimum of 1.
    #[display("Invalid run length {_0}: must be at least 1")]
    InvalidRunLength(usize),
}

impl std::error::Error for TopologyError {}

/// Grid dimensions plus the derived winning-line set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    rows: usize,
    columns: usize,
    run_length: usize,
    lines: Vec<Line>,
}

impl Topology {
    /// Creates a topology with the standard run length of 3.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidDimensions`] when rows or columns
    /// are below 1.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Result<Self, TopologyError> {
        Self::with_run_length(rows, columns, DEFAULT_RUN_LENGTH)
    }

    /// Creates a topology with an explicit run length.
    ///
    /// A run length that exceeds both dimensions produces an empty line
    /// set; games on such a grid can only end in a draw.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidDimensions`] when rows or columns
    /// are below 1, or [`TopologyError::InvalidRunLength`] when the run
    /// length is below 1.
    #[instrument]
    pub fn with_run_length(
        rows: usize,
        columns: usize,
        run_length: usize,
    ) -> Result<Self, TopologyError> {
        if rows < 1 || columns < 1 {
            return Err(TopologyError::InvalidDimensions(rows, columns));
        }
        if run_length < 1 {
            return Err(TopologyError::InvalidRunLength(run_length));
        }
        Ok(Self {
            rows,
            columns,
            run_length,
            lines: generate_lines(rows, columns, run_length),
        })
    }

    /// Returns the row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the run length required for a win.
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Returns the total cell count (rows × columns).
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns the winning lines in enumeration order.
    ///
    /// This order is also the win tie-break order: when several lines
    /// are satisfied at once, the first one decides the winner.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Grows the grid by one row and regenerates the full line set.
    #[instrument(skip(self), fields(rows = self.rows, columns = self.columns))]
    pub fn add_row(mut self) -> Self {
        self.rows += 1;
        self.lines = generate_lines(self.rows, self.columns, self.run_length);
        self
    }

    /// Grows the grid by one column and regenerates the full line set.
    #[instrument(skip(self), fields(rows = self.rows, columns = self.columns))]
    pub fn add_column(mut self) -> Self {
        self.columns += 1;
        self.lines = generate_lines(self.rows, self.columns, self.run_length);
        self
    }
}

impl Default for Topology {
    /// Classic 3×3 grid with run length 3.
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            run_length: DEFAULT_RUN_LENGTH,
            lines: generate_lines(3, 3, DEFAULT_RUN_LENGTH),
        }
    }
}

/// Generates all winning lines for the given dimensions and run length.
///
/// Enumeration order: horizontal runs top-to-bottom then left-to-right,
/// vertical runs left-to-right then top-to-bottom, down-right diagonal
/// runs, down-left diagonal runs. For a 3×3 grid with run length 3 this
/// yields the classic 8 combinations.
fn generate_lines(rows: usize, columns: usize, run_length: usize) -> Vec<Line> {
    let at = |row: usize, col: usize| row * columns + col;
    // Number of run starting offsets that fit in a span; zero when the
    // span is shorter than the run.
    let fits = |span: usize| span.saturating_sub(run_length - 1);

    let mut lines = Vec::new();
    for row in 0..rows {
        for col in 0..fits(columns) {
            let cells = (0..run_length).map(|i| at(row, col + i)).collect();
            lines.push(Line::new(LineKind::Row, cells));
        }
    }
    for col in 0..columns {
        for row in 0..fits(rows) {
            let cells = (0..run_length).map(|i| at(row + i, col)).collect();
            lines.push(Line::new(LineKind::Column, cells));
        }
    }
    for row in 0..fits(rows) {
        for col in 0..fits(columns) {
            let cells = (0..run_length).map(|i| at(row + i, col + i)).collect();
            lines.push(Line::new(LineKind::Diagonal, cells));
        }
    }
    for row in 0..fits(rows) {
        for col in (run_length - 1)..columns {
            let cells = (0..run_length).map(|i| at(row + i, col - i)).collect();
            lines.push(Line::new(LineKind::AntiDiagonal, cells));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_classic_grid_line_order() {
        let topology = Topology::new(3, 3).expect("valid dimensions");
        let cells: Vec<Vec<usize>> = topology
            .lines()
            .iter()
            .map(|line| line.cells().to_vec())
            .collect();
        assert_eq!(
            cells,
            vec![
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ],
        );
    }

    #[test]
    fn test_classic_grid_covers_every_kind() {
        let topology = Topology::default();
        for kind in LineKind::iter() {
            let count = topology
                .lines()
                .iter()
                .filter(|line| line.kind() == kind)
                .count();
            let expected = match kind {
                LineKind::Row | LineKind::Column => 3,
                LineKind::Diagonal | LineKind::AntiDiagonal => 1,
            };
            assert_eq!(count, expected, "unexpected {kind} line count");
        }
    }

    #[test]
    fn test_single_row_grid_has_no_vertical_or_diagonal_lines() {
        let topology = Topology::new(1, 5).expect("valid dimensions");
        assert!(
            topology
                .lines()
                .iter()
                .all(|line| line.kind() == LineKind::Row)
        );
        assert_eq!(topology.lines().len(), 3);
    }

    #[test]
    fn test_run_longer_than_grid_yields_no_lines() {
        let topology = Topology::with_run_length(2, 2, 3).expect("valid dimensions");
        assert!(topology.lines().is_empty());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Topology::new(0, 3),
            Err(TopologyError::InvalidDimensions(0, 3)),
        );
        assert_eq!(
            Topology::new(3, 0),
            Err(TopologyError::InvalidDimensions(3, 0)),
        );
    }

    #[test]
    fn test_rejects_zero_run_length() {
        assert_eq!(
            Topology::with_run_length(3, 3, 0),
            Err(TopologyError::InvalidRunLength(0)),
        );
    }
}
