//! Frozen-cell board storage.
//!
//! The settled board state is an unordered set of frozen cells keyed by
//! unique position. Coordinates are (column, row) with row 0 at the floor
//! and rows increasing upward; columns run `0..width`.
//!
//! There is deliberately no ceiling: a cell frozen above the top row is
//! representable, matching the collision rule that only checks the floor
//! on the vertical axis.

use std::collections::HashMap;

use crate::types::PieceKind;

/// Position of a cell on the grid.
pub type CellPos = (i8, i8);

/// Settled board state: dimensions plus the frozen-cell set.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: i8,
    height: i8,
    cells: HashMap<CellPos, PieceKind>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: i8, height: i8) -> Self {
        assert!(width > 0, "board width must be positive, got {width}");
        assert!(height > 0, "board height must be positive, got {height}");
        Self {
            width,
            height,
            cells: HashMap::new(),
        }
    }

    pub fn width(&self) -> i8 {
        self.width
    }

    pub fn height(&self) -> i8 {
        self.height
    }

    /// Change the board dimensions.
    ///
    /// Frozen cells are kept as-is; callers are expected to recompute any
    /// derived layout afterwards.
    pub fn resize(&mut self, width: i8, height: i8) {
        assert!(width > 0, "board width must be positive, got {width}");
        assert!(height > 0, "board height must be positive, got {height}");
        self.width = width;
        self.height = height;
    }

    /// Whether a frozen cell occupies the given position.
    pub fn is_occupied(&self, pos: CellPos) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Kind of the frozen cell at the given position, if any.
    pub fn get(&self, pos: CellPos) -> Option<PieceKind> {
        self.cells.get(&pos).copied()
    }

    /// Freeze a cell.
    ///
    /// Positions are unique by construction; overwriting an occupied cell
    /// would mean the collision check upstream failed.
    pub fn freeze(&mut self, pos: CellPos, kind: PieceKind) {
        let previous = self.cells.insert(pos, kind);
        debug_assert!(previous.is_none(), "froze two cells at {pos:?}");
    }

    /// Number of frozen cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all frozen cells.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, PieceKind)> + '_ {
        self.cells.iter().map(|(&pos, &kind)| (pos, kind))
    }

    /// Remove all frozen cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Clear every full row and compact the survivors.
    ///
    /// A row is full when its frozen-cell count reaches the board width.
    /// Each surviving cell drops by the number of cleared rows strictly
    /// below it, which handles simultaneous non-contiguous clears.
    ///
    /// Returns the cleared row indices in ascending order.
    pub fn clear_full_rows(&mut self) -> Vec<i8> {
        let mut row_counts: HashMap<i8, i8> = HashMap::new();
        for (_, row) in self.cells.keys() {
            *row_counts.entry(*row).or_insert(0) += 1;
        }

        let mut full_rows: Vec<i8> = row_counts
            .into_iter()
            .filter(|&(_, count)| count >= self.width)
            .map(|(row, _)| row)
            .collect();
        full_rows.sort_unstable();

        if full_rows.is_empty() {
            return full_rows;
        }

        let survivors: HashMap<CellPos, PieceKind> = self
            .cells
            .drain()
            .filter(|((_, row), _)| !full_rows.contains(row))
            .map(|((col, row), kind)| {
                let cleared_below = full_rows.iter().filter(|&&r| r < row).count() as i8;
                ((col, row - cleared_below), kind)
            })
            .collect();
        self.cells = survivors;

        full_rows
    }
}
