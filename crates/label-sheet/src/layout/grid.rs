//! Grid layout calculation
//!
//! Maps a linear label index onto its row/column and physical rectangle.
//! The screen template and the PDF placement both derive from the same
//! [`PageGeometry`], so relative cell placement cannot diverge.

use super::{Cell, PageGeometry, Position, Rect};

// =============================================================================
// Cell Calculations
// =============================================================================

/// Row and column for a linear index, `None` past the last cell
pub fn cell_at(geometry: &PageGeometry, index: usize) -> Option<Cell> {
    if geometry.columns == 0 || index >= geometry.total_cells() {
        return None;
    }
    Some(Cell::new(index / geometry.columns, index % geometry.columns))
}

/// Top-left corner of a cell
pub fn cell_origin(geometry: &PageGeometry, cell: Cell) -> Position {
    Position::new(
        geometry.side_margin_cm + cell.col as f32 * geometry.column_pitch_cm(),
        geometry.top_margin_cm + cell.row as f32 * geometry.row_height_cm,
    )
}

/// Bounds of a cell
pub fn cell_bounds(geometry: &PageGeometry, cell: Cell) -> Rect {
    let origin = cell_origin(geometry, cell);
    Rect::new(
        origin.x_cm,
        origin.y_cm,
        geometry.col_width_cm,
        geometry.row_height_cm,
    )
}

/// Center of a cell, where label text is anchored
pub fn cell_center(geometry: &PageGeometry, cell: Cell) -> Position {
    cell_bounds(geometry, cell).center()
}

/// Iterate every cell in index order
pub fn cells(geometry: &PageGeometry) -> impl Iterator<Item = (usize, Cell)> + '_ {
    (0..geometry.total_cells())
        .filter_map(move |index| cell_at(geometry, index).map(|cell| (index, cell)))
}

// =============================================================================
// Screen Template
// =============================================================================

/// CSS grid template equivalent of the page geometry.
///
/// Columns are separated by the column gap; rows sit flush.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTemplate {
    pub columns: usize,
    pub col_width_cm: f32,
    pub rows: usize,
    pub row_height_cm: f32,
    pub col_gap_cm: f32,
}

impl GridTemplate {
    pub fn from_geometry(geometry: &PageGeometry) -> Self {
        Self {
            columns: geometry.columns,
            col_width_cm: geometry.col_width_cm,
            rows: geometry.rows,
            row_height_cm: geometry.row_height_cm,
            col_gap_cm: geometry.col_gap_cm,
        }
    }

    /// `grid-template-columns` value
    pub fn css_columns(&self) -> String {
        format!("repeat({}, {}cm)", self.columns, self.col_width_cm)
    }

    /// `grid-template-rows` value
    pub fn css_rows(&self) -> String {
        format!("repeat({}, {}cm)", self.rows, self.row_height_cm)
    }

    /// `gap` value (row gap, column gap)
    pub fn css_gap(&self) -> String {
        format!("0 {}cm", self.col_gap_cm)
    }

    /// Inline style for the grid container
    pub fn css_style(&self) -> String {
        format!(
            "grid-template-columns: {}; grid-template-rows: {}; gap: {};",
            self.css_columns(),
            self.css_rows(),
            self.css_gap()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_cell_at_bounds() {
        let g = PageGeometry::E248;
        assert_eq!(cell_at(&g, 0), Some(Cell::new(0, 0)));
        assert_eq!(cell_at(&g, 7), Some(Cell::new(0, 7)));
        assert_eq!(cell_at(&g, 8), Some(Cell::new(1, 0)));
        assert_eq!(cell_at(&g, 247), Some(Cell::new(30, 7)));
        assert_eq!(cell_at(&g, 248), None);
    }

    #[test]
    fn test_cell_origin() {
        let g = PageGeometry::E248;
        let first = cell_origin(&g, Cell::new(0, 0));
        assert!((first.x_cm - 1.1).abs() < EPS);
        assert!((first.y_cm - 1.0).abs() < EPS);

        let last = cell_origin(&g, Cell::new(30, 7));
        assert!((last.x_cm - (1.1 + 7.0 * 2.4)).abs() < EPS);
        assert!((last.y_cm - (1.0 + 30.0 * 0.9)).abs() < EPS);
    }

    #[test]
    fn test_cell_center() {
        let g = PageGeometry::E248;
        let center = cell_center(&g, Cell::new(2, 3));
        assert!((center.x_cm - (1.1 + 3.0 * 2.4 + 1.0)).abs() < EPS);
        assert!((center.y_cm - (1.0 + 2.0 * 0.9 + 0.45)).abs() < EPS);
    }

    #[test]
    fn test_cells_iterates_in_order() {
        let g = PageGeometry::E248;
        let all: Vec<_> = cells(&g).collect();
        assert_eq!(all.len(), 248);
        assert_eq!(all[9], (9, Cell::new(1, 1)));
    }

    #[test]
    fn test_grid_template_css() {
        let template = GridTemplate::from_geometry(&PageGeometry::E248);
        assert_eq!(template.css_columns(), "repeat(8, 2cm)");
        assert_eq!(template.css_rows(), "repeat(31, 0.9cm)");
        assert_eq!(template.css_gap(), "0 0.4cm");
    }
}
