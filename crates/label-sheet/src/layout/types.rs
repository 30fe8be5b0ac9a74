//! Layout data types for the label sheet
//!
//! All lengths are centimeters measured from the top-left corner of the page,
//! with y growing downwards. Renderers convert to their own units and origin.

use crate::constants::*;

/// Fixed physical measurements of the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width_cm: f32,
    pub page_height_cm: f32,
    /// Left and right margin, each
    pub side_margin_cm: f32,
    pub top_margin_cm: f32,
    pub col_width_cm: f32,
    pub col_gap_cm: f32,
    pub row_height_cm: f32,
    pub rows: usize,
    pub columns: usize,
}

impl PageGeometry {
    /// A4 portrait sheet with 31 × 8 labels
    pub const E248: PageGeometry = PageGeometry {
        page_width_cm: PAGE_WIDTH_CM,
        page_height_cm: PAGE_HEIGHT_CM,
        side_margin_cm: PAGE_SIDE_MARGIN_CM,
        top_margin_cm: PAGE_TOP_MARGIN_CM,
        col_width_cm: COL_WIDTH_CM,
        col_gap_cm: COL_GAP_CM,
        row_height_cm: ROW_HEIGHT_CM,
        rows: ROWS,
        columns: COLUMNS,
    };

    /// Total number of cells in the grid
    pub fn total_cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Width between the side margins
    pub fn content_width_cm(&self) -> f32 {
        self.page_width_cm - 2.0 * self.side_margin_cm
    }

    /// Width actually occupied by the columns and the gaps between them
    pub fn grid_width_cm(&self) -> f32 {
        self.columns as f32 * self.col_width_cm
            + self.columns.saturating_sub(1) as f32 * self.col_gap_cm
    }

    /// Height occupied by the rows
    pub fn grid_height_cm(&self) -> f32 {
        self.rows as f32 * self.row_height_cm
    }

    /// Horizontal distance between the left edges of adjacent columns
    pub fn column_pitch_cm(&self) -> f32 {
        self.col_width_cm + self.col_gap_cm
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::E248
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A point on the page in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x_cm: f32,
    pub y_cm: f32,
}

impl Position {
    pub fn new(x_cm: f32, y_cm: f32) -> Self {
        Self { x_cm, y_cm }
    }
}

/// A rectangular area on the page in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x_cm: f32,
    /// Top edge
    pub y_cm: f32,
    pub width_cm: f32,
    pub height_cm: f32,
}

impl Rect {
    pub fn new(x_cm: f32, y_cm: f32, width_cm: f32, height_cm: f32) -> Self {
        Self {
            x_cm,
            y_cm,
            width_cm,
            height_cm,
        }
    }

    pub fn origin(&self) -> Position {
        Position::new(self.x_cm, self.y_cm)
    }

    pub fn right(&self) -> f32 {
        self.x_cm + self.width_cm
    }

    pub fn bottom(&self) -> f32 {
        self.y_cm + self.height_cm
    }

    pub fn center(&self) -> Position {
        Position::new(
            self.x_cm + self.width_cm / 2.0,
            self.y_cm + self.height_cm / 2.0,
        )
    }
}
