//! Shared constants for the label sheet
//!
//! This module centralizes the physical page measurements, unit conversion
//! factors and calibration values used by every renderer.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f32 = 2.54;

/// Points per centimeter (1 inch = 72 points, 1 inch = 2.54cm)
pub const POINTS_PER_CM: f32 = 72.0 / CM_PER_INCH; // ≈ 28.3465

/// Convert centimeters to points
#[inline]
pub fn cm_to_pt(cm: f32) -> f32 {
    cm * POINTS_PER_CM
}

/// Convert points to centimeters
#[inline]
pub fn pt_to_cm(pt: f32) -> f32 {
    pt / POINTS_PER_CM
}

/// Convert centimeters to screen pixels at the given density
#[inline]
pub fn cm_to_px(cm: f32, px_per_cm: f32) -> f32 {
    cm * px_per_cm
}

// =============================================================================
// Page (A4 portrait)
// =============================================================================

/// Page width in centimeters
pub const PAGE_WIDTH_CM: f32 = 21.0;

/// Page height in centimeters
pub const PAGE_HEIGHT_CM: f32 = 29.7;

/// Left and right margin, each (cm)
pub const PAGE_SIDE_MARGIN_CM: f32 = 1.1;

/// Top margin (cm)
pub const PAGE_TOP_MARGIN_CM: f32 = 1.0;

// =============================================================================
// Label Grid
// =============================================================================

pub const ROWS: usize = 31;

pub const COLUMNS: usize = 8;

/// Number of labels on one sheet
pub const TOTAL_CELLS: usize = ROWS * COLUMNS;

/// Width of one label column (cm)
pub const COL_WIDTH_CM: f32 = 2.0;

/// Gap between adjacent columns (cm). Rows have no gap.
pub const COL_GAP_CM: f32 = 0.4;

/// Height of one label row (cm)
pub const ROW_HEIGHT_CM: f32 = 0.9;

// =============================================================================
// Label Text
// =============================================================================

/// Maximum characters per custom text line
pub const MAX_CHARS: usize = 24;

/// Maximum number of custom text lines
pub const MAX_CUSTOM_LINES: usize = 3;

/// Label font size (points)
pub const FONT_SIZE_PT: f32 = 7.0;

/// Line advance for multi-line labels, as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Default expiry offset (years)
pub const DEFAULT_EXPIRY_YEARS: u32 = 3;

/// Largest accepted expiry offset (years)
pub const MAX_EXPIRY_YEARS: u32 = 50;

pub const MIN_LOT: u8 = 1;

pub const MAX_LOT: u8 = 99;

// =============================================================================
// Screen Calibration
// =============================================================================

/// Pixels per centimeter when the display cannot be measured (96 dpi)
pub const FALLBACK_PX_PER_CM: f32 = 37.8;

/// Calibration for device pixel ratio >= 2 (high density displays render small)
pub const HIGH_DENSITY_CALIBRATION: f32 = 1.15;

/// Calibration for device pixel ratio >= 1 (standard displays render large)
pub const STANDARD_DENSITY_CALIBRATION: f32 = 0.95;

/// Calibration below a device pixel ratio of 1
pub const NEUTRAL_CALIBRATION: f32 = 1.0;

/// Smallest preview scale; the page never shrinks below this
pub const MIN_PREVIEW_SCALE: f32 = 0.25;

// =============================================================================
// Export
// =============================================================================

/// Product tag embedded in exported file names
pub const SHEET_TAG: &str = "E248";

/// File name segment used when no manufacture date is set
pub const NO_MFD_TAG: &str = "nomfd";
