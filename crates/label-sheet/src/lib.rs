//! Layout engine for printable sheets of small repeated labels
//!
//! A sheet is a fixed A4 grid of 31 × 8 identical labels. The same
//! [`LayoutPlan`] feeds the on-screen preview, the printable HTML page and
//! the vector PDF export, so all three agree on where every label sits.

pub mod calibration;
pub mod constants;
pub mod content;
mod context;
pub mod html;
pub mod layout;
mod options;
pub mod pdf;
mod preview;
mod types;

pub use calibration::{
    DisplayMetrics, FixedMetrics, calibration_factor, display_calibration, pixels_per_centimeter,
};
pub use content::{LabelInputs, build_content, clamp_lot, parse_lot, sanitize_lot_field};
pub use context::SheetContext;
pub use layout::{Cell, GridTemplate, LayoutPlan, PageGeometry, PlacedLabel, Position};
pub use options::SheetOptions;
pub use pdf::{
    PdfExporter, PdfFont, PdfFontStyle, PrintPdfEmitter, TextEmitter, export_filename,
    export_filename_today, export_pdf, render_pdf_bytes,
};
pub use preview::PreviewTransform;
pub use types::*;
