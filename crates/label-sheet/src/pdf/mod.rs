//! Vector PDF export
//!
//! Replays a [`LayoutPlan`] against a text emission capability. The exporter
//! never touches PDF objects itself; it only says "put this text, centered,
//! at this physical point".

mod emitter;
pub mod metrics;

pub use emitter::PrintPdfEmitter;

use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::constants::{NO_MFD_TAG, SHEET_TAG};
use crate::context::SheetContext;
use crate::layout::{LayoutPlan, Position};
use crate::types::{FontFamily, FontWeight, RenderConfig, Result};

// =============================================================================
// Font Mapping
// =============================================================================

/// Font family names understood by the PDF backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFont {
    Helvetica,
    Arial,
}

impl PdfFont {
    /// Map a form selector value; unknown values use Helvetica
    pub fn from_selector(value: &str) -> Self {
        match value {
            "arial" => PdfFont::Arial,
            "helvetica" | "inter" | "roboto" | "sf" => PdfFont::Helvetica,
            _ => PdfFont::Helvetica,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "Helvetica",
            PdfFont::Arial => "Arial",
        }
    }
}

impl From<FontFamily> for PdfFont {
    fn from(font: FontFamily) -> Self {
        PdfFont::from_selector(font.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFontStyle {
    Normal,
    Bold,
}

impl PdfFontStyle {
    /// Map a weight selector value; unknown values use bold
    pub fn from_selector(value: &str) -> Self {
        match value {
            "regular" => PdfFontStyle::Normal,
            "semibold" | "bold" => PdfFontStyle::Bold,
            _ => PdfFontStyle::Bold,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PdfFontStyle::Normal => "normal",
            PdfFontStyle::Bold => "bold",
        }
    }
}

impl From<FontWeight> for PdfFontStyle {
    fn from(weight: FontWeight) -> Self {
        PdfFontStyle::from_selector(weight.as_str())
    }
}

// =============================================================================
// Emission
// =============================================================================

/// Places text on a single page measured in centimeters from the top-left
/// corner.
pub trait TextEmitter {
    /// Start the page. Must be called once before any text.
    fn begin_page(&mut self, width_cm: f32, height_cm: f32) -> Result<()>;

    fn set_font(&mut self, font: PdfFont, style: PdfFontStyle, size_pt: f32) -> Result<()>;

    /// Place `text` horizontally centered on `at.x_cm` with its vertical
    /// middle on `at.y_cm`. Lines separated by `\n` are stacked and the whole
    /// block is centered.
    fn text_centered(&mut self, text: &str, at: Position) -> Result<()>;

    /// Finish the document and return its bytes
    fn finish(&mut self) -> Result<Vec<u8>>;
}

/// Drives a [`TextEmitter`] from a layout plan.
///
/// The emitter is handed over ready to use; the exporter is consumed by
/// [`export`](PdfExporter::export) so each export starts from a fresh one.
pub struct PdfExporter<E: TextEmitter> {
    emitter: E,
    context: SheetContext,
}

impl<E: TextEmitter> PdfExporter<E> {
    pub fn new(emitter: E, context: SheetContext) -> Self {
        Self { emitter, context }
    }

    /// Render every non-empty label of `plan` and return the PDF bytes
    pub fn export(mut self, plan: &LayoutPlan, config: &RenderConfig) -> Result<Vec<u8>> {
        let geometry = &plan.geometry;
        let font = PdfFont::from(config.font);
        let style = PdfFontStyle::from(config.weight);

        self.emitter
            .begin_page(geometry.page_width_cm, geometry.page_height_cm)?;
        self.emitter
            .set_font(font, style, self.context.font_size_pt)?;

        let mut placed = 0usize;
        for label in plan.non_empty() {
            self.emitter.text_centered(&label.text, label.center())?;
            placed += 1;
        }

        log::debug!(
            "Placed {} labels using {} {}",
            placed,
            font.name(),
            style.name()
        );

        self.emitter.finish()
    }
}

/// Render `plan` to PDF bytes with the built-in backend
pub fn render_pdf_bytes(
    plan: &LayoutPlan,
    config: &RenderConfig,
    context: &SheetContext,
) -> Result<Vec<u8>> {
    PdfExporter::new(PrintPdfEmitter::new("E248 labels"), context.clone()).export(plan, config)
}

/// Render `plan` and write it to `output_path`
pub async fn export_pdf(
    plan: &LayoutPlan,
    config: &RenderConfig,
    context: &SheetContext,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let plan = plan.clone();
    let config = *config;
    let context = context.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes =
        tokio::task::spawn_blocking(move || render_pdf_bytes(&plan, &config, &context)).await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Saved label sheet to {}", output_path.display());

    Ok(())
}

// =============================================================================
// File Names
// =============================================================================

fn yyyymmdd(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// `{download YYYYMMDD}-E248-{mfd YYYYMMDD | nomfd}.pdf`
pub fn export_filename(download_date: NaiveDate, mfd: Option<NaiveDate>) -> String {
    let mfd_part = mfd.map(yyyymmdd).unwrap_or_else(|| NO_MFD_TAG.to_string());
    format!("{}-{}-{}.pdf", yyyymmdd(download_date), SHEET_TAG, mfd_part)
}

/// File name for a download made today (local time)
pub fn export_filename_today(mfd: Option<NaiveDate>) -> String {
    export_filename(chrono::Local::now().date_naive(), mfd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_mapping() {
        assert_eq!(PdfFont::from(FontFamily::Helvetica), PdfFont::Helvetica);
        assert_eq!(PdfFont::from(FontFamily::Arial), PdfFont::Arial);
        assert_eq!(PdfFont::from(FontFamily::Inter), PdfFont::Helvetica);
        assert_eq!(PdfFont::from(FontFamily::Roboto), PdfFont::Helvetica);
        assert_eq!(PdfFont::from(FontFamily::Sf), PdfFont::Helvetica);
        assert_eq!(PdfFont::from_selector("comic"), PdfFont::Helvetica);
    }

    #[test]
    fn test_weight_mapping() {
        assert_eq!(PdfFontStyle::from(FontWeight::Regular), PdfFontStyle::Normal);
        assert_eq!(PdfFontStyle::from(FontWeight::Semibold), PdfFontStyle::Bold);
        assert_eq!(PdfFontStyle::from(FontWeight::Bold), PdfFontStyle::Bold);
        assert_eq!(PdfFontStyle::from_selector("thin"), PdfFontStyle::Bold);
    }

    #[test]
    fn test_export_filename() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let mfd = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        assert_eq!(export_filename(today, Some(mfd)), "20260501-E248-20260203.pdf");
        assert_eq!(export_filename(today, None), "20260501-E248-nomfd.pdf");
    }
}
