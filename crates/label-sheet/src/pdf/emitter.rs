use printpdf::*;

use super::metrics::{middle_offset_pt, text_width_pt};
use super::{PdfFont, PdfFontStyle, TextEmitter};
use crate::constants::{LINE_HEIGHT_FACTOR, cm_to_pt};
use crate::layout::Position;
use crate::types::{LabelError, Result};

/// [`TextEmitter`] backed by `printpdf` using the standard Helvetica faces.
///
/// Arial is not one of the standard fonts; viewers substitute Helvetica for
/// it, so both names are written with the Helvetica metrics.
pub struct PrintPdfEmitter {
    doc: PdfDocument,
    page: Option<PageState>,
    font: BuiltinFont,
    style: PdfFontStyle,
    size_pt: f32,
}

struct PageState {
    width_cm: f32,
    height_cm: f32,
    ops: Vec<Op>,
}

impl PrintPdfEmitter {
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::new(title),
            page: None,
            font: BuiltinFont::HelveticaBold,
            style: PdfFontStyle::Bold,
            size_pt: crate::constants::FONT_SIZE_PT,
        }
    }

    fn builtin_font(font: PdfFont, style: PdfFontStyle) -> BuiltinFont {
        match (font, style) {
            (PdfFont::Helvetica | PdfFont::Arial, PdfFontStyle::Normal) => BuiltinFont::Helvetica,
            (PdfFont::Helvetica | PdfFont::Arial, PdfFontStyle::Bold) => BuiltinFont::HelveticaBold,
        }
    }
}

impl TextEmitter for PrintPdfEmitter {
    fn begin_page(&mut self, width_cm: f32, height_cm: f32) -> Result<()> {
        if self.page.is_some() {
            return Err(LabelError::Pdf("page already started".to_string()));
        }
        if !(width_cm > 0.0 && height_cm > 0.0) {
            return Err(LabelError::Pdf(format!(
                "invalid page size {width_cm}cm x {height_cm}cm"
            )));
        }
        self.page = Some(PageState {
            width_cm,
            height_cm,
            ops: Vec::new(),
        });
        Ok(())
    }

    fn set_font(&mut self, font: PdfFont, style: PdfFontStyle, size_pt: f32) -> Result<()> {
        if !(size_pt > 0.0) {
            return Err(LabelError::Pdf(format!("invalid font size {size_pt}pt")));
        }
        self.font = Self::builtin_font(font, style);
        self.style = style;
        self.size_pt = size_pt;
        Ok(())
    }

    fn text_centered(&mut self, text: &str, at: Position) -> Result<()> {
        let page = self
            .page
            .as_mut()
            .ok_or_else(|| LabelError::Pdf("text placed before the page was started".into()))?;

        let lines: Vec<&str> = text.lines().collect();
        let line_height_pt = self.size_pt * LINE_HEIGHT_FACTOR;
        let center_y_pt = cm_to_pt(page.height_cm - at.y_cm);
        let center_x_pt = cm_to_pt(at.x_cm);
        // Middle of the first line, measured upwards from the page bottom
        let first_middle_pt = center_y_pt + (lines.len() as f32 - 1.0) / 2.0 * line_height_pt;

        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let width_pt = text_width_pt(line, self.style, self.size_pt);
            let baseline_pt =
                first_middle_pt - i as f32 * line_height_pt - middle_offset_pt(self.size_pt);

            page.ops.push(Op::StartTextSection);
            page.ops.push(Op::SetFontSizeBuiltinFont {
                font: self.font,
                size: Pt(self.size_pt),
            });
            page.ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Pt(center_x_pt - width_pt / 2.0),
                    y: Pt(baseline_pt),
                },
            });
            page.ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text((*line).to_string())],
                font: self.font,
            });
            page.ops.push(Op::EndTextSection);
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let page = self
            .page
            .take()
            .ok_or_else(|| LabelError::Pdf("document has no page".into()))?;

        self.doc.pages.push(PdfPage::new(
            Mm(page.width_cm * 10.0),
            Mm(page.height_cm * 10.0),
            page.ops,
        ));

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("printpdf: {:?}", warning);
        }

        if bytes.is_empty() {
            return Err(LabelError::Pdf("PDF writer produced no output".into()));
        }
        Ok(bytes)
    }
}
