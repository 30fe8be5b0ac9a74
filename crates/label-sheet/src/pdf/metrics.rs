//! Advance widths for the standard Helvetica faces
//!
//! Values are in 1/1000 em for the printable ASCII range (space to tilde),
//! taken from the Adobe core font metrics. Other characters use an average
//! width; the built-in fonts cannot show them anyway.

use super::PdfFontStyle;

const FIRST_CHAR: u32 = 32;

const AVERAGE_WIDTH: u16 = 556;

/// Ascender of Helvetica in 1/1000 em
pub const HELVETICA_ASCENT: f32 = 718.0;

/// Descender of Helvetica in 1/1000 em (negative, below the baseline)
pub const HELVETICA_DESCENT: f32 = -207.0;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // space - /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0 - 9
    278, 278, 584, 584, 584, 556, 1015,                                             // : - @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // A - M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N - Z
    278, 278, 278, 469, 556, 333,                                                   // [ - `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // a - m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // n - z
    334, 260, 334, 584,                                                             // { - ~
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // space - /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // 0 - 9
    333, 333, 584, 584, 584, 611, 975,                                              // : - @
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,                // A - M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // N - Z
    333, 278, 333, 584, 556, 333,                                                   // [ - `
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,                // a - m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,                // n - z
    389, 280, 389, 584,                                                             // { - ~
];

/// Advance width of one character in 1/1000 em
pub fn char_width(ch: char, style: PdfFontStyle) -> u16 {
    let table = match style {
        PdfFontStyle::Normal => &HELVETICA_WIDTHS,
        PdfFontStyle::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    (ch as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or(AVERAGE_WIDTH)
}

/// Width of a single line of text in points
pub fn text_width_pt(text: &str, style: PdfFontStyle, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| char_width(ch, style) as u32).sum();
    units as f32 / 1000.0 * size_pt
}

/// Distance from the baseline up to the middle of the glyph box, in points
pub fn middle_offset_pt(size_pt: f32) -> f32 {
    (HELVETICA_ASCENT + HELVETICA_DESCENT) / 2.0 / 1000.0 * size_pt
}
