//! HTML projection of a layout plan
//!
//! Produces a self-contained page for on-screen preview and browser printing.
//! The page element carries its width and margins in centimeters, so printing
//! reproduces the physical grid without any print-time recalculation.

use std::fmt::Write;

use crate::constants::{FONT_SIZE_PT, LINE_HEIGHT_FACTOR};
use crate::layout::{GridTemplate, LayoutPlan, PageGeometry};
use crate::preview::PreviewTransform;
use crate::types::{FontFamily, FontWeight, LabelContent, RenderConfig};

/// Escape text for use inside HTML element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// CSS classes for one label, e.g. `label font-helvetica fw-semibold lines-2`
pub fn label_classes(content: &LabelContent, config: &RenderConfig) -> String {
    format!(
        "label {} {} lines-{}",
        config.font.css_class(),
        config.weight.css_class(),
        content.len()
    )
}

/// Markup for a single label
pub fn render_label(content: &LabelContent, config: &RenderConfig) -> String {
    let inner = match content {
        LabelContent::CustomLines(lines) => lines
            .iter()
            .map(|line| escape_html(line))
            .collect::<Vec<_>>()
            .join("<br>"),
        LabelContent::FieldRows(rows) => {
            let mut html = String::from("<div class=\"label-grid-wrapper\">");
            for row in rows {
                let _ = write!(
                    html,
                    "<div class=\"label-row\"><span class=\"label-key\">{}</span>\
                     <span class=\"label-val\">{}</span></div>",
                    row.key,
                    escape_html(&row.value)
                );
            }
            html.push_str("</div>");
            html
        }
    };

    format!(
        "<div class=\"{}\">{}</div>",
        label_classes(content, config),
        inner
    )
}

/// Markup for the grid container with one label per cell
pub fn render_grid(plan: &LayoutPlan, config: &RenderConfig) -> String {
    let label = render_label(&plan.content, config);
    let template = GridTemplate::from_geometry(&plan.geometry);

    let mut html = String::with_capacity(label.len() * plan.len() + 256);
    let _ = write!(
        html,
        "<div class=\"grid\" id=\"grid\" style=\"{}\">",
        template.css_style()
    );
    for _ in plan.iter() {
        html.push_str(&label);
    }
    html.push_str("</div>");
    html
}

/// Complete printable HTML document.
///
/// With a `transform`, the page element is scaled for on-screen display; the
/// print stylesheet drops the transform again.
pub fn render_document(
    plan: &LayoutPlan,
    config: &RenderConfig,
    transform: Option<&PreviewTransform>,
) -> String {
    let page_style = match transform {
        Some(transform) => transform.css_style(&plan.geometry),
        None => page_base_style(&plan.geometry),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>E248 label sheet</title>\n<style>\n");
    html.push_str(&stylesheet(&plan.geometry));
    html.push_str("</style>\n</head>\n<body>\n<div class=\"preview-wrapper\">\n");
    let _ = writeln!(html, "<div class=\"page\" style=\"{}\">", page_style);
    html.push_str(&render_grid(plan, config));
    html.push_str("\n</div>\n</div>\n</body>\n</html>\n");
    html
}

fn page_base_style(geometry: &PageGeometry) -> String {
    format!(
        "width: {}cm; padding-top: {}cm; padding-left: {}cm; padding-right: {}cm;",
        geometry.page_width_cm,
        geometry.top_margin_cm,
        geometry.side_margin_cm,
        geometry.side_margin_cm,
    )
}

fn font_stack(font: FontFamily) -> &'static str {
    match font {
        FontFamily::Helvetica => "Helvetica, Arial, sans-serif",
        FontFamily::Arial => "Arial, Helvetica, sans-serif",
        FontFamily::Inter => "Inter, Helvetica, Arial, sans-serif",
        FontFamily::Roboto => "Roboto, Helvetica, Arial, sans-serif",
        FontFamily::Sf => "-apple-system, 'SF Pro Text', Helvetica, Arial, sans-serif",
    }
}

/// Stylesheet shared by the preview and the printed page
pub fn stylesheet(geometry: &PageGeometry) -> String {
    let mut css = String::new();
    css.push_str("@page { size: A4 portrait; margin: 0; }\n");
    css.push_str("* { box-sizing: border-box; }\n");
    css.push_str("body { margin: 0; background: #d9d9d9; }\n");
    css.push_str(".preview-wrapper { display: flex; justify-content: center; padding: 16px 0; }\n");
    let _ = writeln!(
        css,
        ".page {{ background: #fff; height: {}cm; box-shadow: 0 2px 8px rgba(0,0,0,0.25); }}",
        geometry.page_height_cm
    );
    css.push_str(".grid { display: grid; }\n");
    let _ = writeln!(
        css,
        ".label {{ display: flex; align-items: center; justify-content: center; \
         text-align: center; font-size: {}pt; line-height: {}; overflow: hidden; \
         white-space: nowrap; color: #000; }}",
        FONT_SIZE_PT, LINE_HEIGHT_FACTOR
    );
    css.push_str(
        ".label-grid-wrapper { display: grid; grid-template-columns: auto auto; column-gap: 0.1cm; }\n",
    );
    css.push_str(".label-row { display: contents; }\n");
    css.push_str(".label-key, .label-val { text-align: left; }\n");

    for font in FontFamily::ALL {
        let _ = writeln!(
            css,
            ".{} {{ font-family: {}; }}",
            font.css_class(),
            font_stack(font)
        );
    }
    for weight in FontWeight::ALL {
        let _ = writeln!(
            css,
            ".{} {{ font-weight: {}; }}",
            weight.css_class(),
            weight.css_weight()
        );
    }

    css.push_str(
        "@media print {\n  body { background: none; }\n  \
         .preview-wrapper { display: block; padding: 0; }\n  \
         .page { transform: none !important; margin: 0 !important; box-shadow: none; }\n}\n",
    );
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldKey, FieldRow};

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("A<b>&\"c'"), "A&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_custom_label_markup() {
        let content = LabelContent::CustomLines(vec!["BATCH A".into(), "X".into()]);
        let config = RenderConfig::default();
        assert_eq!(
            render_label(&content, &config),
            "<div class=\"label font-helvetica fw-semibold lines-2\">BATCH A<br>X</div>"
        );
    }

    #[test]
    fn test_field_label_markup() {
        let content = LabelContent::FieldRows(vec![FieldRow::new(FieldKey::Mfd, "03.02.26")]);
        let config = RenderConfig::new(FontFamily::Roboto, FontWeight::Bold);
        let html = render_label(&content, &config);
        assert!(html.starts_with("<div class=\"label font-roboto fw-bold lines-1\">"));
        assert!(html.contains("<span class=\"label-key\">MFD</span>"));
        assert!(html.contains("<span class=\"label-val\">03.02.26</span>"));
    }

    #[test]
    fn test_grid_has_one_label_per_cell() {
        let content = LabelContent::CustomLines(vec!["X".into()]);
        let plan = LayoutPlan::build(&content, &PageGeometry::E248);
        let html = render_grid(&plan, &RenderConfig::default());
        assert_eq!(html.matches("class=\"label ").count(), 248);
        assert!(html.contains("grid-template-columns: repeat(8, 2cm)"));
    }

    #[test]
    fn test_document_has_print_rules() {
        let plan = LayoutPlan::build(&LabelContent::default(), &PageGeometry::E248);
        let html = render_document(&plan, &RenderConfig::default(), None);
        assert!(html.contains("@page { size: A4 portrait; margin: 0; }"));
        assert!(html.contains("width: 21cm"));
        assert!(html.contains("lines-0"));
    }
}
