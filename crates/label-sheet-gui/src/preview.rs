//! Painted sheet preview
//!
//! Draws the same [`LayoutPlan`] the exporters use, scaled by the preview
//! transform. egui points stand in for CSS pixels and the context's
//! pixels-per-point for the device pixel ratio.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, pos2, vec2};
use label_sheet::constants::{LINE_HEIGHT_FACTOR, cm_to_px, pt_to_cm};
use label_sheet::{DisplayMetrics, LayoutPlan, Position, PreviewTransform, SheetContext};

const PAGE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 40);
const GUIDE_COLOR: Color32 = Color32::from_gray(225);

/// Display properties reported by egui
pub struct EguiMetrics {
    pub pixels_per_point: f32,
}

impl EguiMetrics {
    pub fn from_context(ctx: &egui::Context) -> Self {
        Self {
            pixels_per_point: ctx.pixels_per_point(),
        }
    }
}

impl DisplayMetrics for EguiMetrics {
    fn device_pixel_ratio(&self) -> f32 {
        self.pixels_per_point
    }
}

/// Maps physical page coordinates onto a scaled page rectangle on screen
#[derive(Debug, Clone, Copy)]
pub struct PageMapping {
    pub page_rect: Rect,
    pub points_per_cm: f32,
}

impl PageMapping {
    /// Page of the transform's scaled size, centered horizontally at the top
    /// of `available`
    pub fn new(available: Rect, transform: &PreviewTransform) -> Self {
        let size = vec2(transform.scaled_width_px(), transform.scaled_height_px());
        let left = available.center().x - size.x / 2.0;
        Self {
            page_rect: Rect::from_min_size(pos2(left, available.top()), size),
            points_per_cm: transform.px_per_cm * transform.scale,
        }
    }

    pub fn to_screen(&self, position: Position) -> Pos2 {
        self.page_rect.min + vec2(self.length(position.x_cm), self.length(position.y_cm))
    }

    pub fn length(&self, cm: f32) -> f32 {
        cm_to_px(cm, self.points_per_cm)
    }
}

/// Paint the whole sheet; returns the transform used so callers can report it
pub fn show_sheet(
    ui: &mut egui::Ui,
    plan: &LayoutPlan,
    context: &SheetContext,
    show_guides: bool,
) -> PreviewTransform {
    let metrics = EguiMetrics::from_context(ui.ctx());
    let available_width = ui.available_width();
    let transform = context.preview_transform(available_width, &metrics);

    // The compensating bottom margin amounts to allocating only the scaled height
    let (available, _response) = ui.allocate_exact_size(
        vec2(available_width, transform.scaled_height_px()),
        Sense::hover(),
    );
    let mapping = PageMapping::new(available, &transform);
    let painter = ui.painter_at(available.expand(4.0));

    painter.rect_filled(mapping.page_rect.translate(vec2(2.0, 2.0)), 0.0, PAGE_SHADOW);
    painter.rect_filled(mapping.page_rect, 0.0, Color32::WHITE);

    let font_size = mapping.length(pt_to_cm(context.font_size_pt));
    let line_height = font_size * LINE_HEIGHT_FACTOR;
    let font = FontId::proportional(font_size);

    for label in plan.iter() {
        if show_guides {
            let bounds = &label.bounds;
            let min = mapping.to_screen(bounds.origin());
            let max = mapping.to_screen(Position::new(bounds.right(), bounds.bottom()));
            let stroke = Stroke::new(1.0, GUIDE_COLOR);
            painter.line_segment([min, pos2(max.x, min.y)], stroke);
            painter.line_segment([min, pos2(min.x, max.y)], stroke);
        }

        if label.is_empty() {
            continue;
        }

        let center = mapping.to_screen(label.center());
        let lines: Vec<&str> = label.text.lines().collect();
        let first_offset = (lines.len() as f32 - 1.0) * line_height / 2.0;
        for (i, line) in lines.iter().enumerate() {
            let pos = pos2(center.x, center.y - first_offset + i as f32 * line_height);
            painter.text(pos, Align2::CENTER_CENTER, *line, font.clone(), Color32::BLACK);
        }
    }

    transform
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_sheet::PageGeometry;

    #[test]
    fn test_mapping_scales_physical_positions() {
        let geometry = PageGeometry::E248;
        let transform = PreviewTransform::compute(397.0, 37.8, 0.95, &geometry);
        let available = Rect::from_min_size(pos2(0.0, 10.0), vec2(397.0, 2000.0));
        let mapping = PageMapping::new(available, &transform);

        assert!((mapping.page_rect.width() - transform.scaled_width_px()).abs() < 1e-3);
        assert!((mapping.page_rect.top() - 10.0).abs() < 1e-3);

        let corner = mapping.to_screen(Position::new(geometry.page_width_cm, 0.0));
        assert!((corner.x - mapping.page_rect.right()).abs() < 1e-2);

        let margin = mapping.to_screen(Position::new(geometry.side_margin_cm, 0.0));
        let expected = mapping.page_rect.left() + 1.1 * 37.8 * transform.scale;
        assert!((margin.x - expected).abs() < 1e-2);
    }

    #[test]
    fn test_page_is_centered() {
        let transform = PreviewTransform::compute(5000.0, 37.8, 0.95, &PageGeometry::E248);
        let available = Rect::from_min_size(pos2(100.0, 0.0), vec2(5000.0, 2000.0));
        let mapping = PageMapping::new(available, &transform);
        assert!((mapping.page_rect.center().x - available.center().x).abs() < 1e-3);
    }

    #[test]
    fn test_egui_metrics_use_pixels_per_point() {
        let metrics = EguiMetrics {
            pixels_per_point: 2.0,
        };
        assert_eq!(label_sheet::display_calibration(&metrics), 1.15);
    }
}
