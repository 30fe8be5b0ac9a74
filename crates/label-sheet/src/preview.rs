//! On-screen preview scaling
//!
//! The preview page is laid out at full physical size and then scaled to fit
//! the available width. The scale is capped at the display calibration so
//! that on a wide viewport the page shows at (calibrated) physical size.

use crate::calibration::{DisplayMetrics, display_calibration, pixels_per_centimeter};
use crate::constants::{MIN_PREVIEW_SCALE, cm_to_px};
use crate::layout::PageGeometry;

/// Scale and layout compensation for the preview page element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewTransform {
    /// Uniform scale applied around the top-center of the page
    pub scale: f32,
    /// Bottom margin in pixels (zero or negative) that removes the blank
    /// space left below the page after scaling
    pub margin_bottom_px: f32,
    /// Pixels per centimeter used for the calculation
    pub px_per_cm: f32,
    /// Unscaled page width in pixels
    pub page_width_px: f32,
    /// Unscaled page height in pixels
    pub page_height_px: f32,
}

impl PreviewTransform {
    /// Compute the transform for a container `available_width_px` wide.
    ///
    /// `scale = max(min(available / page_width_px, calibration), 0.25)`
    pub fn compute(
        available_width_px: f32,
        px_per_cm: f32,
        calibration: f32,
        geometry: &PageGeometry,
    ) -> Self {
        let page_width_px = cm_to_px(geometry.page_width_cm, px_per_cm);
        let page_height_px = cm_to_px(geometry.page_height_cm, px_per_cm);

        let base_scale = if page_width_px > 0.0 {
            available_width_px / page_width_px
        } else {
            calibration
        };
        // f32::min/max ignore NaN, so a bogus width falls through to the clamps
        let scale = base_scale.min(calibration).max(MIN_PREVIEW_SCALE);

        let margin_bottom_px = -(page_height_px * (1.0 - scale));

        Self {
            scale,
            margin_bottom_px,
            px_per_cm,
            page_width_px,
            page_height_px,
        }
    }

    /// Compute the transform using a display's density and calibration
    pub fn for_display(
        available_width_px: f32,
        metrics: &impl DisplayMetrics,
        geometry: &PageGeometry,
    ) -> Self {
        Self::compute(
            available_width_px,
            pixels_per_centimeter(metrics),
            display_calibration(metrics),
            geometry,
        )
    }

    /// Width of the page on screen after scaling
    pub fn scaled_width_px(&self) -> f32 {
        self.page_width_px * self.scale
    }

    /// Height of the page on screen after scaling
    pub fn scaled_height_px(&self) -> f32 {
        self.page_height_px * self.scale
    }

    /// Inline style for the page element.
    ///
    /// Width and paddings stay in centimeters so that printing, which ignores
    /// the transform, still lands on the physical grid.
    pub fn css_style(&self, geometry: &PageGeometry) -> String {
        format!(
            "transform: scale({}); transform-origin: top center; margin-bottom: {}px; \
             width: {}cm; padding-top: {}cm; padding-left: {}cm; padding-right: {}cm;",
            self.scale,
            self.margin_bottom_px,
            geometry.page_width_cm,
            geometry.top_margin_cm,
            geometry.side_margin_cm,
            geometry.side_margin_cm,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::FixedMetrics;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_exact_fit_is_unit_scale() {
        let g = PageGeometry::E248;
        let required = g.page_width_cm * 37.8;
        let t = PreviewTransform::compute(required, 37.8, 1.0, &g);
        assert!((t.scale - 1.0).abs() < EPS);
        assert!(t.margin_bottom_px.abs() < EPS);
    }

    #[test]
    fn test_wide_viewport_caps_at_calibration() {
        let g = PageGeometry::E248;
        let t = PreviewTransform::compute(5000.0, 37.8, 0.95, &g);
        assert!((t.scale - 0.95).abs() < EPS);
        let t = PreviewTransform::compute(5000.0, 37.8, 1.15, &g);
        assert!((t.scale - 1.15).abs() < EPS);
    }

    #[test]
    fn test_negative_margin_compensates_height() {
        let g = PageGeometry::E248;
        let required = g.page_width_cm * 37.8;
        let t = PreviewTransform::compute(required / 2.0, 37.8, 1.0, &g);
        assert!((t.scale - 0.5).abs() < EPS);
        let full_height = 29.7 * 37.8;
        assert!((t.margin_bottom_px + full_height * 0.5).abs() < 1e-2);
        assert!((t.scaled_height_px() + t.margin_bottom_px).abs() < 1e-2);
    }

    #[test]
    fn test_floor_at_quarter_scale() {
        let g = PageGeometry::E248;
        assert_eq!(PreviewTransform::compute(10.0, 37.8, 1.0, &g).scale, 0.25);
        assert_eq!(PreviewTransform::compute(0.0, 37.8, 1.0, &g).scale, 0.25);
        assert_eq!(PreviewTransform::compute(-50.0, 37.8, 1.0, &g).scale, 0.25);
    }

    #[test]
    fn test_for_display_uses_calibration() {
        let g = PageGeometry::E248;
        let t = PreviewTransform::for_display(10_000.0, &FixedMetrics::new(2.0), &g);
        assert!((t.scale - 1.15).abs() < EPS);
        assert_eq!(t.px_per_cm, 37.8);
    }

    #[test]
    fn test_css_style() {
        let g = PageGeometry::E248;
        let t = PreviewTransform::compute(g.page_width_cm * 37.8, 37.8, 1.0, &g);
        let css = t.css_style(&g);
        assert!(css.contains("transform: scale(1)"));
        assert!(css.contains("transform-origin: top center"));
        assert!(css.contains("width: 21cm"));
        assert!(css.contains("padding-left: 1.1cm"));
    }
}
