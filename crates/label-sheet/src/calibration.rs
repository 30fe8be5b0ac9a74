//! Screen density calibration
//!
//! The preview is drawn in screen pixels, so it needs to know how many pixels
//! make up a physical centimeter and how far off the display's own idea of a
//! centimeter is. The correction table below was tuned by measuring printed
//! and on-screen pages side by side; the constants are fixed values.

use crate::constants::{
    FALLBACK_PX_PER_CM, HIGH_DENSITY_CALIBRATION, NEUTRAL_CALIBRATION,
    STANDARD_DENSITY_CALIBRATION,
};

/// Properties of the display the preview is rendered on
pub trait DisplayMetrics {
    /// Ratio of physical device pixels to logical pixels
    fn device_pixel_ratio(&self) -> f32;

    /// Logical pixels spanned by one CSS centimeter, if the environment can
    /// measure it
    fn measured_px_per_cm(&self) -> Option<f32> {
        None
    }
}

/// Display metrics known up front (CLI flags, tests, headless hosts)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub device_pixel_ratio: f32,
    pub px_per_cm: Option<f32>,
}

impl FixedMetrics {
    pub fn new(device_pixel_ratio: f32) -> Self {
        Self {
            device_pixel_ratio,
            px_per_cm: None,
        }
    }

    pub fn with_px_per_cm(mut self, px_per_cm: f32) -> Self {
        self.px_per_cm = Some(px_per_cm);
        self
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DisplayMetrics for FixedMetrics {
    fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    fn measured_px_per_cm(&self) -> Option<f32> {
        self.px_per_cm
    }
}

/// Pixels per centimeter for the display, falling back to 37.8 when the
/// measurement is missing or unusable
pub fn pixels_per_centimeter(metrics: &impl DisplayMetrics) -> f32 {
    metrics
        .measured_px_per_cm()
        .filter(|px| px.is_finite() && *px > 0.0)
        .unwrap_or(FALLBACK_PX_PER_CM)
}

/// Device pixel ratio with unusable values (zero, negative, NaN) read as 1
pub fn effective_device_pixel_ratio(metrics: &impl DisplayMetrics) -> f32 {
    let dpr = metrics.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

/// Tiered correction for the given device pixel ratio.
///
/// * `>= 2` → 1.15 (high density displays show the page too small)
/// * `>= 1` → 0.95 (standard displays show it slightly too large)
/// * otherwise → 1.0
pub fn calibration_factor(device_pixel_ratio: f32) -> f32 {
    if device_pixel_ratio >= 2.0 {
        HIGH_DENSITY_CALIBRATION
    } else if device_pixel_ratio >= 1.0 {
        STANDARD_DENSITY_CALIBRATION
    } else {
        NEUTRAL_CALIBRATION
    }
}

/// Calibration factor for a display
pub fn display_calibration(metrics: &impl DisplayMetrics) -> f32 {
    calibration_factor(effective_device_pixel_ratio(metrics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibration_tiers() {
        assert_eq!(calibration_factor(3.0), 1.15);
        assert_eq!(calibration_factor(2.0), 1.15);
        assert_eq!(calibration_factor(1.99), 0.95);
        assert_eq!(calibration_factor(1.5), 0.95);
        assert_eq!(calibration_factor(1.0), 0.95);
        assert_eq!(calibration_factor(0.75), 1.0);
        assert_eq!(calibration_factor(0.0), 1.0);
        assert_eq!(calibration_factor(f32::NAN), 1.0);
    }

    #[test]
    fn test_px_per_cm_fallback() {
        assert_eq!(pixels_per_centimeter(&FixedMetrics::new(1.0)), 37.8);
        let measured = FixedMetrics::new(1.0).with_px_per_cm(37.795);
        assert_eq!(pixels_per_centimeter(&measured), 37.795);
        let zero = FixedMetrics::new(1.0).with_px_per_cm(0.0);
        assert_eq!(pixels_per_centimeter(&zero), 37.8);
        let nan = FixedMetrics::new(1.0).with_px_per_cm(f32::NAN);
        assert_eq!(pixels_per_centimeter(&nan), 37.8);
    }

    #[test]
    fn test_missing_dpr_treated_as_standard() {
        assert_eq!(display_calibration(&FixedMetrics::new(0.0)), 0.95);
        assert_eq!(display_calibration(&FixedMetrics::new(f32::NAN)), 0.95);
        assert_eq!(display_calibration(&FixedMetrics::new(2.0)), 1.15);
        assert_eq!(display_calibration(&FixedMetrics::new(0.5)), 1.0);
    }
}
