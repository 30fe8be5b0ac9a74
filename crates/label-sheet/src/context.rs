use chrono::NaiveDate;

use crate::calibration::DisplayMetrics;
use crate::constants::{DEFAULT_EXPIRY_YEARS, FONT_SIZE_PT, MAX_CHARS};
use crate::content::{LabelInputs, build_content};
use crate::layout::{LayoutPlan, PageGeometry};
use crate::options::SheetOptions;
use crate::preview::PreviewTransform;

/// Sheet-wide settings, created once at startup and passed to every
/// component.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetContext {
    pub geometry: PageGeometry,
    pub font_size_pt: f32,
    /// Longest accepted custom text line
    pub max_chars: usize,
    pub default_expiry_years: u32,
}

impl Default for SheetContext {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::E248,
            font_size_pt: FONT_SIZE_PT,
            max_chars: MAX_CHARS,
            default_expiry_years: DEFAULT_EXPIRY_YEARS,
        }
    }
}

impl SheetContext {
    /// Build content from the inputs and lay it out on the sheet
    pub fn plan(&self, inputs: &LabelInputs) -> LayoutPlan {
        LayoutPlan::build(&build_content(inputs), &self.geometry)
    }

    /// Form state for a new sheet manufactured on `today`
    pub fn initial_options(&self, today: NaiveDate) -> SheetOptions {
        let mut options = SheetOptions::default();
        options.label.mfd = today.format("%Y-%m-%d").to_string();
        options.label.expiry_years = self.default_expiry_years;
        options
    }

    /// Preview transform for a container of the given width on `metrics`
    pub fn preview_transform(
        &self,
        available_width_px: f32,
        metrics: &impl DisplayMetrics,
    ) -> PreviewTransform {
        PreviewTransform::for_display(available_width_px, metrics, &self.geometry)
    }
}
