//! Layout plan
//!
//! The plan is computed once per generation and handed to every renderer.

use crate::types::LabelContent;

use super::{Cell, PageGeometry, Position, Rect, cell_bounds, cells};

/// One label placed on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    /// Linear index (row-major)
    pub index: usize,
    pub cell: Cell,
    pub bounds: Rect,
    /// Full visible text; empty for a blank cell
    pub text: String,
}

impl PlacedLabel {
    pub fn center(&self) -> Position {
        self.bounds.center()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Every cell of the sheet with its physical bounds and text
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub geometry: PageGeometry,
    pub content: LabelContent,
    pub labels: Vec<PlacedLabel>,
}

impl LayoutPlan {
    /// Place one copy of `content` in every cell of `geometry`
    pub fn build(content: &LabelContent, geometry: &PageGeometry) -> Self {
        let text = content.visible_text();
        let labels = cells(geometry)
            .map(|(index, cell)| PlacedLabel {
                index,
                cell,
                bounds: cell_bounds(geometry, cell),
                text: text.clone(),
            })
            .collect();

        log::debug!(
            "Planned {} labels ({} lines each)",
            geometry.total_cells(),
            content.len()
        );

        Self {
            geometry: *geometry,
            content: content.clone(),
            labels,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedLabel> {
        self.labels.iter()
    }

    /// Labels that carry text, in index order
    pub fn non_empty(&self) -> impl Iterator<Item = &PlacedLabel> {
        self.labels.iter().filter(|label| !label.is_empty())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldKey, FieldRow};

    #[test]
    fn test_plan_covers_every_cell() {
        let content = LabelContent::FieldRows(vec![FieldRow::new(FieldKey::Mfd, "03.02.26")]);
        let plan = LayoutPlan::build(&content, &PageGeometry::E248);
        assert_eq!(plan.len(), 248);
        assert_eq!(plan.non_empty().count(), 248);
        assert!(plan.iter().all(|label| label.text == "MFD 03.02.26"));
        assert!(plan.iter().enumerate().all(|(i, label)| label.index == i));
    }

    #[test]
    fn test_empty_content_plans_blank_cells() {
        let plan = LayoutPlan::build(&LabelContent::default(), &PageGeometry::E248);
        assert_eq!(plan.len(), 248);
        assert_eq!(plan.non_empty().count(), 0);
    }
}
