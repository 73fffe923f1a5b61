//! Result counts, facets, and the visible-count cursor.

use serde::{Deserialize, Serialize};

/// Default number of products shown, and how many each "load more" adds.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// How many of the sorted results are currently shown.
///
/// The cursor only grows. Because it slices an already-sorted sequence,
/// growing it appends items without reordering the ones already visible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "CursorFields")]
pub struct VisibleCursor {
    count: usize,
    step: usize,
}

/// Serialized cursor, normalized on the way in.
#[derive(Deserialize)]
struct CursorFields {
    count: usize,
    step: usize,
}

impl From<CursorFields> for VisibleCursor {
    fn from(fields: CursorFields) -> Self {
        let step = fields.step.max(1);
        Self {
            count: fields.count.max(step),
            step,
        }
    }
}

impl VisibleCursor {
    /// Create a cursor showing `step` items and growing by `step`.
    ///
    /// A zero step is raised to 1 so "load more" always makes progress.
    pub fn new(step: usize) -> Self {
        let step = step.max(1);
        Self { count: step, step }
    }

    /// Raw cursor position. May exceed the current result length when
    /// filters narrowed the results after loading more.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Items added per "load more".
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of items shown out of `total` results.
    pub fn visible(&self, total: usize) -> usize {
        self.count.min(total)
    }

    /// Whether "load more" would reveal anything.
    pub fn has_more(&self, total: usize) -> bool {
        self.count < total
    }

    /// Reveal up to one more step, capped at `total`.
    ///
    /// Returns false when nothing more was available.
    pub fn load_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.count = total.min(self.count + self.step);
        true
    }

    /// Back to the first step.
    pub fn reset(&mut self) {
        self.count = self.step;
    }

    /// The visible prefix of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible(items.len())]
    }
}

impl Default for VisibleCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Count summary shown above the grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResultCounts {
    /// Products currently rendered.
    pub visible: usize,
    /// Products passing the filters.
    pub filtered: usize,
    /// Products in the unfiltered catalog.
    pub total: usize,
}

impl ResultCounts {
    /// Counts for `filtered` results out of `total`, as the cursor shows them.
    pub fn new(cursor: &VisibleCursor, filtered: usize, total: usize) -> Self {
        Self {
            visible: cursor.visible(filtered),
            filtered,
            total,
        }
    }

    /// e.g. "6 of 9 results · total 12 products".
    pub fn summary(&self) -> String {
        format!(
            "{} of {} results \u{b7} total {} products",
            self.visible, self.filtered, self.total
        )
    }
}

/// The category facet: "All" followed by every distinct category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryFacet {
    /// Facet values in selector order.
    pub values: Vec<FacetValue>,
}

impl CategoryFacet {
    /// Labels only, in selector order.
    pub fn labels(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.value.as_str()).collect()
    }

    /// The currently selected value, if any matches.
    pub fn selected(&self) -> Option<&FacetValue> {
        self.values.iter().find(|v| v.selected)
    }

    /// Number of facet values, "All" included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no facet values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The label.
    pub value: String,
    /// Products in the unfiltered catalog carrying this label.
    pub count: usize,
    /// Whether this is the current selection.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_defaults() {
        let cursor = VisibleCursor::default();
        assert_eq!(cursor.count(), 6);
        assert_eq!(cursor.step(), 6);
    }

    #[test]
    fn test_no_more_when_everything_fits() {
        let mut cursor = VisibleCursor::default();
        assert!(!cursor.has_more(6));
        assert!(!cursor.load_more(6));
        assert_eq!(cursor.count(), 6);
    }

    #[test]
    fn test_load_more_caps_at_total() {
        let mut cursor = VisibleCursor::default();
        assert!(cursor.load_more(9));
        assert_eq!(cursor.count(), 9);
        assert!(!cursor.has_more(9));

        let mut cursor = VisibleCursor::default();
        assert!(cursor.load_more(20));
        assert_eq!(cursor.count(), 12);
        assert!(cursor.load_more(20));
        assert!(cursor.load_more(20));
        assert_eq!(cursor.count(), 20);
    }

    #[test]
    fn test_visible_clamps_when_results_shrink() {
        let mut cursor = VisibleCursor::default();
        cursor.load_more(30);
        assert_eq!(cursor.count(), 12);
        assert_eq!(cursor.visible(4), 4);
        assert_eq!(cursor.slice(&[1, 2, 3, 4]), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_reset() {
        let mut cursor = VisibleCursor::new(3);
        cursor.load_more(10);
        cursor.reset();
        assert_eq!(cursor.count(), 3);
    }

    #[test]
    fn test_zero_step_still_progresses() {
        let mut cursor = VisibleCursor::new(0);
        assert!(cursor.load_more(5));
        assert_eq!(cursor.count(), 2);
    }

    #[test]
    fn test_deserialized_zero_step_is_raised() {
        let mut cursor: VisibleCursor = serde_json::from_str(r#"{"count": 0, "step": 0}"#).unwrap();
        assert_eq!(cursor.step(), 1);
        assert_eq!(cursor.count(), 1);
        assert!(cursor.load_more(3));
        assert!(cursor.load_more(3));
        assert!(!cursor.load_more(3));
        assert_eq!(cursor.count(), 3);
    }

    #[test]
    fn test_cursor_serde_keeps_position() {
        let mut cursor = VisibleCursor::default();
        cursor.load_more(20);
        let json = serde_json::to_string(&cursor).unwrap();
        let back: VisibleCursor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cursor);
    }

    #[test]
    fn test_counts_summary() {
        let counts = ResultCounts::new(&VisibleCursor::default(), 3, 6);
        assert_eq!(counts.visible, 3);
        assert_eq!(counts.summary(), "3 of 3 results \u{b7} total 6 products");
    }
}
