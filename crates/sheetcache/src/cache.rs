//! The viewport cache
//!
//! A local mirror of the part of a spreadsheet the viewport shows: cells, columns, rows, their
//! dimensions and the label indexes. It is fed by [`SpreadsheetDelta`]s pushed by the server and
//! can be rebuilt from the server at any time, so every lookup answers "not loaded" with `None`
//! rather than an error.
//!
//! # Example
//!
//! ```rust
//! use sheetcache::prelude::*;
//!
//! let mut cache = ViewportCache::default();
//! let b2: CellReference = "B2".parse().unwrap();
//!
//! let delta = SpreadsheetDelta::new()
//!     .with_cell(Cell::new(b2, "=1+1").with_value(2.0))
//!     .with_label(LabelMapping::parse("Total", "B2").unwrap());
//! cache.apply_delta(&delta).unwrap();
//!
//! assert_eq!(cache.cell(&b2).unwrap().display_text(), "2");
//! let total: Selection = "Total".parse().unwrap();
//! assert_eq!(cache.resolve_label(&total), Some(NonLabelSelection::Cell(b2)));
//! ```

use crate::delta::SpreadsheetDelta;
use crate::error::Result;
use crate::labels::{LabelResolution, LabelResolver};
use crate::metadata::SpreadsheetMetadata;
use crate::options::CacheOptions;
use crate::window::Window;
use sheetcache_core::{
    Cell, CellReference, Column, ColumnReference, LabelMapping, LabelName, NonLabelSelection,
    Row, RowReference, Selection,
};
use std::collections::{BTreeMap, BTreeSet};

/// What a delta changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeltaStats {
    /// Cells inserted or replaced
    pub cells_upserted: usize,
    /// Cells removed, by deletion or by the window filter
    pub cells_removed: usize,
    /// Label mappings in the new label set, repeated definitions dropped
    pub labels: usize,
    /// Labels that resolved to a cell or range inside the window
    pub labels_resolved: usize,
    /// Labels left unresolved or outside the window
    pub labels_unresolved: usize,
}

/// Client-side mirror of the visible part of a spreadsheet
#[derive(Debug, Clone)]
pub struct ViewportCache {
    options: CacheOptions,
    cells: BTreeMap<CellReference, Cell>,
    columns: BTreeMap<ColumnReference, Column>,
    rows: BTreeMap<RowReference, Row>,
    column_widths: BTreeMap<ColumnReference, f64>,
    row_heights: BTreeMap<RowReference, f64>,
    labels: Vec<LabelMapping>,
    resolution: LabelResolution,
    column_count: Option<u32>,
    row_count: Option<u32>,
    window: Window,
    default_width: f64,
    default_height: f64,
}

impl Default for ViewportCache {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

impl ViewportCache {
    /// Create an empty cache
    pub fn new(options: CacheOptions) -> Self {
        Self {
            default_width: options.default_column_width,
            default_height: options.default_row_height,
            options,
            cells: BTreeMap::new(),
            columns: BTreeMap::new(),
            rows: BTreeMap::new(),
            column_widths: BTreeMap::new(),
            row_heights: BTreeMap::new(),
            labels: Vec::new(),
            resolution: LabelResolution::default(),
            column_count: None,
            row_count: None,
            window: Window::empty(),
        }
    }

    /// The options this cache was built with
    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    // === Updates ===

    /// Apply a server delta
    ///
    /// Labels are resolved first, against the new label set and the current window; if that
    /// fails (a label cycle with [`CacheOptions::reject_label_cycles`] set) the cache is left
    /// untouched. Upserts are applied before deletions, so an entry that is both upserted and
    /// deleted ends up absent. A label defined more than once keeps its first definition.
    /// Counts are sticky: a delta without counts keeps the known ones.
    pub fn apply_delta(&mut self, delta: &SpreadsheetDelta) -> Result<DeltaStats> {
        let mut resolution =
            LabelResolver::new(&self.window, &self.options).resolve(&delta.labels)?;

        let mut stats = DeltaStats {
            cells_upserted: delta.cells.len(),
            labels: resolution.mappings.len(),
            labels_resolved: resolution.label_to_non_label.len(),
            labels_unresolved: resolution.unresolved.len(),
            ..DeltaStats::default()
        };

        for cell in &delta.cells {
            self.cells.insert(cell.reference, cell.clone());
        }
        for column in &delta.columns {
            self.columns.insert(column.reference, column.clone());
        }
        for row in &delta.rows {
            self.rows.insert(row.reference, row.clone());
        }
        self.column_widths
            .extend(delta.column_widths.iter().map(|(c, w)| (*c, *w)));
        self.row_heights
            .extend(delta.row_heights.iter().map(|(r, h)| (*r, *h)));

        for cell in &delta.deleted_cells {
            if self.cells.remove(cell).is_some() {
                stats.cells_removed += 1;
            }
        }
        for column in &delta.deleted_columns {
            self.columns.remove(column);
            self.column_widths.remove(column);
        }
        for row in &delta.deleted_rows {
            self.rows.remove(row);
            self.row_heights.remove(row);
        }

        if !self.window.is_empty() {
            stats.cells_removed += self.retain_window();
        }

        self.labels = std::mem::take(&mut resolution.mappings);
        self.resolution = resolution;

        if let Some(count) = delta.column_count {
            self.column_count = Some(count);
        }
        if let Some(count) = delta.row_count {
            self.row_count = Some(count);
        }

        log::debug!(
            "applied delta: {} cells upserted, {} removed, {} labels ({} unresolved), {} cells cached",
            stats.cells_upserted,
            stats.cells_removed,
            stats.labels,
            stats.labels_unresolved,
            self.cells.len()
        );
        Ok(stats)
    }

    /// Drop cells, columns and rows outside the window; returns the number of cells dropped
    fn retain_window(&mut self) -> usize {
        let window = &self.window;
        let before = self.cells.len();
        self.cells.retain(|cell, _| window.contains(cell));
        self.columns.retain(|column, _| window.contains_column(*column));
        self.column_widths
            .retain(|column, _| window.contains_column(*column));
        self.rows.retain(|row, _| window.contains_row(*row));
        self.row_heights.retain(|row, _| window.contains_row(*row));
        before - self.cells.len()
    }

    /// Empty the cache: cells, columns, rows, dimensions, labels, counts and window
    pub fn clear(&mut self) {
        *self = Self::new(self.options.clone());
        log::debug!("viewport cache cleared");
    }

    /// Change the visible window
    ///
    /// Moving to an empty window that differs from the current one drops every cached cell,
    /// column, row, dimension and label. A non-empty window only filters entries when the next
    /// delta is applied.
    pub fn set_window(&mut self, window: Window) {
        if window.is_empty() && window != self.window {
            self.cells.clear();
            self.columns.clear();
            self.column_widths.clear();
            self.rows.clear();
            self.row_heights.clear();
            self.labels.clear();
            self.resolution = LabelResolution::default();
            log::debug!("window emptied, viewport cache entries dropped");
        }
        log::debug!("window set to '{}'", window);
        self.window = window;
    }

    /// Capture the default column width and row height from spreadsheet metadata
    pub fn set_metadata(&mut self, metadata: &SpreadsheetMetadata) {
        self.default_width = metadata
            .effective_width()
            .unwrap_or(self.options.default_column_width);
        self.default_height = metadata
            .effective_height()
            .unwrap_or(self.options.default_row_height);
    }

    // === Lookups ===

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
            && self.columns.is_empty()
            && self.rows.is_empty()
            && self.labels.is_empty()
    }

    /// Get a cached cell
    pub fn cell(&self, cell: &CellReference) -> Option<&Cell> {
        self.cells.get(cell)
    }

    /// All cached cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Get a cached column
    pub fn column(&self, column: ColumnReference) -> Option<&Column> {
        self.columns.get(&column)
    }

    /// Get a cached row
    pub fn row(&self, row: RowReference) -> Option<&Row> {
        self.rows.get(&row)
    }

    /// Column width in pixels: the override if any, else the spreadsheet default
    pub fn column_width(&self, column: ColumnReference) -> f64 {
        self.column_widths
            .get(&column)
            .copied()
            .unwrap_or(self.default_width)
    }

    /// Row height in pixels: the override if any, else the spreadsheet default
    pub fn row_height(&self, row: RowReference) -> f64 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(self.default_height)
    }

    /// A column is hidden only if it is cached and flagged hidden
    pub fn is_column_hidden(&self, column: ColumnReference) -> bool {
        self.columns.get(&column).is_some_and(|c| c.hidden)
    }

    /// A row is hidden only if it is cached and flagged hidden
    pub fn is_row_hidden(&self, row: RowReference) -> bool {
        self.rows.get(&row).is_some_and(|r| r.hidden)
    }

    /// The label set from the last delta, first definition of each label only
    pub fn labels(&self) -> &[LabelMapping] {
        &self.labels
    }

    /// The mapping defining `label`
    pub fn label_mapping(&self, label: &LabelName) -> Option<&LabelMapping> {
        self.labels.iter().find(|m| m.label() == label)
    }

    /// Labels pointing at a cell, directly or through other labels
    pub fn cell_labels(&self, cell: &CellReference) -> Option<&BTreeSet<LabelName>> {
        self.resolution.cell_to_labels.get(cell)
    }

    /// Every cell carrying at least one label, in row-major order
    pub fn labelled_cells(&self) -> impl Iterator<Item = (&CellReference, &BTreeSet<LabelName>)> {
        self.resolution.cell_to_labels.iter()
    }

    /// Mappings of the labels pointing at a cell
    pub fn label_mappings_for_cell(&self, cell: &CellReference) -> Vec<&LabelMapping> {
        match self.cell_labels(cell) {
            Some(labels) => self
                .labels
                .iter()
                .filter(|m| labels.contains(m.label()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Resolve a label to its cell or range; cells and ranges pass through unchanged
    pub fn resolve_label(&self, selection: &Selection) -> Option<NonLabelSelection> {
        match selection {
            Selection::Label(label) => self.resolution.label_to_non_label.get(label).copied(),
            other => other.non_label(),
        }
    }

    /// [`resolve_label`](Self::resolve_label) widened back to a [`Selection`]
    pub fn resolve_label_selection(&self, selection: &Selection) -> Option<Selection> {
        self.resolve_label(selection).map(Selection::from)
    }

    /// Labels from the last delta that never reached a cell or range inside the window
    pub fn unresolved_labels(&self) -> &BTreeSet<LabelName> {
        &self.resolution.unresolved
    }

    /// The current window
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Number of columns in the spreadsheet, if known
    pub fn column_count(&self) -> Option<u32> {
        self.column_count
    }

    /// Number of rows in the spreadsheet, if known
    pub fn row_count(&self) -> Option<u32> {
        self.row_count
    }

    /// Columns spanned by the window that are not hidden
    pub fn visible_columns(&self) -> Vec<ColumnReference> {
        self.window
            .columns()
            .into_iter()
            .filter(|c| !self.is_column_hidden(*c))
            .collect()
    }

    /// Rows spanned by the window that are not hidden
    pub fn visible_rows(&self) -> Vec<RowReference> {
        self.window
            .rows()
            .into_iter()
            .filter(|r| !self.is_row_hidden(*r))
            .collect()
    }

    /// Total pixel width of the visible columns
    pub fn window_width(&self) -> f64 {
        self.visible_columns()
            .into_iter()
            .map(|c| self.column_width(c))
            .sum()
    }

    /// Total pixel height of the visible rows
    pub fn window_height(&self) -> f64 {
        self.visible_rows()
            .into_iter()
            .map(|r| self.row_height(r))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use sheetcache_core::Style;

    fn cell(s: &str) -> CellReference {
        s.parse().unwrap()
    }

    fn col(s: &str) -> ColumnReference {
        s.parse().unwrap()
    }

    fn row(s: &str) -> RowReference {
        s.parse().unwrap()
    }

    #[test]
    fn test_dimensions_fall_back_to_defaults() {
        let mut cache = ViewportCache::default();
        assert_eq!(cache.column_width(col("A")), 100.0);
        assert_eq!(cache.row_height(row("1")), 30.0);

        cache.set_metadata(&SpreadsheetMetadata::new(Style::new().width(80.0)));
        cache
            .apply_delta(&SpreadsheetDelta::new().with_column_width(col("B"), 150.0))
            .unwrap();

        assert_eq!(cache.column_width(col("A")), 80.0);
        assert_eq!(cache.column_width(col("B")), 150.0);
        assert_eq!(cache.row_height(row("1")), 30.0);
    }

    #[test]
    fn test_hidden_requires_cached_entry() {
        let mut cache = ViewportCache::default();
        assert!(!cache.is_column_hidden(col("C")));

        let delta = SpreadsheetDelta::new()
            .with_column(Column::new(col("C")).with_hidden(true))
            .with_column(Column::new(col("D")))
            .with_row(Row::new(row("2")).with_hidden(true));
        cache.apply_delta(&delta).unwrap();

        assert!(cache.is_column_hidden(col("C")));
        assert!(!cache.is_column_hidden(col("D")));
        assert!(cache.is_row_hidden(row("2")));
        assert!(!cache.is_row_hidden(row("3")));
    }

    #[test]
    fn test_counts_are_sticky() {
        let mut cache = ViewportCache::default();
        cache
            .apply_delta(&SpreadsheetDelta::new().with_column_count(26).with_row_count(100))
            .unwrap();
        cache.apply_delta(&SpreadsheetDelta::new()).unwrap();
        assert_eq!(cache.column_count(), Some(26));
        assert_eq!(cache.row_count(), Some(100));

        cache
            .apply_delta(&SpreadsheetDelta::new().with_row_count(200))
            .unwrap();
        assert_eq!(cache.column_count(), Some(26));
        assert_eq!(cache.row_count(), Some(200));
    }

    #[test]
    fn test_rejected_delta_leaves_cache_untouched() {
        let mut cache = ViewportCache::new(CacheOptions {
            reject_label_cycles: true,
            ..CacheOptions::default()
        });
        cache
            .apply_delta(&SpreadsheetDelta::new().with_cell(Cell::new(cell("A1"), "1")))
            .unwrap();

        let delta = SpreadsheetDelta::new()
            .with_deleted_cell(cell("A1"))
            .with_label(LabelMapping::parse("P", "Q").unwrap())
            .with_label(LabelMapping::parse("Q", "P").unwrap());
        let err = cache.apply_delta(&delta).unwrap_err();

        assert!(matches!(err, Error::LabelCycle { .. }));
        assert!(cache.cell(&cell("A1")).is_some());
        assert!(cache.labels().is_empty());
    }

    #[test]
    fn test_deleting_column_drops_width() {
        let mut cache = ViewportCache::default();
        cache
            .apply_delta(
                &SpreadsheetDelta::new()
                    .with_column(Column::new(col("B")))
                    .with_column_width(col("B"), 40.0),
            )
            .unwrap();
        cache
            .apply_delta(&SpreadsheetDelta::new().with_deleted_column(col("B")))
            .unwrap();

        assert!(cache.column(col("B")).is_none());
        assert_eq!(cache.column_width(col("B")), 100.0);
    }

    #[test]
    fn test_visible_columns_and_window_size() {
        let mut cache = ViewportCache::default();
        cache.set_window(Window::parse("A1:C2").unwrap());
        cache
            .apply_delta(
                &SpreadsheetDelta::new()
                    .with_column(Column::new(col("B")).with_hidden(true))
                    .with_column_width(col("C"), 50.0)
                    .with_row_height(row("2"), 10.0),
            )
            .unwrap();

        assert_eq!(cache.visible_columns(), vec![col("A"), col("C")]);
        assert_eq!(cache.window_width(), 150.0);
        assert_eq!(cache.window_height(), 40.0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cache = ViewportCache::default();
        cache.set_window(Window::parse("A1:B2").unwrap());
        cache
            .apply_delta(
                &SpreadsheetDelta::new()
                    .with_cell(Cell::new(cell("A1"), "x"))
                    .with_row_count(5),
            )
            .unwrap();

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.window().is_empty());
        assert_eq!(cache.row_count(), None);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.column_width(col("A")), 100.0);
    }
}
