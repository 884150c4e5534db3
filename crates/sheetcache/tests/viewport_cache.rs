//! Tests for delta application, window changes and label lookups

use pretty_assertions::assert_eq;
use sheetcache::prelude::*;

fn cell(s: &str) -> CellReference {
    s.parse().unwrap()
}

fn label(s: &str) -> LabelName {
    s.parse().unwrap()
}

fn selection(s: &str) -> Selection {
    s.parse().unwrap()
}

fn labels_of(cache: &ViewportCache, c: &str) -> Vec<String> {
    cache
        .cell_labels(&cell(c))
        .map(|set| set.iter().map(LabelName::to_string).collect())
        .unwrap_or_default()
}

/// Deleted cells go, upserted cells replace what was there
#[test]
fn test_delete_and_replace() {
    let mut cache = ViewportCache::default();
    cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_cell(Cell::new(cell("A1"), "=1"))
                .with_cell(Cell::new(cell("B2"), "=old")),
        )
        .unwrap();

    let stats = cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_deleted_cell(cell("A1"))
                .with_cell(Cell::new(cell("B2"), "=new").with_value(2.0)),
        )
        .unwrap();

    assert!(cache.cell(&cell("A1")).is_none());
    assert_eq!(
        cache.cell(&cell("B2")),
        Some(&Cell::new(cell("B2"), "=new").with_value(2.0))
    );
    assert_eq!(stats.cells_upserted, 1);
    assert_eq!(stats.cells_removed, 1);
}

/// An entry both upserted and deleted in one delta ends up absent
#[test]
fn test_delete_wins_over_upsert() {
    let mut cache = ViewportCache::default();
    cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_cell(Cell::new(cell("C3"), "x"))
                .with_deleted_cell(cell("C3")),
        )
        .unwrap();
    assert!(cache.cell(&cell("C3")).is_none());
}

#[test]
fn test_label_set_is_replaced_not_merged() {
    let mut cache = ViewportCache::default();
    cache
        .apply_delta(&SpreadsheetDelta::new().with_label(LabelMapping::parse("Old", "A1").unwrap()))
        .unwrap();
    assert_eq!(labels_of(&cache, "A1"), vec!["Old"]);

    cache
        .apply_delta(&SpreadsheetDelta::new().with_label(LabelMapping::parse("New", "B1").unwrap()))
        .unwrap();

    assert!(cache.cell_labels(&cell("A1")).is_none());
    assert_eq!(labels_of(&cache, "B1"), vec!["New"]);
    assert_eq!(cache.resolve_label(&selection("Old")), None);
    assert!(cache.label_mapping(&label("Old")).is_none());
    assert_eq!(cache.labels().len(), 1);
}

#[test]
fn test_label_chain_through_range() {
    let mut cache = ViewportCache::default();
    let delta = SpreadsheetDelta::new()
        .with_label(LabelMapping::parse("A", "B").unwrap())
        .with_label(LabelMapping::parse("B", "C1:C2").unwrap());
    cache.apply_delta(&delta).unwrap();

    assert_eq!(
        cache.resolve_label(&selection("A")),
        Some("C1:C2".parse().unwrap())
    );
    assert_eq!(labels_of(&cache, "C1"), vec!["A", "B"]);
    assert_eq!(labels_of(&cache, "C2"), vec!["A", "B"]);

    let mappings: Vec<String> = cache
        .label_mappings_for_cell(&cell("C2"))
        .iter()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(mappings, vec!["A=B", "B=C1:C2"]);
}

#[test]
fn test_three_label_chain() {
    let mut cache = ViewportCache::default();
    let delta = SpreadsheetDelta::new()
        .with_label(LabelMapping::parse("X", "Y").unwrap())
        .with_label(LabelMapping::parse("Y", "Z").unwrap())
        .with_label(LabelMapping::parse("Z", "A1").unwrap());
    cache.apply_delta(&delta).unwrap();

    let a1 = Some(NonLabelSelection::Cell(cell("A1")));
    assert_eq!(cache.resolve_label(&selection("X")), a1);
    assert_eq!(cache.resolve_label(&selection("Y")), a1);
    assert_eq!(cache.resolve_label(&selection("Z")), a1);
    assert!(cache.unresolved_labels().is_empty());
}

#[test]
fn test_resolve_label_passes_non_labels_through() {
    let cache = ViewportCache::default();
    for text in ["B7", "A1:C3"] {
        let s = selection(text);
        let resolved = cache.resolve_label_selection(&s).unwrap();
        assert_eq!(resolved, s);
        assert_eq!(cache.resolve_label_selection(&resolved), Some(resolved.clone()));
    }
    assert_eq!(cache.resolve_label(&selection("Unknown")), None);
}

#[test]
fn test_window_excludes_disjoint_label_ranges() {
    let mut cache = ViewportCache::default();
    cache.set_window(Window::parse("A1:C3,E5:F6").unwrap());
    cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_label(LabelMapping::parse("Outside", "H1:J4").unwrap())
                .with_label(LabelMapping::parse("Inside", "B2").unwrap()),
        )
        .unwrap();

    for c in "H1:J4".parse::<CellRange>().unwrap().cells() {
        assert!(cache.cell_labels(&c).is_none(), "{} should carry no labels", c);
    }
    assert_eq!(labels_of(&cache, "B2"), vec!["Inside"]);
    assert_eq!(cache.resolve_label(&selection("Outside")), None);
    assert!(cache.unresolved_labels().contains(&label("Outside")));
}

#[test]
fn test_window_touching_range_labels_every_cell() {
    let mut cache = ViewportCache::default();
    cache.set_window(Window::parse("A1:C3").unwrap());
    cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_label(LabelMapping::parse("Near", "B2:D2").unwrap())
                .with_label(LabelMapping::parse("Far", "J10").unwrap()),
        )
        .unwrap();

    for c in ["B2", "C2", "D2"] {
        assert_eq!(labels_of(&cache, c), vec!["Near"]);
    }
    assert_eq!(cache.resolve_label(&selection("Far")), None);
    assert!(cache.cell_labels(&cell("J10")).is_none());
}

#[test]
fn test_expansion_capped_inside_window() {
    let mut cache = ViewportCache::new(CacheOptions {
        max_range_expansion: 10,
        ..CacheOptions::default()
    });
    cache.set_window(Window::parse("A1:Z100").unwrap());
    cache
        .apply_delta(&SpreadsheetDelta::new().with_label(LabelMapping::parse("Big", "A1:Z100").unwrap()))
        .unwrap();

    assert_eq!(cache.labelled_cells().count(), 0);
    assert_eq!(
        cache.resolve_label(&selection("Big")),
        Some("A1:Z100".parse().unwrap())
    );
}

#[test]
fn test_repeated_label_definition_is_ignored() {
    let mut cache = ViewportCache::default();
    let stats = cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_label(LabelMapping::parse("X", "A1").unwrap())
                .with_label(LabelMapping::parse("X", "B1").unwrap()),
        )
        .unwrap();

    assert_eq!(stats.labels, 1);
    assert_eq!(cache.labels().len(), 1);
    assert_eq!(
        cache.resolve_label(&selection("X")),
        Some(NonLabelSelection::Cell(cell("A1")))
    );
    assert_eq!(labels_of(&cache, "A1"), vec!["X"]);
    assert!(cache.cell_labels(&cell("B1")).is_none());
}

#[test]
fn test_next_delta_filters_to_window() {
    let mut cache = ViewportCache::default();
    cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_cell(Cell::new(cell("A1"), "in"))
                .with_cell(Cell::new(cell("Z99"), "out")),
        )
        .unwrap();

    cache.set_window(Window::parse("A1:B2").unwrap());
    assert!(cache.cell(&cell("Z99")).is_some());

    let stats = cache.apply_delta(&SpreadsheetDelta::new()).unwrap();
    assert!(cache.cell(&cell("Z99")).is_none());
    assert!(cache.cell(&cell("A1")).is_some());
    assert_eq!(stats.cells_removed, 1);
}

#[test]
fn test_empty_window_clears_cache() {
    let mut cache = ViewportCache::default();
    cache.set_window(Window::parse("A1:C3").unwrap());
    cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_cell(Cell::new(cell("A1"), "1"))
                .with_column(Column::new("A".parse().unwrap()))
                .with_row(Row::new("1".parse().unwrap()))
                .with_column_width("A".parse().unwrap(), 55.0)
                .with_label(LabelMapping::parse("Total", "A1").unwrap())
                .with_row_count(10),
        )
        .unwrap();

    cache.set_window(Window::empty());
    assert!(cache.is_empty());
    assert!(cache.cell_labels(&cell("A1")).is_none());
    assert_eq!(cache.resolve_label(&selection("Total")), None);
    assert_eq!(cache.column_width("A".parse().unwrap()), 100.0);
    assert_eq!(cache.row_count(), Some(10));

    cache.set_window(Window::empty());
    assert!(cache.is_empty());
    assert!(cache.window().is_empty());
}

#[test]
fn test_non_empty_window_change_keeps_entries() {
    let mut cache = ViewportCache::default();
    cache.set_window(Window::parse("A1:C3").unwrap());
    cache
        .apply_delta(&SpreadsheetDelta::new().with_cell(Cell::new(cell("A1"), "1")))
        .unwrap();

    cache.set_window(Window::parse("D4:F6").unwrap());
    assert!(cache.cell(&cell("A1")).is_some());
    assert_eq!(cache.window().to_string(), "D4:F6");
}

#[test]
fn test_cycle_left_unresolved_by_default() {
    let mut cache = ViewportCache::default();
    let stats = cache
        .apply_delta(
            &SpreadsheetDelta::new()
                .with_label(LabelMapping::parse("P", "Q").unwrap())
                .with_label(LabelMapping::parse("Q", "P").unwrap())
                .with_label(LabelMapping::parse("R", "A1").unwrap()),
        )
        .unwrap();

    assert_eq!(stats.labels, 3);
    assert_eq!(stats.labels_resolved, 1);
    assert_eq!(stats.labels_unresolved, 2);
    assert_eq!(cache.resolve_label(&selection("P")), None);
    assert_eq!(labels_of(&cache, "A1"), vec!["R"]);
}

#[test]
fn test_delta_from_json() {
    let json = r#"{
        "cells": [
            {"reference": "A1", "formula": {"text": "=2*3", "value": {"type": "number", "value": 6}}},
            {"reference": "A2", "formula": {"text": "hello"}, "style": {"italic": true}}
        ],
        "columns": [{"reference": "B", "hidden": true}],
        "labels": [{"label": "Six", "target": "A1"}],
        "rowHeights": {"2": 45},
        "columnCount": 3
    }"#;
    let delta: SpreadsheetDelta = serde_json::from_str(json).unwrap();

    let mut cache = ViewportCache::default();
    cache.apply_delta(&delta).unwrap();

    assert_eq!(cache.cell(&cell("A1")).unwrap().display_text(), "6");
    assert_eq!(cache.cell(&cell("A2")).unwrap().style.italic, Some(true));
    assert!(cache.is_column_hidden("B".parse().unwrap()));
    assert_eq!(cache.row_height("2".parse().unwrap()), 45.0);
    assert_eq!(cache.column_count(), Some(3));
    assert_eq!(labels_of(&cache, "A1"), vec!["Six"]);
}
