//! Label resolution
//!
//! Turns the label set of a delta into the two indexes the renderer reads:
//!
//! - cell -> labels pointing at it
//! - label -> the cell or range it finally resolves to
//!
//! Labels that target a cell or range are visited first. With a non-empty window a target
//! must touch the window to be visited at all; a range that does is expanded in full, up to
//! [`CacheOptions::max_range_expansion`] cells. Labels that target another label are then
//! scanned repeatedly, each scan resolving every label whose target has been resolved, until a
//! scan makes no progress. Whatever is left is dangling (its target label is undefined or lies
//! outside the window) or part of a cycle.

use crate::error::{Error, Result};
use crate::options::CacheOptions;
use crate::window::Window;
use ahash::{AHashMap, AHashSet};
use sheetcache_core::{CellReference, LabelMapping, LabelName, NonLabelSelection};
use std::collections::{BTreeMap, BTreeSet};

/// Output of a resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelResolution {
    /// The label set that was resolved, keeping only the first definition of each label
    pub mappings: Vec<LabelMapping>,
    /// Labels pointing at each cell; never holds an empty set
    pub cell_to_labels: BTreeMap<CellReference, BTreeSet<LabelName>>,
    /// Final cell or range of every resolved label
    pub label_to_non_label: BTreeMap<LabelName, NonLabelSelection>,
    /// Labels missing from `label_to_non_label`: their chain never reached a cell or range, or
    /// reached one outside the window
    pub unresolved: BTreeSet<LabelName>,
    /// Cycles found among the unresolved labels
    pub cycles: Vec<Vec<LabelName>>,
    /// Scans of the label -> label mappings that resolved at least one label
    pub passes: usize,
}

/// Resolves a label set against a window
pub struct LabelResolver<'a> {
    window: &'a Window,
    options: &'a CacheOptions,
    resolution: LabelResolution,
}

impl<'a> LabelResolver<'a> {
    /// Create a resolver for the given window
    pub fn new(window: &'a Window, options: &'a CacheOptions) -> Self {
        Self {
            window,
            options,
            resolution: LabelResolution::default(),
        }
    }

    /// Resolve every mapping
    ///
    /// Fails with [`Error::LabelCycle`] only when [`CacheOptions::reject_label_cycles`] is set.
    pub fn resolve(mut self, mappings: &[LabelMapping]) -> Result<LabelResolution> {
        let mappings = first_definitions(mappings);

        let mut pending = Vec::new();
        for mapping in &mappings {
            match mapping.target().non_label() {
                Some(target) => {
                    if !self.visit(mapping.label(), target) {
                        self.resolution.unresolved.insert(mapping.label().clone());
                    }
                }
                None => pending.push(*mapping),
            }
        }

        let mut done = AHashSet::with_capacity(pending.len());
        while done.len() < pending.len() {
            let mut progress = false;
            for (i, mapping) in pending.iter().enumerate() {
                if done.contains(&i) {
                    continue;
                }
                let resolved = mapping
                    .target()
                    .as_label()
                    .and_then(|target| self.resolution.label_to_non_label.get(target))
                    .copied();
                if let Some(target) = resolved {
                    // Indexed targets already passed the window
                    self.visit(mapping.label(), target);
                    done.insert(i);
                    progress = true;
                }
            }
            if !progress {
                break;
            }
            self.resolution.passes += 1;
            log::trace!(
                "label pass {}: {}/{} label references resolved",
                self.resolution.passes,
                done.len(),
                pending.len()
            );
        }

        let unresolved: Vec<&LabelMapping> = pending
            .iter()
            .enumerate()
            .filter(|(i, _)| !done.contains(i))
            .map(|(_, m)| *m)
            .collect();
        if !unresolved.is_empty() {
            self.report_unresolved(&mappings, &unresolved)?;
        }

        self.resolution.mappings = mappings.into_iter().cloned().collect();
        Ok(self.resolution)
    }

    /// Record `label -> target` and add the label to every cell of the target
    ///
    /// Targets that miss a non-empty window are skipped entirely; returns whether the label
    /// was recorded.
    fn visit(&mut self, label: &LabelName, target: NonLabelSelection) -> bool {
        if !self.window.test(&target) {
            log::trace!("label {} target {} is outside the window", label, target);
            return false;
        }

        self.resolution
            .label_to_non_label
            .insert(label.clone(), target);

        let range = target.to_range();
        if range.cell_count() > self.options.max_range_expansion {
            log::warn!(
                "label {} covers {} cells, not expanding {} (limit {})",
                label,
                range.cell_count(),
                range,
                self.options.max_range_expansion
            );
            return true;
        }
        for cell in range.cells() {
            self.add(cell, label);
        }
        true
    }

    fn add(&mut self, cell: CellReference, label: &LabelName) {
        self.resolution
            .cell_to_labels
            .entry(cell)
            .or_default()
            .insert(label.clone());
    }

    fn report_unresolved(
        &mut self,
        mappings: &[&LabelMapping],
        unresolved: &[&LabelMapping],
    ) -> Result<()> {
        let mut targets: AHashMap<&LabelName, &LabelName> = AHashMap::new();
        for mapping in unresolved {
            if let Some(target) = mapping.target().as_label() {
                targets.insert(mapping.label(), target);
            }
        }
        let defined: AHashSet<&LabelName> = mappings.iter().map(|m| m.label()).collect();

        let mut seen: AHashSet<&LabelName> = AHashSet::new();
        for mapping in unresolved {
            let start = mapping.label();
            self.resolution.unresolved.insert(start.clone());
            if seen.contains(start) {
                continue;
            }

            // Each label has one target, so following the chain either ends at a label that
            // is undefined or outside the window, or re-enters the path.
            let mut path: Vec<&LabelName> = Vec::new();
            let mut current = start;
            loop {
                if let Some(pos) = path.iter().position(|l| *l == current) {
                    let cycle: Vec<LabelName> =
                        path[pos..].iter().map(|l| (*l).clone()).collect();
                    self.resolution.cycles.push(cycle);
                    break;
                }
                if seen.contains(current) {
                    break;
                }
                path.push(current);
                match targets.get(current) {
                    Some(&next) => current = next,
                    None => {
                        if !defined.contains(current) {
                            log::warn!("label {} refers to undefined label {}", start, current);
                        }
                        break;
                    }
                }
            }
            seen.extend(path);
        }

        if let Some(cycle) = self.resolution.cycles.first() {
            if self.options.reject_label_cycles {
                return Err(Error::LabelCycle {
                    labels: cycle.clone(),
                });
            }
            for cycle in &self.resolution.cycles {
                log::warn!(
                    "label cycle left unresolved: {}",
                    cycle
                        .iter()
                        .map(LabelName::to_string)
                        .collect::<Vec<_>>()
                        .join(" -> ")
                );
            }
        }
        Ok(())
    }
}

/// Keep the first mapping of each label; later definitions are dropped with a warning
fn first_definitions(mappings: &[LabelMapping]) -> Vec<&LabelMapping> {
    let mut seen: AHashSet<&LabelName> = AHashSet::with_capacity(mappings.len());
    mappings
        .iter()
        .filter(|mapping| {
            let first = seen.insert(mapping.label());
            if !first {
                log::warn!(
                    "label {} defined more than once, ignoring {}",
                    mapping.label(),
                    mapping
                );
            }
            first
        })
        .collect()
}
