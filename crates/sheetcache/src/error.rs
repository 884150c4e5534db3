//! Error types for sheetcache

use sheetcache_core::LabelName;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the viewport cache
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid reference, range, label or selection
    #[error(transparent)]
    Core(#[from] sheetcache_core::Error),

    /// Label mappings that refer to each other in a loop
    #[error("Label cycle detected: {}", format_labels(.labels))]
    LabelCycle {
        /// Labels on the cycle, in the order they refer to each other
        labels: Vec<LabelName>,
    },
}

fn format_labels(labels: &[LabelName]) -> String {
    labels
        .iter()
        .map(LabelName::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
