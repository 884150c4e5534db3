//! Cache configuration

/// Options for a [`ViewportCache`](crate::ViewportCache)
#[derive(Debug, Clone, PartialEq)]
pub struct CacheOptions {
    /// Column width used until spreadsheet metadata provides one (default: 100px)
    pub default_column_width: f64,
    /// Row height used until spreadsheet metadata provides one (default: 30px)
    pub default_row_height: f64,
    /// Largest label range expanded into per-cell memberships when the window is empty
    /// (default: 65536 cells)
    pub max_range_expansion: u64,
    /// Fail delta application when label mappings form a cycle (default: false, cycles are
    /// logged and left unresolved)
    pub reject_label_cycles: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            default_column_width: 100.0,
            default_row_height: 30.0,
            max_range_expansion: 65_536,
            reject_label_cycles: false,
        }
    }
}
