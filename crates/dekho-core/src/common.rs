// crates/dekho-core/src/common.rs
use serde::Serialize;

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats). The root node is
/// counted as a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub categories: usize,
    pub destinations: usize,
    /// Number of edges on the longest root-to-node path.
    pub max_depth: usize,
}

/// How many destinations [`Catalog::recommend`](crate::Catalog::recommend)
/// suggests when the caller does not ask for a specific count.
pub const DEFAULT_RECOMMENDATIONS: usize = 2;

/// Upper bound on the number of recommendations returned by a single call.
/// Larger requests are clamped to this value.
pub const MAX_RECOMMENDATIONS: usize = 100;

/// File name of the dataset embedded in the library.
pub const BUNDLED_DATASET: &str = "dekho-india.json";
