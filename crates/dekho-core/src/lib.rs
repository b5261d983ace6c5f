// crates/dekho-core/src/lib.rs

//! # dekho-core
//!
//! An in-memory travel catalog for India: a tree of categories and
//! destinations with three queries on top of it.
//!
//! - prefix search over destination names, backed by a trie ([`SearchIndex`])
//! - the root-to-node path of any node, found by depth-first search
//!   ([`Catalog::find_path`])
//! - the next few destinations in a circular walk of the catalog
//!   ([`Catalog::recommend`])
//!
//! ```rust
//! use dekho_core::prelude::*;
//!
//! let catalog: Catalog = Catalog::bundled()?;
//!
//! let next: Vec<&str> = catalog.recommend("leh", 2).iter().map(|n| n.id()).collect();
//! assert_eq!(next, vec!["gulmarg", "goa"]);
//! # Ok::<(), CatalogError>(())
//! ```

pub mod api; // JSON views
pub mod common;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod recommend;
pub mod search;
pub mod text;
pub mod traits;
// Raw input shared by the loaders
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::{CatalogStats, DEFAULT_RECOMMENDATIONS, MAX_RECOMMENDATIONS};
pub use crate::discovery::DiscoveryPath;
pub use crate::error::{CatalogError, Result};
pub use crate::search::SearchIndex;
pub use crate::traits::{CatalogBackend, DefaultBackend, NameMatch, SharedBackend};
pub use model::{
    BookingOption, Catalog, CatalogBuilder, DefaultCatalog, Destination, DestinationDetail, Guide,
    Node, NodeKind,
};
