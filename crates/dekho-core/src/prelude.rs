// crates/dekho-core/src/prelude.rs
//! `use dekho_core::prelude::*;` brings in everything needed to load and
//! query a catalog.

pub use crate::api::{NodeView, TreeView};
pub use crate::discovery::DiscoveryPath;
pub use crate::error::{CatalogError, Result};
pub use crate::model::{Catalog, CatalogBuilder, Destination, Node, NodeKind};
pub use crate::search::SearchIndex;
pub use crate::traits::{CatalogBackend, DefaultBackend, NameMatch};
