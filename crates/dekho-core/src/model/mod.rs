// crates/dekho-core/src/model/mod.rs
pub mod catalog;
pub mod convert;
pub mod node;

pub use catalog::{Catalog, CatalogBuilder, DefaultCatalog, PreOrder};
pub use node::{BookingOption, Destination, DestinationDetail, Guide, Node, NodeKind};
