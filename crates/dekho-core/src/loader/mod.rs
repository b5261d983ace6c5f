// crates/dekho-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads a catalog from JSON: the dataset compiled into the library, a string,
//! any reader, or a file on disk (optionally gzip-compressed with the
//! `compact` feature). Every path goes through [`Catalog::from_raw`], so the
//! same validation applies whatever the source.

use crate::common::BUNDLED_DATASET;
use crate::error::Result;
use crate::model::Catalog;
use crate::raw::NodeRaw;
use crate::traits::{CatalogBackend, DefaultBackend};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod common_io;

static BUNDLED_JSON: &str = include_str!("../../data/dekho-india.json");

static CATALOG_CACHE: OnceCell<Catalog<DefaultBackend>> = OnceCell::new();

impl<B: CatalogBackend> Catalog<B> {
    /// Builds the catalog shipped with the library (three categories, eight
    /// destinations).
    pub fn bundled() -> Result<Self> {
        debug!(dataset = BUNDLED_DATASET, "loading bundled catalog");
        Self::from_json_str(BUNDLED_JSON)
    }

    /// Parses a nested JSON tree: `{ "id", "label" | "city", ..., "children": [...] }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: NodeRaw = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: NodeRaw = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Loads a catalog file. Names ending in `.gz` are decompressed on the fly.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let catalog = Self::from_reader(reader)?;
        info!(path = %path.display(), "catalog loaded");
        Ok(catalog)
    }
}

impl Catalog<DefaultBackend> {
    /// Directory holding the dataset sources of this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        BUNDLED_DATASET
    }

    /// Process-wide bundled catalog, built on first use.
    pub fn shared() -> Result<&'static Self> {
        CATALOG_CACHE.get_or_try_init(Self::bundled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn bundled_dataset_parses() {
        let catalog = Catalog::<DefaultBackend>::bundled().unwrap();
        let stats = catalog.stats();
        assert_eq!(stats.categories, 4);
        assert_eq!(stats.destinations, 8);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn shared_returns_the_same_instance() {
        let a = Catalog::shared().unwrap();
        let b = Catalog::shared().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn bundled_file_on_disk_matches_embedded_copy() {
        let path = Catalog::default_data_dir().join(Catalog::default_dataset_filename());
        let from_disk = Catalog::<DefaultBackend>::load_from_path(path).unwrap();
        assert_eq!(from_disk.stats(), Catalog::shared().unwrap().stats());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = Catalog::<DefaultBackend>::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
