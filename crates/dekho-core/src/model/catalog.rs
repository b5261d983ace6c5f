// crates/dekho-core/src/model/catalog.rs
use super::node::Node;
use crate::common::CatalogStats;
use crate::error::{CatalogError, Result};
use crate::traits::{CatalogBackend, DefaultBackend};
use std::collections::HashSet;
use tracing::debug;

/// The destination tree.
///
/// Owns the root [`Node`]. A catalog can only be obtained from
/// [`CatalogBuilder::build`] (directly, or through the loaders), which checks
/// the tree once; afterwards it is read-only and can be shared freely between
/// readers.
///
/// Query entry points live next to their algorithms:
/// - [`Catalog::search_index`] (trie prefix search)
/// - [`Catalog::find_path`] (DFS discovery path)
/// - [`Catalog::recommend`] (circular recommendations)
#[derive(Clone, Debug)]
pub struct Catalog<B: CatalogBackend = DefaultBackend> {
    root: Node<B>,
}

/// Convenient alias for the default backend.
pub type DefaultCatalog = Catalog<DefaultBackend>;

/// Assembles and validates a [`Catalog`].
///
/// # Example
///
/// ```rust
/// use dekho_core::{Catalog, CatalogBuilder, Destination, Node};
///
/// let catalog: Catalog = CatalogBuilder::new(Node::category("dekho-india", "DEKHO BHARAT", ""))
///     .with_child(
///         Node::category("beaches", "Coastal Horizons", "")
///             .with_child(Node::destination("goa", "", Destination::new("Goa", "Goa"))),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.stats().destinations, 1);
/// ```
#[derive(Clone, Debug)]
pub struct CatalogBuilder<B: CatalogBackend = DefaultBackend> {
    root: Node<B>,
}

impl<B: CatalogBackend> CatalogBuilder<B> {
    pub fn new(root: Node<B>) -> Self {
        CatalogBuilder { root }
    }

    /// Attaches a top-level child (usually a category) to the root.
    pub fn with_child(mut self, child: Node<B>) -> Self {
        self.root.add_child(child);
        self
    }

    pub fn add_child(&mut self, child: Node<B>) {
        self.root.add_child(child);
    }

    /// Validates the tree and freezes it into a [`Catalog`].
    ///
    /// Fails with [`CatalogError::DuplicateId`] when an identifier appears
    /// twice, and with [`CatalogError::InvalidData`] for an empty id, an
    /// empty category label or an empty destination city.
    pub fn build(self) -> Result<Catalog<B>> {
        let mut seen = HashSet::new();
        validate(&self.root, &mut seen)?;

        let catalog = Catalog { root: self.root };
        let stats = catalog.stats();
        debug!(
            categories = stats.categories,
            destinations = stats.destinations,
            max_depth = stats.max_depth,
            "catalog built"
        );
        Ok(catalog)
    }
}

fn validate<'a, B: CatalogBackend>(node: &'a Node<B>, seen: &mut HashSet<&'a str>) -> Result<()> {
    let id = node.id();
    if id.trim().is_empty() {
        return Err(CatalogError::InvalidData(format!(
            "node '{}' has an empty id",
            node.display_name()
        )));
    }
    if node.display_name().trim().is_empty() {
        let what = if node.is_destination() { "city" } else { "label" };
        return Err(CatalogError::InvalidData(format!(
            "node '{id}' has an empty {what}"
        )));
    }
    if !seen.insert(id) {
        return Err(CatalogError::DuplicateId(id.to_string()));
    }
    for child in node.children() {
        validate(child, seen)?;
    }
    Ok(())
}

impl<B: CatalogBackend> Catalog<B> {
    pub fn root(&self) -> &Node<B> {
        &self.root
    }

    /// Iterates over every node in pre-order (parent before children,
    /// children in display order).
    pub fn iter(&self) -> PreOrder<'_, B> {
        PreOrder {
            stack: vec![&self.root],
        }
    }

    /// Finds a node by id anywhere in the tree.
    pub fn find_node(&self, id: &str) -> Option<&Node<B>> {
        self.iter().find(|n| n.id() == id)
    }

    /// The flattened destination sequence.
    ///
    /// Every node carrying destination attributes is included, whether or not
    /// it has children of its own, in pre-order. Recomputed on every call.
    pub fn destinations(&self) -> Vec<&Node<B>> {
        self.iter().filter(|n| n.is_destination()).collect()
    }

    /// Aggregate statistics for the catalog.
    pub fn stats(&self) -> CatalogStats {
        let mut categories = 0usize;
        let mut destinations = 0usize;
        for node in self.iter() {
            if node.is_destination() {
                destinations += 1;
            } else {
                categories += 1;
            }
        }

        CatalogStats {
            categories,
            destinations,
            max_depth: max_depth(&self.root),
        }
    }
}

fn max_depth<B: CatalogBackend>(node: &Node<B>) -> usize {
    node.children()
        .iter()
        .map(|c| 1 + max_depth(c))
        .max()
        .unwrap_or(0)
}

impl<'a, B: CatalogBackend> IntoIterator for &'a Catalog<B> {
    type Item = &'a Node<B>;
    type IntoIter = PreOrder<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the nodes of a [`Catalog`].
#[derive(Debug)]
pub struct PreOrder<'a, B: CatalogBackend> {
    stack: Vec<&'a Node<B>>,
}

impl<'a, B: CatalogBackend> Iterator for PreOrder<'a, B> {
    type Item = &'a Node<B>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
