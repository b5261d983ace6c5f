// crates/dekho-core/src/discovery.rs
use crate::model::{Catalog, Node};
use crate::traits::{CatalogBackend, DefaultBackend};
use tracing::{debug, trace};

/// The chain of nodes from the catalog root down to a discovered node.
///
/// Always holds at least one node: the root. Consecutive nodes are direct
/// parent/child pairs.
#[derive(Debug, Clone)]
pub struct DiscoveryPath<'a, B: CatalogBackend = DefaultBackend> {
    nodes: Vec<&'a Node<B>>,
}

impl<'a, B: CatalogBackend> DiscoveryPath<'a, B> {
    pub fn nodes(&self) -> &[&'a Node<B>] {
        &self.nodes
    }

    /// The node that was searched for.
    pub fn target(&self) -> &'a Node<B> {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges between the root and the target.
    pub fn depth(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.nodes.iter().map(|n| n.id()).collect()
    }

    /// Display names joined with `separator`, e.g.
    /// `"DEKHO BHARAT >> Coastal Horizons >> Varkala"`.
    pub fn breadcrumbs(&self, separator: &str) -> String {
        self.nodes
            .iter()
            .map(|n| n.display_name())
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn into_nodes(self) -> Vec<&'a Node<B>> {
        self.nodes
    }
}

impl<B: CatalogBackend> Catalog<B> {
    /// Finds the path from the root to the node with `target_id`.
    ///
    /// Pre-order depth-first search: a node is pushed on the path before its
    /// children are explored and popped again if none of them leads to the
    /// target. The first match wins and remaining siblings are skipped.
    ///
    /// Returns `None` when no node has that id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dekho_core::DefaultCatalog;
    ///
    /// let catalog = DefaultCatalog::bundled().unwrap();
    /// let path = catalog.find_path("varkala").unwrap();
    /// assert_eq!(path.ids(), vec!["dekho-india", "beaches", "varkala"]);
    /// assert_eq!(
    ///     path.breadcrumbs(" >> "),
    ///     "DEKHO BHARAT >> Coastal Horizons >> Varkala"
    /// );
    /// assert!(catalog.find_path("atlantis").is_none());
    /// ```
    pub fn find_path(&self, target_id: &str) -> Option<DiscoveryPath<'_, B>> {
        let mut path = Vec::new();
        if search(self.root(), target_id, &mut path) {
            debug!(target = target_id, depth = path.len() - 1, "discovery path found");
            Some(DiscoveryPath { nodes: path })
        } else {
            debug!(target = target_id, "discovery path not found");
            None
        }
    }
}

fn search<'a, B: CatalogBackend>(
    current: &'a Node<B>,
    target_id: &str,
    path: &mut Vec<&'a Node<B>>,
) -> bool {
    path.push(current);
    trace!(id = current.id(), depth = path.len() - 1, "entering node");

    if current.id() == target_id {
        trace!(id = current.id(), "target reached");
        return true;
    }

    for child in current.children() {
        if search(child, target_id, path) {
            return true;
        }
    }

    // Backtrack: this subtree does not contain the target.
    path.pop();
    trace!(id = current.id(), "backtracking");
    false
}
