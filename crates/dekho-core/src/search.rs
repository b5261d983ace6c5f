// crates/dekho-core/src/search.rs
use crate::model::{Catalog, Node};
use crate::text::fold_key;
use crate::traits::{CatalogBackend, DefaultBackend};
use std::collections::BTreeMap;
use tracing::debug;

/// Prefix index over destination names.
///
/// Every destination's city name is folded with [`fold_key`] and inserted one
/// character per edge. The node where a name ends keeps a back-reference to
/// each destination carrying that name, so two places called "Sunset Point"
/// are both retrievable. The index borrows the catalog it was built from.
///
/// Children are kept in a `BTreeMap`, so [`SearchIndex::search`] returns
/// matches in alphabetical order of their folded names; destinations sharing
/// a name come back in catalog order.
///
/// # Example
///
/// ```rust
/// use dekho_core::DefaultCatalog;
///
/// let catalog = DefaultCatalog::bundled().unwrap();
/// let index = catalog.search_index();
///
/// let hits: Vec<&str> = index.search("GO").iter().map(|n| n.id()).collect();
/// assert_eq!(hits, vec!["goa"]);
/// assert!(index.search("xyz").is_empty());
/// ```
#[derive(Debug)]
pub struct SearchIndex<'a, B: CatalogBackend = DefaultBackend> {
    root: TrieNode<'a, B>,
    len: usize,
}

#[derive(Debug)]
struct TrieNode<'a, B: CatalogBackend> {
    children: BTreeMap<char, TrieNode<'a, B>>,
    /// Non-empty exactly when a name ends here.
    entries: Vec<&'a Node<B>>,
}

impl<B: CatalogBackend> Default for TrieNode<'_, B> {
    fn default() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<B: CatalogBackend> Default for SearchIndex<'_, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B: CatalogBackend> SearchIndex<'a, B> {
    /// An empty index.
    pub fn new() -> Self {
        SearchIndex {
            root: TrieNode::default(),
            len: 0,
        }
    }

    /// Builds the index from every destination of `catalog`, in pre-order.
    pub fn build(catalog: &'a Catalog<B>) -> Self {
        let mut index = Self::new();
        for node in catalog.iter() {
            index.insert(node);
        }
        debug!(entries = index.len, "search index built");
        index
    }

    /// Adds a destination to the index.
    ///
    /// Categories and destinations whose folded name is empty are ignored.
    /// Inserting the same node twice has no effect.
    pub fn insert(&mut self, node: &'a Node<B>) {
        let Some(dest) = node.as_destination() else {
            return;
        };
        let key = fold_key(dest.city());
        if key.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for ch in key.chars() {
            current = current.children.entry(ch).or_default();
        }
        if !current.entries.iter().any(|n| std::ptr::eq(*n, node)) {
            current.entries.push(node);
            self.len += 1;
        }
    }

    /// Returns every destination whose folded name starts with the folded
    /// `prefix`.
    ///
    /// An unknown prefix yields an empty list; an empty prefix yields every
    /// indexed destination.
    pub fn search(&self, prefix: &str) -> Vec<&'a Node<B>> {
        let mut current = &self.root;
        for ch in fold_key(prefix).chars() {
            match current.children.get(&ch) {
                Some(next) => current = next,
                None => return Vec::new(),
            }
        }

        let mut results = Vec::new();
        collect_all(current, &mut results);
        results
    }

    /// Number of indexed destinations.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn collect_all<'a, B: CatalogBackend>(node: &TrieNode<'a, B>, results: &mut Vec<&'a Node<B>>) {
    results.extend(node.entries.iter().copied());
    for child in node.children.values() {
        collect_all(child, results);
    }
}

impl<B: CatalogBackend> Catalog<B> {
    /// Builds a [`SearchIndex`] over this catalog's destinations.
    pub fn search_index(&self) -> SearchIndex<'_, B> {
        SearchIndex::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogBuilder, Destination};
    use pretty_assertions::assert_eq;

    fn city(id: &str, name: &str) -> Node {
        Node::destination(id, "", Destination::new(name, "State"))
    }

    fn sample() -> Catalog {
        CatalogBuilder::new(Node::category("root", "Root", ""))
            .with_child(
                Node::category("hills", "Hills", "")
                    .with_child(city("gulmarg", "Gulmarg"))
                    .with_child(city("gokarna", "Gokarna"))
                    .with_child(city("sunset-a", "Sunset Point")),
            )
            .with_child(
                Node::category("coast", "Coast", "")
                    .with_child(city("goa", "Goa"))
                    .with_child(city("sunset-b", "Sunset Point")),
            )
            .build()
            .unwrap()
    }

    fn ids<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
        nodes.iter().map(|n| n.id()).collect()
    }

    #[test]
    fn prefix_results_are_alphabetical() {
        let catalog = sample();
        let index = catalog.search_index();
        assert_eq!(ids(&index.search("g")), vec!["goa", "gokarna", "gulmarg"]);
        assert_eq!(ids(&index.search("go")), vec!["goa", "gokarna"]);
        assert_eq!(ids(&index.search("gok")), vec!["gokarna"]);
    }

    #[test]
    fn categories_are_not_indexed() {
        let catalog = sample();
        let index = catalog.search_index();
        assert_eq!(index.len(), 5);
        assert!(index.search("hills").is_empty());
        assert!(index.search("coast").is_empty());
    }

    #[test]
    fn same_name_keeps_every_destination() {
        let catalog = sample();
        let index = catalog.search_index();
        assert_eq!(ids(&index.search("sunset point")), vec!["sunset-a", "sunset-b"]);
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let catalog = sample();
        let index = catalog.search_index();
        assert_eq!(index.search("").len(), 5);
    }

    #[test]
    fn unknown_prefix_is_empty_not_error() {
        let catalog = sample();
        let index = catalog.search_index();
        assert!(index.search("goaz").is_empty());
        assert!(index.search("x").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = sample();
        let index = catalog.search_index();
        assert_eq!(ids(&index.search("GOA")), ids(&index.search("goa")));
        assert_eq!(ids(&index.search("SuNsEt")), vec!["sunset-a", "sunset-b"]);
    }

    #[test]
    fn insert_ignores_categories_and_repeats() {
        let catalog = sample();
        let mut index = SearchIndex::new();
        index.insert(catalog.root());
        assert!(index.is_empty());

        let goa = catalog.find_node("goa").unwrap();
        index.insert(goa);
        index.insert(goa);
        assert_eq!(index.len(), 1);
        assert_eq!(ids(&index.search("goa")), vec!["goa"]);
    }
}
