// crates/dekho-core/src/recommend.rs
use crate::common::{DEFAULT_RECOMMENDATIONS, MAX_RECOMMENDATIONS};
use crate::model::{Catalog, Node};
use crate::traits::CatalogBackend;
use tracing::debug;

impl<B: CatalogBackend> Catalog<B> {
    /// Suggests the `count` destinations that follow `current_id`.
    ///
    /// The destinations are flattened in pre-order (see
    /// [`Catalog::destinations`]) and treated as a ring: after the last one
    /// comes the first again. The result holds positions `i + 1 ..= i + count`
    /// modulo the number of destinations, so it repeats entries once `count`
    /// reaches the ring size, and a lone destination recommends itself.
    ///
    /// `count` is clamped to [`MAX_RECOMMENDATIONS`]. An id that is not a
    /// destination yields an empty list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dekho_core::DefaultCatalog;
    ///
    /// let catalog = DefaultCatalog::bundled().unwrap();
    /// let next: Vec<&str> = catalog.recommend("kaziranga", 2).iter().map(|n| n.id()).collect();
    /// assert_eq!(next, vec!["rishikesh", "leh"]);
    /// ```
    pub fn recommend(&self, current_id: &str, count: usize) -> Vec<&Node<B>> {
        let ring = self.destinations();
        let Some(index) = ring.iter().position(|n| n.id() == current_id) else {
            debug!(current = current_id, "no recommendations: not a destination");
            return Vec::new();
        };

        let count = count.min(MAX_RECOMMENDATIONS);
        (1..=count)
            .map(|step| ring[(index + step) % ring.len()])
            .collect()
    }

    /// [`Catalog::recommend`] with [`DEFAULT_RECOMMENDATIONS`] entries.
    pub fn recommend_default(&self, current_id: &str) -> Vec<&Node<B>> {
        self.recommend(current_id, DEFAULT_RECOMMENDATIONS)
    }
}
