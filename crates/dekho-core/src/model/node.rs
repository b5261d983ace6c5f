// crates/dekho-core/src/model/node.rs
use crate::text::parse_leading_f64;
use crate::traits::{CatalogBackend, DefaultBackend, NameMatch};

/// A node of the catalog tree.
///
/// A node is either a category (an aggregation such as "Coastal Horizons") or
/// a destination (a concrete city). It owns its children exclusively, in
/// display order, so a node can never appear under two parents and the tree
/// can never contain a cycle.
///
/// Nodes are assembled with [`Node::category`] / [`Node::destination`] and
/// [`Node::with_child`], then handed to a
/// [`CatalogBuilder`](crate::CatalogBuilder). Once inside a
/// [`Catalog`](crate::Catalog) they are only reachable through shared
/// references.
#[derive(Clone, Debug)]
pub struct Node<B: CatalogBackend = DefaultBackend> {
    pub(crate) id: B::Str,
    pub(crate) description: B::Str,
    pub(crate) kind: NodeKind<B>,
    pub(crate) children: Vec<Node<B>>,
}

/// The two kinds of catalog node.
#[derive(Clone, Debug)]
pub enum NodeKind<B: CatalogBackend = DefaultBackend> {
    Category { label: B::Str },
    Destination(Destination<B>),
}

/// Attributes carried by a destination node.
#[derive(Clone, Debug)]
pub struct Destination<B: CatalogBackend = DefaultBackend> {
    pub city: B::Str,
    pub state: B::Str,
    /// Free-text tags; order is preserved and duplicates are allowed.
    pub tags: Vec<B::Str>,
    pub details: Option<DestinationDetail<B>>,
}

/// Descriptive record attached to a destination.
///
/// Every field is free text as it appears in the source data. Numeric views
/// of the rating and complexity index are available through
/// [`DestinationDetail::rating_value`] and
/// [`DestinationDetail::complexity_value`].
#[derive(Clone, Debug)]
pub struct DestinationDetail<B: CatalogBackend = DefaultBackend> {
    pub best_season: Option<B::Str>,
    /// The signature activity.
    pub must_try: Option<B::Str>,
    pub activities: Option<B::Str>,
    pub local_food: Option<B::Str>,
    /// A lesser-known point of interest.
    pub hidden_gem: Option<B::Str>,
    pub climate: Option<B::Str>,
    pub coords: Option<B::Str>,
    pub rating: Option<B::Str>,
    pub complexity_idx: Option<B::Str>,
    pub guide: Option<Guide<B>>,
    pub booking_options: Vec<BookingOption<B>>,
}

/// Local guide contact for a destination.
#[derive(Clone, Debug)]
pub struct Guide<B: CatalogBackend = DefaultBackend> {
    pub name: B::Str,
    pub phone: B::Str,
    pub email: B::Str,
}

/// A bookable activity at a destination.
#[derive(Clone, Debug)]
pub struct BookingOption<B: CatalogBackend = DefaultBackend> {
    pub activity: B::Str,
    pub price: B::Str,
    /// Activity type, e.g. "Adventure" or "Cultural".
    pub kind: B::Str,
}

impl<B: CatalogBackend> Node<B> {
    /// Creates a category node without children.
    pub fn category(id: &str, label: &str, description: &str) -> Self {
        Node {
            id: B::str_from(id),
            description: B::str_from(description),
            kind: NodeKind::Category {
                label: B::str_from(label),
            },
            children: Vec::new(),
        }
    }

    /// Creates a destination node without children.
    pub fn destination(id: &str, description: &str, destination: Destination<B>) -> Self {
        Node {
            id: B::str_from(id),
            description: B::str_from(description),
            kind: NodeKind::Destination(destination),
            children: Vec::new(),
        }
    }

    /// Appends `child` and returns the node, for literal-style construction.
    pub fn with_child(mut self, child: Node<B>) -> Self {
        self.children.push(child);
        self
    }

    /// Appends `child` after the existing children.
    pub fn add_child(&mut self, child: Node<B>) {
        self.children.push(child);
    }

    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    pub fn description(&self) -> &str {
        self.description.as_ref()
    }

    pub fn kind(&self) -> &NodeKind<B> {
        &self.kind
    }

    pub fn children(&self) -> &[Node<B>] {
        &self.children
    }

    /// City name for destinations, label for categories.
    pub fn display_name(&self) -> &str {
        match &self.kind {
            NodeKind::Category { label } => label.as_ref(),
            NodeKind::Destination(dest) => dest.city.as_ref(),
        }
    }

    pub fn is_destination(&self) -> bool {
        matches!(self.kind, NodeKind::Destination(_))
    }

    pub fn is_category(&self) -> bool {
        matches!(self.kind, NodeKind::Category { .. })
    }

    pub fn as_destination(&self) -> Option<&Destination<B>> {
        match &self.kind {
            NodeKind::Destination(dest) => Some(dest),
            NodeKind::Category { .. } => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

impl<B: CatalogBackend> NameMatch for Node<B> {
    fn name_str(&self) -> &str {
        self.display_name()
    }
}

impl<B: CatalogBackend> Destination<B> {
    /// Creates a destination with no tags and no detail record.
    pub fn new(city: &str, state: &str) -> Self {
        Destination {
            city: B::str_from(city),
            state: B::str_from(state),
            tags: Vec::new(),
            details: None,
        }
    }

    pub fn with_tags<'t>(mut self, tags: impl IntoIterator<Item = &'t str>) -> Self {
        self.tags.extend(tags.into_iter().map(B::str_from));
        self
    }

    pub fn with_details(mut self, details: DestinationDetail<B>) -> Self {
        self.details = Some(details);
        self
    }

    pub fn city(&self) -> &str {
        self.city.as_ref()
    }

    pub fn state(&self) -> &str {
        self.state.as_ref()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().map(|t| t.as_ref())
    }

    pub fn details(&self) -> Option<&DestinationDetail<B>> {
        self.details.as_ref()
    }
}

impl<B: CatalogBackend> DestinationDetail<B> {
    /// Rating as a number, e.g. `"4.8/5.0"` → `4.8`.
    pub fn rating_value(&self) -> Option<f64> {
        self.rating.as_ref().and_then(|r| parse_leading_f64(r.as_ref()))
    }

    /// Complexity index as a number, e.g. `"0.45 (Moderate)"` → `0.45`.
    pub fn complexity_value(&self) -> Option<f64> {
        self.complexity_idx
            .as_ref()
            .and_then(|c| parse_leading_f64(c.as_ref()))
    }

    pub fn guide(&self) -> Option<&Guide<B>> {
        self.guide.as_ref()
    }

    pub fn booking_options(&self) -> &[BookingOption<B>] {
        &self.booking_options
    }
}

impl<B: CatalogBackend> Default for DestinationDetail<B> {
    fn default() -> Self {
        DestinationDetail {
            best_season: None,
            must_try: None,
            activities: None,
            local_food: None,
            hidden_gem: None,
            climate: None,
            coords: None,
            rating: None,
            complexity_idx: None,
            guide: None,
            booking_options: Vec::new(),
        }
    }
}
