// crates/dekho-core/src/api.rs

//! Serializable views over catalog nodes.
//!
//! The model types keep their strings behind a [`CatalogBackend`]; these
//! wrappers borrow them as `&str` and derive `Serialize`, which is what a CLI
//! or service layer hands to `serde_json`.

use crate::model::{BookingOption, DestinationDetail, Guide, Node, NodeKind};
use crate::traits::CatalogBackend;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKindTag {
    Category,
    Destination,
}

/// Summary of a single node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeView<'a> {
    pub id: &'a str,
    pub kind: NodeKindTag,
    /// City for destinations, label for categories.
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'a str>,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailView<'a>>,
    pub children: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_season: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_try: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_food: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_gem: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity_idx: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<GuideView<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub booking_options: Vec<BookingView<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuideView<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingView<'a> {
    pub activity: &'a str,
    pub price: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}

/// A node together with its whole subtree.
#[derive(Debug, Clone, Serialize)]
pub struct TreeView<'a> {
    #[serde(flatten)]
    pub node: NodeView<'a>,
    #[serde(rename = "nodes", skip_serializing_if = "Vec::is_empty")]
    pub subtree: Vec<TreeView<'a>>,
}

fn opt_str<S: AsRef<str>>(v: &Option<S>) -> Option<&str> {
    v.as_ref().map(|s| s.as_ref())
}

impl<'a, B: CatalogBackend> From<&'a Node<B>> for NodeView<'a> {
    fn from(node: &'a Node<B>) -> Self {
        let (kind, state, tags, details) = match node.kind() {
            NodeKind::Category { .. } => (NodeKindTag::Category, None, Vec::new(), None),
            NodeKind::Destination(dest) => (
                NodeKindTag::Destination,
                Some(dest.state()),
                dest.tags().collect(),
                dest.details().map(DetailView::from),
            ),
        };

        NodeView {
            id: node.id(),
            kind,
            name: node.display_name(),
            state,
            description: node.description(),
            tags,
            details,
            children: node.children().len(),
        }
    }
}

impl<'a, B: CatalogBackend> From<&'a DestinationDetail<B>> for DetailView<'a> {
    fn from(d: &'a DestinationDetail<B>) -> Self {
        DetailView {
            best_season: opt_str(&d.best_season),
            must_try: opt_str(&d.must_try),
            activities: opt_str(&d.activities),
            local_food: opt_str(&d.local_food),
            hidden_gem: opt_str(&d.hidden_gem),
            climate: opt_str(&d.climate),
            coords: opt_str(&d.coords),
            rating: opt_str(&d.rating),
            complexity_idx: opt_str(&d.complexity_idx),
            guide: d.guide().map(GuideView::from),
            booking_options: d.booking_options().iter().map(BookingView::from).collect(),
        }
    }
}

impl<'a, B: CatalogBackend> From<&'a Guide<B>> for GuideView<'a> {
    fn from(g: &'a Guide<B>) -> Self {
        GuideView {
            name: g.name.as_ref(),
            phone: g.phone.as_ref(),
            email: g.email.as_ref(),
        }
    }
}

impl<'a, B: CatalogBackend> From<&'a BookingOption<B>> for BookingView<'a> {
    fn from(b: &'a BookingOption<B>) -> Self {
        BookingView {
            activity: b.activity.as_ref(),
            price: b.price.as_ref(),
            kind: b.kind.as_ref(),
        }
    }
}

impl<'a, B: CatalogBackend> From<&'a Node<B>> for TreeView<'a> {
    fn from(node: &'a Node<B>) -> Self {
        TreeView {
            node: NodeView::from(node),
            subtree: node.children().iter().map(TreeView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Destination;
    use serde_json::json;

    #[test]
    fn category_view_omits_destination_fields() {
        let node: Node = Node::category("beaches", "Coastal Horizons", "Waves.");
        let value = serde_json::to_value(NodeView::from(&node)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "beaches",
                "kind": "category",
                "name": "Coastal Horizons",
                "description": "Waves.",
                "children": 0
            })
        );
    }

    #[test]
    fn destination_view_carries_details() {
        let detail: DestinationDetail = DestinationDetail {
            rating: Some("4.6/5.0".to_string()),
            guide: Some(Guide {
                name: "Joao Rodrigues".to_string(),
                phone: "+91 43210 98765".to_string(),
                email: "joao.goa@dekhoindia.in".to_string(),
            }),
            booking_options: vec![BookingOption {
                activity: "Island Hopping Tour".to_string(),
                price: "₹2,500".to_string(),
                kind: "Leisure".to_string(),
            }],
            ..Default::default()
        };
        let node: Node = Node::destination(
            "goa",
            "",
            Destination::new("Goa", "Goa")
                .with_tags(["Beach"])
                .with_details(detail),
        );

        let value = serde_json::to_value(NodeView::from(&node)).unwrap();
        assert_eq!(value["kind"], "destination");
        assert_eq!(value["state"], "Goa");
        assert_eq!(value["tags"], json!(["Beach"]));
        assert_eq!(value["details"]["rating"], "4.6/5.0");
        assert_eq!(value["details"]["guide"]["name"], "Joao Rodrigues");
        assert_eq!(value["details"]["bookingOptions"][0]["type"], "Leisure");
        assert!(value["details"].get("bestSeason").is_none());
    }

    #[test]
    fn tree_view_nests_children() {
        let root: Node = Node::category("root", "Root", "").with_child(Node::category(
            "c",
            "C",
            "",
        ));
        let value = serde_json::to_value(TreeView::from(&root)).unwrap();
        assert_eq!(value["id"], "root");
        assert_eq!(value["nodes"][0]["id"], "c");
        assert!(value["nodes"][0].get("nodes").is_none());
    }
}
