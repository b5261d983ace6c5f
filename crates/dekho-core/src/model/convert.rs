// crates/dekho-core/src/model/convert.rs
use super::catalog::{Catalog, CatalogBuilder};
use super::node::{BookingOption, Destination, DestinationDetail, Guide, Node, NodeKind};
use crate::error::{CatalogError, Result};
use crate::raw::{DetailsRaw, NodeRaw};
use crate::traits::CatalogBackend;

/// **Standard Converter:** Raw -> Tree.
///
/// Decides the node kind from the raw fields and converts strings through the
/// backend. Structural checks (unique ids and so on) are left to
/// [`CatalogBuilder::build`].
pub fn from_raw<B: CatalogBackend>(raw: NodeRaw) -> Result<Node<B>> {
    let kind = match (raw.city, raw.label) {
        (Some(city), _) if !city.trim().is_empty() => NodeKind::Destination(Destination {
            city: B::str_from(&city),
            state: B::str_from(raw.state.as_deref().unwrap_or("")),
            tags: raw.tags.iter().map(|t| B::str_from(t)).collect(),
            details: raw.details.map(details_from_raw),
        }),
        (_, Some(label)) => NodeKind::Category {
            label: B::str_from(&label),
        },
        _ => {
            return Err(CatalogError::InvalidData(format!(
                "node '{}' has neither a city nor a label",
                raw.id
            )))
        }
    };

    let children = raw
        .children
        .into_iter()
        .map(from_raw)
        .collect::<Result<Vec<_>>>()?;

    Ok(Node {
        id: B::str_from(&raw.id),
        description: B::str_from(raw.description.as_deref().unwrap_or("")),
        kind,
        children,
    })
}

fn details_from_raw<B: CatalogBackend>(d: DetailsRaw) -> DestinationDetail<B> {
    DestinationDetail {
        best_season: d.best_season.as_deref().map(B::str_from),
        must_try: d.must_try.as_deref().map(B::str_from),
        activities: d.activities.as_deref().map(B::str_from),
        local_food: d.local_food.as_deref().map(B::str_from),
        hidden_gem: d.hidden_gem.as_deref().map(B::str_from),
        climate: d.climate.as_deref().map(B::str_from),
        coords: d.coords.as_deref().map(B::str_from),
        rating: d.rating.as_deref().map(B::str_from),
        complexity_idx: d.complexity_idx.as_deref().map(B::str_from),
        guide: d.guide.map(|g| Guide {
            name: B::str_from(&g.name),
            phone: B::str_from(&g.phone),
            email: B::str_from(&g.email),
        }),
        booking_options: d
            .booking_options
            .into_iter()
            .map(|b| BookingOption {
                activity: B::str_from(&b.activity),
                price: B::str_from(&b.price),
                kind: B::str_from(&b.kind),
            })
            .collect(),
    }
}

impl<B: CatalogBackend> Catalog<B> {
    /// Converts a raw tree and validates it into a catalog.
    pub fn from_raw(raw: NodeRaw) -> Result<Self> {
        CatalogBuilder::new(from_raw(raw)?).build()
    }
}
