// crates/dekho-core/src/raw.rs
use serde::Deserialize;

/// Raw node structure as it comes from JSON.
///
/// A node with a `city` is a destination; otherwise it needs a `label` and is
/// a category. Unknown keys (such as `image`) are ignored.
///
/// ```json
/// {
///   "id": "goa",
///   "city": "Goa",
///   "state": "Goa",
///   "description": "A kaleidoscope of cultures.",
///   "tags": ["Beach", "Nightlife"],
///   "details": { "bestSeason": "November to February", "rating": "4.6/5.0" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct NodeRaw {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub details: Option<DetailsRaw>,
    #[serde(default)]
    pub children: Vec<NodeRaw>,
}

/// Raw destination detail record.
#[derive(Debug, Default, Deserialize)]
pub struct DetailsRaw {
    #[serde(rename = "bestSeason", default)]
    pub best_season: Option<String>,
    #[serde(rename = "mustTry", default)]
    pub must_try: Option<String>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(rename = "localFood", default)]
    pub local_food: Option<String>,
    #[serde(rename = "hiddenGem", default)]
    pub hidden_gem: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub coords: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(rename = "complexityIdx", default)]
    pub complexity_idx: Option<String>,
    #[serde(default)]
    pub guide: Option<GuideRaw>,
    #[serde(rename = "bookingOptions", default)]
    pub booking_options: Vec<BookingOptionRaw>,
}

#[derive(Debug, Deserialize)]
pub struct GuideRaw {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingOptionRaw {
    pub activity: String,
    #[serde(default)]
    pub price: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}
