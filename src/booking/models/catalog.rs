use super::lenient::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of one bookable resource (a court) within a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub i64);

impl ResourceId {
    /// Parses the decimal string form the booking API uses for `bizItemId`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(ResourceId)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        ResourceId(value)
    }
}

/// Resolved resources for one venue and month, id to display name.
pub type ResourceCatalog = BTreeMap<ResourceId, String>;

/// One entry of the `bizItems` catalog query.
/// Only the fields used for resolution are typed; the rest is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "bizItemId", default)]
    pub biz_item_id: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogData {
    #[serde(rename = "bizItems")]
    pub biz_items: Vec<CatalogItem>,
}
