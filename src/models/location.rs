use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A pickup or dropoff point. `zone_id` is the pricing zone the location
/// belongs to; locations without a zone are valid but cannot be priced on
/// their own. Airports never carry a zone, the other end of the trip
/// decides the pricing zone for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ObjectId>,
    #[serde(default)]
    pub is_airport: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, zone_id: Option<ObjectId>) -> Self {
        Self {
            id: None,
            name: name.into(),
            zone_id,
            is_airport: false,
            description: None,
        }
    }

    pub fn airport(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            zone_id: None,
            is_airport: true,
            description: None,
        }
    }
}
