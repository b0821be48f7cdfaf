use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Canonical form of a vehicle category code: surrounding whitespace
/// stripped and uppercased. Codes are normalized when written and again
/// when compared, so rows that predate the cleanup still match.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// A bookable vehicle class (SEDAN, VAN, SUV...). `max_capacity` is the
/// default passenger capacity for units of this category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleCategory {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub max_capacity: u32,
}

impl VehicleCategory {
    pub fn new(code: &str, name: impl Into<String>, max_capacity: u32) -> Self {
        Self {
            id: None,
            code: normalize_code(code),
            name: name.into(),
            description: None,
            max_capacity: max_capacity.max(1),
        }
    }
}

/// A physical vehicle. `max_capacity` overrides the category default when
/// set; `asset` is an explicit display image reference (absolute URL or a
/// bare file name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleUnit {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub category_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

impl VehicleUnit {
    pub fn new(name: impl Into<String>, category_id: ObjectId) -> Self {
        Self {
            id: None,
            name: name.into(),
            category_id,
            max_capacity: None,
            description: None,
            asset: None,
        }
    }
}
