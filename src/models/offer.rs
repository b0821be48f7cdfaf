use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate::{RateRecord, TripDirection};

/// One vehicle unit of a (possibly split) fleet assignment. When a party
/// does not fit in a single vehicle the allocator emits one offer per
/// unit needed, numbered from 1.
#[derive(Debug, Clone)]
pub struct Offer {
    pub record: RateRecord,
    pub unit_number: u32,
    pub total_units_in_group: u32,
    pub resolved_capacity: u32,
}

/// The wire shape of an offer. `id` is `<vehicle-unit-id>-<unit-number>`
/// and `image_url` is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOption {
    pub id: String,
    pub rate_id: String,
    pub vehicle_unit_id: String,
    pub unit_number: u32,
    pub vehicle_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_description: Option<String>,
    pub capacity: u32,
    pub price: Decimal,
    pub direction: TripDirection,
    pub image_url: String,
    pub is_fleet_split: bool,
    pub total_units_in_group: u32,
}
