use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::vehicle::{VehicleCategory, VehicleUnit};
use super::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripDirection {
    #[serde(rename = "ONE_WAY")]
    OneWay,
    #[serde(rename = "ROUND_TRIP")]
    RoundTrip,
}

impl TripDirection {
    /// Maps the search form value. Anything other than "roundtrip" falls
    /// back to one-way.
    pub fn from_form(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("roundtrip") {
            TripDirection::RoundTrip
        } else {
            TripDirection::OneWay
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TripDirection::OneWay => "ONE_WAY",
            TripDirection::RoundTrip => "ROUND_TRIP",
        }
    }
}

/// A priced transfer for a vehicle unit within a zone. Duplicate rows for
/// the same (zone, unit, direction) are tolerated at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rate {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub zone_id: ObjectId,
    pub vehicle_unit_id: ObjectId,
    pub direction: TripDirection,
    pub price: Decimal,
}

impl Rate {
    pub fn new(
        zone_id: ObjectId,
        vehicle_unit_id: ObjectId,
        direction: TripDirection,
        price: Decimal,
    ) -> Result<Self, ModelError> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(ModelError::NegativePrice);
        }
        Ok(Self {
            id: None,
            zone_id,
            vehicle_unit_id,
            direction,
            price,
        })
    }
}

/// A rate with its vehicle unit and the unit's category attached, ready
/// for allocation.
#[derive(Debug, Clone)]
pub struct RateRecord {
    pub rate: Rate,
    pub unit: VehicleUnit,
    pub category: VehicleCategory,
}
