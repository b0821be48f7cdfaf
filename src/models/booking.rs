use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Customer email, or a generated guest identifier when no email was
    /// supplied.
    pub client_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub company: String,
}

/// Trip legs of a booking. Location ids are kept when they resolved
/// against the catalog; the denormalized names are stored either way so
/// the booking stays readable if catalog rows disappear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location_id: Option<ObjectId>,
    #[serde(default)]
    pub pickup_location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_location_id: Option<ObjectId>,
    #[serde(default)]
    pub dropoff_location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_pickup_location_id: Option<ObjectId>,
    #[serde(default)]
    pub return_pickup_location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_dropoff_location_id: Option<ObjectId>,
    #[serde(default)]
    pub return_dropoff_location_name: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub pickup_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub return_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_unit_id: Option<ObjectId>,
    pub passenger_count: u32,
    pub one_way: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub reference: Uuid,
    pub customer: CustomerDetails,
    pub trip: TripDetails,
    pub total_amount: Decimal,
    pub currency: String,
    pub payment_method: String,
    pub trip_type: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}
