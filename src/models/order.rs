use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ModelError;

/// One line of a checkout order, usually a single transfer leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default = "default_item_name")]
    pub name: String,
    #[serde(default)]
    pub unit_amount: Decimal,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_unit_id: Option<String>,
}

impl Default for OrderItem {
    fn default() -> Self {
        Self {
            name: default_item_name(),
            unit_amount: Decimal::ZERO,
            date: String::new(),
            time: String::new(),
            vehicle_unit_id: None,
        }
    }
}

fn default_item_name() -> String {
    "Transfer".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
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

/// One end of a trip as submitted by the checkout form. The id and the
/// name are both optional; whichever resolves wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripStop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReturnTrip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
}

/// A checkout payload as assembled by the booking frontend. Unknown or
/// missing fields degrade to defaults; amounts are validated before any
/// gateway or store sees the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutOrder {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub customer: CustomerInfo,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_trip_type")]
    pub trip_type: String,
    #[serde(default)]
    pub people: u32,
    #[serde(default)]
    pub pickup: TripStop,
    #[serde(default)]
    pub dropoff: TripStop,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_trip: Option<ReturnTrip>,
}

impl Default for CheckoutOrder {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            customer: CustomerInfo::default(),
            total: Decimal::ZERO,
            currency: default_currency(),
            trip_type: default_trip_type(),
            people: 0,
            pickup: TripStop::default(),
            dropoff: TripStop::default(),
            return_trip: None,
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_trip_type() -> String {
    "oneway".to_string()
}

impl CheckoutOrder {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.total.is_sign_negative() && !self.total.is_zero() {
            return Err(ModelError::NegativePrice);
        }
        for item in &self.items {
            if item.unit_amount.is_sign_negative() && !item.unit_amount.is_zero() {
                return Err(ModelError::NegativePrice);
            }
        }
        Ok(())
    }

    pub fn is_round_trip(&self) -> bool {
        self.trip_type.trim().eq_ignore_ascii_case("roundtrip")
    }

    pub fn description(&self) -> String {
        format!("Transfer booking ({})", self.trip_type)
    }
}
