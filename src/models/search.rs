use serde::{Deserialize, Serialize};

use super::offer::TransferOption;
use super::rate::TripDirection;

/// Raw transfer search form values. Everything is optional; the service
/// decides what an incomplete request looks like. `people` stays a string
/// so that empty or garbled values degrade to zero instead of rejecting
/// the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferSearchParams {
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub dropoff_location: Option<String>,
    #[serde(default)]
    pub car_type: Option<String>,
    #[serde(default)]
    pub people: Option<String>,
    #[serde(default)]
    pub trip_type: Option<String>,
}

impl TransferSearchParams {
    pub fn party_size(&self) -> u32 {
        self.people
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The search ran; `offers` holds whatever matched (possibly nothing).
    Priced,
    /// Required inputs were missing, the catalog was never consulted.
    Incomplete,
    /// The pickup exists but no pricing zone applies to the trip.
    UnassignedZone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferSearchResponse {
    pub status: SearchStatus,
    pub direction: TripDirection,
    pub offers: Vec<TransferOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}
