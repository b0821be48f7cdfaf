use mongodb::bson::oid::ObjectId;

use crate::db::catalog::CatalogStore;
use crate::models::location::Location;
use crate::services::search_service::SearchError;

/// Decides which zone's rate table applies to a trip.
///
/// Airport pickups are priced by the destination zone, every other pickup
/// is priced by its own zone and the dropoff is ignored.
pub struct ZoneResolver;

impl ZoneResolver {
    pub fn effective_zone(pickup: &Location, dropoff: Option<&Location>) -> Option<ObjectId> {
        if pickup.is_airport {
            dropoff.and_then(|dropoff| dropoff.zone_id)
        } else {
            pickup.zone_id
        }
    }

    /// Loads both locations and resolves the pricing zone. A pickup id that
    /// does not exist is fatal; a dropoff that does not exist just leaves
    /// the trip without a destination zone.
    pub async fn resolve(
        store: &dyn CatalogStore,
        pickup_id: ObjectId,
        dropoff_id: Option<ObjectId>,
    ) -> Result<(Location, Option<ObjectId>), SearchError> {
        let pickup = store
            .location_by_id(pickup_id)
            .await?
            .ok_or(SearchError::LocationNotFound)?;

        let dropoff = match dropoff_id {
            Some(id) => store.location_by_id(id).await?,
            None => None,
        };

        let zone_id = Self::effective_zone(&pickup, dropoff.as_ref());
        Ok((pickup, zone_id))
    }
}
