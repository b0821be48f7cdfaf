use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::db::catalog::{CatalogError, CatalogStore};
use crate::models::rate::TripDirection;
use crate::models::search::{SearchStatus, TransferSearchParams, TransferSearchResponse};
use crate::services::asset_resolver::AssetResolver;
use crate::services::fleet_allocator::FleetAllocator;
use crate::services::offer_presenter::OfferPresenter;
use crate::services::rate_query::RateQuery;
use crate::services::zone_resolver::ZoneResolver;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("location not found")]
    LocationNotFound,
    #[error("data store unavailable: {0}")]
    DataStoreUnavailable(#[from] CatalogError),
}

/// Runs the whole transfer search pipeline: resolve the pricing zone,
/// fetch matching rates, allocate fleet units, present offers.
pub struct SearchService;

impl SearchService {
    pub async fn execute(
        store: &dyn CatalogStore,
        assets: &AssetResolver,
        params: &TransferSearchParams,
    ) -> Result<TransferSearchResponse, SearchError> {
        let direction = TripDirection::from_form(params.trip_type.as_deref().unwrap_or(""));

        let pickup_raw = params.pickup_location.as_deref().unwrap_or("").trim();
        let category_raw = params.car_type.as_deref().unwrap_or("").trim();
        if pickup_raw.is_empty() || category_raw.is_empty() {
            log::debug!(
                "incomplete transfer search: pickup={:?} car_type={:?}",
                params.pickup_location,
                params.car_type
            );
            return Ok(TransferSearchResponse {
                status: SearchStatus::Incomplete,
                direction,
                offers: Vec::new(),
                advisory: None,
            });
        }

        let pickup_id = Self::parse_location_id(pickup_raw)?;
        let dropoff_id = match params.dropoff_location.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(Self::parse_location_id(raw)?),
            _ => None,
        };

        let (pickup, zone_id) = ZoneResolver::resolve(store, pickup_id, dropoff_id).await?;
        let Some(zone_id) = zone_id else {
            log::info!("transfer search for {:?}: no pricing zone", pickup.name);
            return Ok(TransferSearchResponse {
                status: SearchStatus::UnassignedZone,
                direction,
                offers: Vec::new(),
                advisory: Some(format!(
                    "No rates available for {}. This location is not currently assigned \
                     to a pricing zone. Please contact us for pricing information.",
                    pickup.name
                )),
            });
        };

        let records = RateQuery::fetch(store, Some(zone_id), category_raw, direction).await?;
        let offers = FleetAllocator::allocate(records, params.party_size());
        let options = OfferPresenter::present(offers, assets);

        log::info!(
            "transfer search priced: pickup={:?} zone={} direction={} offers={}",
            pickup.name,
            zone_id.to_hex(),
            direction.as_str(),
            options.len()
        );

        Ok(TransferSearchResponse {
            status: SearchStatus::Priced,
            direction,
            offers: options,
            advisory: None,
        })
    }

    fn parse_location_id(raw: &str) -> Result<ObjectId, SearchError> {
        ObjectId::parse_str(raw).map_err(|_| SearchError::LocationNotFound)
    }
}
