use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;

use crate::db::catalog::CatalogStore;
use crate::models::rate::{RateRecord, TripDirection};
use crate::services::search_service::SearchError;

/// Fetches candidate rates for a zone and joins each one to its vehicle
/// unit and category.
pub struct RateQuery;

impl RateQuery {
    /// Returns every rate in the zone for the requested direction whose
    /// vehicle unit belongs to the requested category. Category codes are
    /// normalized on both sides before comparing, and the match is exact
    /// after normalization so "VAN" never picks up "MINIVAN" rows.
    ///
    /// A `None` zone short-circuits to an empty result without touching
    /// the store. An unknown category code is also just an empty result.
    pub async fn fetch(
        store: &dyn CatalogStore,
        zone_id: Option<ObjectId>,
        category_code: &str,
        direction: TripDirection,
    ) -> Result<Vec<RateRecord>, SearchError> {
        let Some(zone_id) = zone_id else {
            return Ok(Vec::new());
        };

        let Some(category) = store.category_by_code(category_code).await? else {
            log::debug!("no vehicle category matches {:?}", category_code);
            return Ok(Vec::new());
        };

        let rates = store.rates_in_zone(zone_id, direction).await?;
        let unit_ids: Vec<ObjectId> = rates.iter().map(|rate| rate.vehicle_unit_id).collect();
        let units: HashMap<ObjectId, _> = store
            .vehicle_units_by_ids(&unit_ids)
            .await?
            .into_iter()
            .filter_map(|unit| unit.id.map(|id| (id, unit)))
            .collect();

        let mut records = Vec::new();
        for rate in rates {
            let Some(unit) = units.get(&rate.vehicle_unit_id) else {
                log::warn!(
                    "rate {:?} references missing vehicle unit {}",
                    rate.id,
                    rate.vehicle_unit_id
                );
                continue;
            };
            if category.id != Some(unit.category_id) {
                continue;
            }
            records.push(RateRecord {
                rate,
                unit: unit.clone(),
                category: category.clone(),
            });
        }
        Ok(records)
    }
}
