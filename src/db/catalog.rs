use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client, Collection,
};
use std::sync::Arc;
use thiserror::Error;

use crate::models::location::Location;
use crate::models::rate::{Rate, TripDirection};
use crate::models::vehicle::{normalize_code, VehicleCategory, VehicleUnit};
use crate::models::zone::Zone;

pub const CATALOG_DB: &str = "Catalog";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog query failed: {0}")]
    Query(#[from] mongodb::error::Error),
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the pricing catalog. The search pipeline only talks to
/// this trait, never to the database directly.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn zones(&self) -> Result<Vec<Zone>, CatalogError>;
    async fn locations(&self) -> Result<Vec<Location>, CatalogError>;
    async fn locations_in_zone(&self, zone_id: ObjectId) -> Result<Vec<Location>, CatalogError>;
    async fn unzoned_locations(&self) -> Result<Vec<Location>, CatalogError>;
    async fn location_by_id(&self, id: ObjectId) -> Result<Option<Location>, CatalogError>;
    async fn vehicle_categories(&self) -> Result<Vec<VehicleCategory>, CatalogError>;
    async fn category_by_code(&self, code: &str)
        -> Result<Option<VehicleCategory>, CatalogError>;
    async fn vehicle_units_by_ids(
        &self,
        ids: &[ObjectId],
    ) -> Result<Vec<VehicleUnit>, CatalogError>;
    async fn rates_in_zone(
        &self,
        zone_id: ObjectId,
        direction: TripDirection,
    ) -> Result<Vec<Rate>, CatalogError>;
}

pub struct MongoCatalog {
    client: Arc<Client>,
}

impl MongoCatalog {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn zones_col(&self) -> Collection<Zone> {
        self.client.database(CATALOG_DB).collection("Zones")
    }

    fn locations_col(&self) -> Collection<Location> {
        self.client.database(CATALOG_DB).collection("Locations")
    }

    fn categories_col(&self) -> Collection<VehicleCategory> {
        self.client
            .database(CATALOG_DB)
            .collection("VehicleCategories")
    }

    fn units_col(&self) -> Collection<VehicleUnit> {
        self.client.database(CATALOG_DB).collection("VehicleUnits")
    }

    fn rates_col(&self) -> Collection<Rate> {
        self.client.database(CATALOG_DB).collection("Rates")
    }
}

#[async_trait]
impl CatalogStore for MongoCatalog {
    async fn zones(&self) -> Result<Vec<Zone>, CatalogError> {
        let cursor = self.zones_col().find(doc! {}).sort(doc! { "name": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn locations(&self) -> Result<Vec<Location>, CatalogError> {
        let cursor = self
            .locations_col()
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn locations_in_zone(&self, zone_id: ObjectId) -> Result<Vec<Location>, CatalogError> {
        let cursor = self
            .locations_col()
            .find(doc! { "zone_id": zone_id })
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn unzoned_locations(&self) -> Result<Vec<Location>, CatalogError> {
        // null matches both an explicit null and a missing field
        let cursor = self
            .locations_col()
            .find(doc! { "zone_id": null })
            .sort(doc! { "name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn location_by_id(&self, id: ObjectId) -> Result<Option<Location>, CatalogError> {
        Ok(self.locations_col().find_one(doc! { "_id": id }).await?)
    }

    async fn vehicle_categories(&self) -> Result<Vec<VehicleCategory>, CatalogError> {
        let cursor = self
            .categories_col()
            .find(doc! {})
            .sort(doc! { "code": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn category_by_code(
        &self,
        code: &str,
    ) -> Result<Option<VehicleCategory>, CatalogError> {
        // Compared in memory so rows written before code cleanup still match.
        let wanted = normalize_code(code);
        let categories = self.vehicle_categories().await?;
        Ok(categories
            .into_iter()
            .find(|category| normalize_code(&category.code) == wanted))
    }

    async fn vehicle_units_by_ids(
        &self,
        ids: &[ObjectId],
    ) -> Result<Vec<VehicleUnit>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let cursor = self
            .units_col()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn rates_in_zone(
        &self,
        zone_id: ObjectId,
        direction: TripDirection,
    ) -> Result<Vec<Rate>, CatalogError> {
        let cursor = self
            .rates_col()
            .find(doc! { "zone_id": zone_id, "direction": direction.as_str() })
            .sort(doc! { "_id": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
