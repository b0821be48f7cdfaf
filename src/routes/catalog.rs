use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::db::catalog::CatalogStore;
use crate::models::location::Location;
use crate::models::zone::Zone;

#[derive(Serialize)]
struct ZoneWithLocations {
    #[serde(flatten)]
    zone: Zone,
    locations: Vec<Location>,
}

/* /api/catalog/zones */
pub async fn get_zones(store: web::Data<Arc<dyn CatalogStore>>) -> impl Responder {
    let store = store.get_ref().as_ref();
    let zones = match store.zones().await {
        Ok(zones) => zones,
        Err(err) => {
            log::error!("zones not loaded: {}", err);
            return HttpResponse::ServiceUnavailable().json(json!({"error": "catalog unavailable"}));
        }
    };

    let mut payload = Vec::with_capacity(zones.len());
    for zone in zones {
        let locations = match zone.id {
            Some(id) => match store.locations_in_zone(id).await {
                Ok(locations) => locations,
                Err(err) => {
                    log::error!("locations for zone {:?} not loaded: {}", zone.name, err);
                    return HttpResponse::ServiceUnavailable()
                        .json(json!({"error": "catalog unavailable"}));
                }
            },
            None => Vec::new(),
        };
        payload.push(ZoneWithLocations { zone, locations });
    }

    HttpResponse::Ok().json(payload)
}

#[derive(Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    unzoned: Option<String>,
}

/* /api/catalog/locations */
pub async fn get_locations(
    store: web::Data<Arc<dyn CatalogStore>>,
    params: web::Query<LocationQuery>,
) -> impl Responder {
    let store = store.get_ref().as_ref();
    let unzoned_only = params
        .unzoned
        .as_deref()
        .is_some_and(|value| value.eq_ignore_ascii_case("true"));

    let result = if unzoned_only {
        store.unzoned_locations().await
    } else {
        store.locations().await
    };

    match result {
        Ok(locations) => HttpResponse::Ok().json(locations),
        Err(err) => {
            log::error!("locations not loaded: {}", err);
            HttpResponse::ServiceUnavailable().json(json!({"error": "catalog unavailable"}))
        }
    }
}

/* /api/catalog/vehicle-categories */
pub async fn get_vehicle_categories(store: web::Data<Arc<dyn CatalogStore>>) -> impl Responder {
    match store.get_ref().vehicle_categories().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => {
            log::error!("vehicle categories not loaded: {}", err);
            HttpResponse::ServiceUnavailable().json(json!({"error": "catalog unavailable"}))
        }
    }
}
