use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

use crate::db::catalog::CatalogStore;
use crate::models::search::TransferSearchParams;
use crate::services::asset_resolver::AssetResolver;
use crate::services::search_service::{SearchError, SearchService};

/* /api/transfers/search */
pub async fn search_transfers(
    store: web::Data<Arc<dyn CatalogStore>>,
    assets: web::Data<AssetResolver>,
    params: web::Query<TransferSearchParams>,
) -> impl Responder {
    match SearchService::execute(store.get_ref().as_ref(), assets.get_ref(), &params).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(SearchError::LocationNotFound) => {
            HttpResponse::NotFound().json(json!({"error": "location not found"}))
        }
        Err(SearchError::DataStoreUnavailable(err)) => {
            log::error!("transfer search failed: {}", err);
            HttpResponse::ServiceUnavailable().json(json!({"error": "catalog unavailable"}))
        }
    }
}
