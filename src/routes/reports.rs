use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::db::sales::SalesStore;
use crate::services::report_service::ReportService;

#[derive(Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/* /api/reports/sold-orders */
pub async fn sold_orders(
    sales: web::Data<Arc<dyn SalesStore>>,
    params: web::Query<ReportQuery>,
) -> impl Responder {
    let (start, end) =
        ReportService::parse_report_range(params.start_date.as_deref(), params.end_date.as_deref());

    match sales.get_ref().bookings_between(start, end).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(err) => {
            log::error!("sold orders report failed: {}", err);
            HttpResponse::ServiceUnavailable().json(json!({"error": "reports unavailable"}))
        }
    }
}

/* /api/reports/sales-history */
pub async fn sales_history(
    sales: web::Data<Arc<dyn SalesStore>>,
    params: web::Query<ReportQuery>,
) -> impl Responder {
    let (start, end) =
        ReportService::parse_report_range(params.start_date.as_deref(), params.end_date.as_deref());

    match sales.get_ref().bookings_between(start, end).await {
        Ok(bookings) => {
            let history = ReportService::daily_sales_history(&bookings);
            let totals = ReportService::totals(&bookings);
            HttpResponse::Ok().json(json!({"history": history, "totals": totals}))
        }
        Err(err) => {
            log::error!("sales history report failed: {}", err);
            HttpResponse::ServiceUnavailable().json(json!({"error": "reports unavailable"}))
        }
    }
}
