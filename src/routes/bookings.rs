use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::db::catalog::CatalogStore;
use crate::db::sales::SalesStore;
use crate::models::order::CheckoutOrder;
use crate::services::booking_service::{BookingError, BookingService};
use crate::services::notifier::Notifier;

#[derive(Deserialize)]
pub struct CreateBookingInput {
    pub order: CheckoutOrder,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_payment_method() -> String {
    "Cash on Arrival".to_string()
}

/* /api/bookings */
pub async fn create_booking(
    catalog: web::Data<Arc<dyn CatalogStore>>,
    sales: web::Data<Arc<dyn SalesStore>>,
    notifier: web::Data<Arc<dyn Notifier>>,
    input: web::Json<CreateBookingInput>,
) -> impl Responder {
    let input = input.into_inner();
    match BookingService::create_from_order(
        catalog.get_ref().as_ref(),
        sales.get_ref().as_ref(),
        notifier.get_ref().as_ref(),
        &input.order,
        &input.payment_method,
    )
    .await
    {
        Ok(booking) => HttpResponse::Ok().json(booking),
        Err(BookingError::InvalidOrder(err)) => {
            HttpResponse::BadRequest().json(json!({"error": err.to_string()}))
        }
        Err(BookingError::StoreUnavailable(err)) => {
            log::error!("booking not stored: {}", err);
            HttpResponse::ServiceUnavailable().json(json!({"error": "bookings unavailable"}))
        }
    }
}
