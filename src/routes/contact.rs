use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

use crate::db::sales::SalesStore;
use crate::models::contact::{ContactRequest, ContactSubmission};
use crate::services::notifier::Notifier;

/* /api/contact */
pub async fn submit_contact(
    sales: web::Data<Arc<dyn SalesStore>>,
    notifier: web::Data<Arc<dyn Notifier>>,
    request: web::Json<ContactRequest>,
) -> impl Responder {
    let submission = ContactSubmission::from_request(request.into_inner());

    let id = match sales.get_ref().insert_contact(&submission).await {
        Ok(id) => id,
        Err(err) => {
            log::error!("contact request not stored: {}", err);
            return HttpResponse::ServiceUnavailable()
                .json(json!({"error": "contact unavailable"}));
        }
    };

    if let Err(err) = notifier.get_ref().contact_received(&submission).await {
        log::error!("contact notification not sent: {}", err);
    }

    HttpResponse::Ok().json(json!({"status": "submitted", "id": id.to_hex()}))
}
