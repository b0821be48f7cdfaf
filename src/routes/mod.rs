use actix_web::web;

pub mod bookings;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod payments;
pub mod reports;
pub mod search;

/// Everything under /api. The health probe stays at the root and is
/// registered by the binary.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/catalog")
                    .route("/zones", web::get().to(catalog::get_zones))
                    .route("/locations", web::get().to(catalog::get_locations))
                    .route(
                        "/vehicle-categories",
                        web::get().to(catalog::get_vehicle_categories),
                    ),
            )
            .service(
                web::scope("/transfers")
                    .route("/search", web::get().to(search::search_transfers)),
            )
            .service(
                web::scope("/payments")
                    .route("/checkout", web::post().to(payments::create_checkout))
                    .route("/confirm", web::post().to(payments::confirm_payment)),
            )
            .route("/bookings", web::post().to(bookings::create_booking))
            .service(
                web::scope("/reports")
                    .route("/sold-orders", web::get().to(reports::sold_orders))
                    .route("/sales-history", web::get().to(reports::sales_history)),
            )
            .route("/contact", web::post().to(contact::submit_contact)),
    );
}
