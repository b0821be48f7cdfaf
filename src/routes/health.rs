use actix_web::{web, HttpResponse, Responder};
use mongodb::{bson::doc, Client};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::db::catalog::CATALOG_DB;
use crate::services::payment::PaymentMode;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(client: web::Data<Arc<Client>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Check MongoDB connection
    let mongo_result = check_mongodb(&client).await;
    health
        .services
        .insert("mongodb".to_string(), mongo_result.clone());

    // Check the payment gateway configuration
    let payment_result = check_payment_config();
    health
        .services
        .insert("payments".to_string(), payment_result.clone());

    // Overall status degrades when any service is not ok
    if mongo_result.status != "ok" || payment_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &web::Data<Arc<Client>>) -> ServiceStatus {
    match client
        .database(CATALOG_DB)
        .run_command(doc! {"ping": 1})
        .await
    {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to MongoDB".to_string()),
        },
        Err(e) => {
            log::error!("MongoDB health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to connect: {}", e)),
            }
        }
    }
}

fn check_payment_config() -> ServiceStatus {
    match PaymentMode::from_env() {
        PaymentMode::Sandbox => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Sandbox gateway active".to_string()),
        },
        PaymentMode::Live => match env::var("STRIPE_SECRET_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                let masked_key = if key.len() > 8 {
                    format!("{}***{}", &key[0..4], &key[key.len() - 4..])
                } else {
                    "***".to_string()
                };

                ServiceStatus {
                    status: "ok".to_string(),
                    details: Some(format!("Stripe API key configured ({})", masked_key)),
                }
            }
            _ => ServiceStatus {
                status: "error".to_string(),
                details: Some("Live mode without STRIPE_SECRET_KEY".to_string()),
            },
        },
    }
}
