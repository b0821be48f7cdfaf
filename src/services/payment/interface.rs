use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::order::CheckoutOrder;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment gateway not configured: {0}")]
    NotConfigured(String),
    #[error("payment provider error: {0}")]
    Provider(String),
    #[error("amount not chargeable: {0}")]
    InvalidAmount(String),
}

/// A hosted checkout session the customer gets redirected to.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub checkout_url: String,
}

/// Where the gateway sends the customer back after checkout.
#[derive(Debug, Clone)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl RedirectUrls {
    pub fn from_env() -> Self {
        let base = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let base = base.trim_end_matches('/');
        Self {
            success_url: format!("{}/payment-success", base),
            cancel_url: format!("{}/payment-failed", base),
        }
    }
}

/// Creates hosted checkout sessions for an order. Selected once at
/// startup by configuration; handlers never inspect which implementation
/// they hold.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_checkout(&self, order: &CheckoutOrder)
        -> Result<CheckoutSession, PaymentError>;
}
