use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::models::order::CheckoutOrder;
use crate::services::payment::interface::{CheckoutSession, PaymentError, PaymentGateway};

/// Local stand-in for the hosted gateway. Issues fake sessions pointing
/// at the bundled mock checkout page, so the full booking flow can run
/// without a Stripe account.
pub struct SandboxGateway {
    base_url: String,
}

impl SandboxGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        Self::new(&base)
    }
}

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn create_checkout(
        &self,
        order: &CheckoutOrder,
    ) -> Result<CheckoutSession, PaymentError> {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();
        let session_id = format!("cs_test_{}", suffix);
        let checkout_url = format!("{}/mock-checkout?session_id={}", self.base_url, session_id);

        log::info!(
            "sandbox checkout session {}: {} {}",
            session_id,
            order.total,
            order.currency
        );
        Ok(CheckoutSession {
            session_id,
            checkout_url,
        })
    }
}
