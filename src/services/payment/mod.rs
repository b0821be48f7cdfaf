pub mod interface;
pub mod sandbox;
pub mod stripe_gateway;

use std::sync::Arc;

use crate::services::payment::interface::PaymentGateway;
use crate::services::payment::sandbox::SandboxGateway;
use crate::services::payment::stripe_gateway::StripeGateway;

/// Which gateway implementation the process runs. Chosen by explicit
/// configuration, never by inspecting key formats at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    Live,
    Sandbox,
}

impl PaymentMode {
    /// `PAYMENT_MODE=live` selects Stripe; anything else, including an
    /// unset variable, selects the sandbox.
    pub fn from_env() -> Self {
        match std::env::var("PAYMENT_MODE") {
            Ok(value) if value.trim().eq_ignore_ascii_case("live") => PaymentMode::Live,
            _ => PaymentMode::Sandbox,
        }
    }
}

pub fn gateway_from_env() -> Arc<dyn PaymentGateway> {
    match PaymentMode::from_env() {
        PaymentMode::Live => {
            log::info!("payment gateway: stripe (live)");
            Arc::new(StripeGateway::from_env())
        }
        PaymentMode::Sandbox => {
            log::info!("payment gateway: sandbox");
            Arc::new(SandboxGateway::from_env())
        }
    }
}
