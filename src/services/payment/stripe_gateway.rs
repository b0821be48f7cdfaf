use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::order::{CheckoutOrder, OrderItem};
use crate::services::payment::interface::{
    CheckoutSession, PaymentError, PaymentGateway, RedirectUrls,
};

/// Hosted Stripe Checkout. One session per order, card payments only,
/// billing address collected by Stripe.
pub struct StripeGateway {
    client: stripe::Client,
    redirects: RedirectUrls,
    configured: bool,
}

impl StripeGateway {
    pub fn new(secret_key: &str, redirects: RedirectUrls) -> Self {
        Self {
            client: stripe::Client::new(secret_key.to_string()),
            redirects,
            configured: !secret_key.trim().is_empty(),
        }
    }

    pub fn from_env() -> Self {
        let secret_key = std::env::var("STRIPE_SECRET_KEY").unwrap_or_default();
        Self::new(&secret_key, RedirectUrls::from_env())
    }

    fn amount_in_cents(amount: Decimal) -> Result<i64, PaymentError> {
        (amount * Decimal::from(100))
            .round()
            .to_i64()
            .ok_or_else(|| {
                PaymentError::InvalidAmount(format!("{} is not a chargeable amount", amount))
            })
    }

    fn price_line(
        name: &str,
        description: String,
        amount: Decimal,
    ) -> Result<stripe::CreateCheckoutSessionLineItems, PaymentError> {
        Ok(stripe::CreateCheckoutSessionLineItems {
            price_data: Some(stripe::CreateCheckoutSessionLineItemsPriceData {
                currency: stripe::Currency::USD,
                unit_amount: Some(Self::amount_in_cents(amount)?),
                product_data: Some(
                    stripe::CreateCheckoutSessionLineItemsPriceDataProductData {
                        name: name.to_string(),
                        description: Some(description),
                        ..Default::default()
                    },
                ),
                ..Default::default()
            }),
            quantity: Some(1),
            ..Default::default()
        })
    }

    fn line_item(item: &OrderItem) -> Result<stripe::CreateCheckoutSessionLineItems, PaymentError> {
        let description = format!("{} {}", item.date, item.time).trim().to_string();
        let description = if description.is_empty() {
            item.name.clone()
        } else {
            description
        };
        Self::price_line(&item.name, description, item.unit_amount)
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout(
        &self,
        order: &CheckoutOrder,
    ) -> Result<CheckoutSession, PaymentError> {
        if !self.configured {
            return Err(PaymentError::NotConfigured(
                "STRIPE_SECRET_KEY is not set".to_string(),
            ));
        }

        let mut line_items = Vec::with_capacity(order.items.len().max(1));
        for item in &order.items {
            line_items.push(Self::line_item(item)?);
        }
        if line_items.is_empty() {
            // order without itemized lines: charge the total as one line
            line_items.push(Self::price_line(
                "Transfer",
                order.description(),
                order.total,
            )?);
        }

        let success_url = format!(
            "{}?session_id={{CHECKOUT_SESSION_ID}}",
            self.redirects.success_url
        );
        let mut params = stripe::CreateCheckoutSession::new();
        params.success_url = Some(success_url.as_str());
        params.cancel_url = Some(self.redirects.cancel_url.as_str());
        params.mode = Some(stripe::CheckoutSessionMode::Payment);
        params.payment_method_types =
            Some(vec![stripe::CreateCheckoutSessionPaymentMethodTypes::Card]);
        params.billing_address_collection =
            Some(stripe::CheckoutSessionBillingAddressCollection::Required);
        params.line_items = Some(line_items);
        let email = order.customer.email.trim();
        if !email.is_empty() {
            params.customer_email = Some(email);
        }

        let session = stripe::CheckoutSession::create(&self.client, params)
            .await
            .map_err(|err| PaymentError::Provider(err.to_string()))?;
        let checkout_url = session
            .url
            .ok_or_else(|| PaymentError::Provider("session carries no redirect url".to_string()))?;

        log::info!("stripe checkout session created: {}", session.id);
        Ok(CheckoutSession {
            session_id: session.id.to_string(),
            checkout_url,
        })
    }
}
