use async_trait::async_trait;
use thiserror::Error;

use crate::models::booking::Booking;
use crate::models::contact::ContactSubmission;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// What an outbound booking confirmation carries, regardless of channel.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub reference: String,
    pub client_id: String,
    pub customer_name: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub total_amount: String,
    pub currency: String,
}

impl BookingConfirmation {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            reference: booking.reference.to_string(),
            client_id: booking.customer.client_id.clone(),
            customer_name: booking.customer.name.clone(),
            pickup_location: booking.trip.pickup_location_name.clone(),
            dropoff_location: booking.trip.dropoff_location_name.clone(),
            total_amount: booking.total_amount.to_string(),
            currency: booking.currency.clone(),
        }
    }
}

/// Outbound customer messaging. Failures here must never fail the booking
/// that triggered them; callers log and move on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn booking_confirmed(&self, confirmation: &BookingConfirmation)
        -> Result<(), NotifyError>;
    async fn contact_received(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}

/// Default channel: the application log. Stands in until a real mail or
/// messaging provider is wired up.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn booking_confirmed(
        &self,
        confirmation: &BookingConfirmation,
    ) -> Result<(), NotifyError> {
        log::info!(
            "booking confirmed: reference={} client={} {} -> {} total={} {}",
            confirmation.reference,
            confirmation.client_id,
            confirmation.pickup_location,
            confirmation.dropoff_location,
            confirmation.total_amount,
            confirmation.currency
        );
        Ok(())
    }

    async fn contact_received(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        log::info!(
            "contact request received: name={:?} email={:?} method={:?}",
            submission.name,
            submission.email,
            submission.preferred_contact_method
        );
        Ok(())
    }
}
