use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use mongodb::bson::oid::ObjectId;
use thiserror::Error;
use uuid::Uuid;

use crate::db::catalog::CatalogStore;
use crate::db::sales::{SalesError, SalesStore};
use crate::models::booking::{Booking, CustomerDetails, TripDetails};
use crate::models::order::CheckoutOrder;
use crate::models::ModelError;
use crate::services::notifier::{BookingConfirmation, Notifier};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("invalid order: {0}")]
    InvalidOrder(#[from] ModelError),
    #[error("sales store unavailable: {0}")]
    StoreUnavailable(#[from] SalesError),
}

/// Persists checkout orders as bookings.
pub struct BookingService;

impl BookingService {
    /// Builds a booking from an order, stores it, and sends a
    /// confirmation. A failed confirmation is logged but never fails the
    /// booking itself; the record already exists at that point.
    pub async fn create_from_order(
        catalog: &dyn CatalogStore,
        sales: &dyn SalesStore,
        notifier: &dyn Notifier,
        order: &CheckoutOrder,
        payment_method: &str,
    ) -> Result<Booking, BookingError> {
        order.validate()?;

        let now = Utc::now();
        let pickup_at = order
            .pickup
            .datetime
            .as_deref()
            .and_then(Self::parse_order_datetime)
            .unwrap_or(now);
        let return_at = order
            .return_trip
            .as_ref()
            .and_then(|return_trip| return_trip.datetime.as_deref())
            .and_then(Self::parse_order_datetime)
            // one-way trips block the vehicle for two hours
            .unwrap_or(pickup_at + Duration::hours(2));

        let email = order.customer.email.trim();
        let client_id = if email.is_empty() {
            format!("guest_{}", now.format("%Y%m%d_%H%M%S"))
        } else {
            email.to_string()
        };

        let (pickup_location_id, pickup_location_name) = Self::resolve_stop(
            catalog,
            order.pickup.location_id.as_deref(),
            order.pickup.location_name.as_deref(),
        )
        .await;
        let (dropoff_location_id, dropoff_location_name) = Self::resolve_stop(
            catalog,
            order.dropoff.location_id.as_deref(),
            order.dropoff.location_name.as_deref(),
        )
        .await;

        let (return_pickup_location_id, return_pickup_location_name) =
            match order.return_trip.as_ref() {
                Some(return_trip) => {
                    Self::resolve_stop(
                        catalog,
                        return_trip.pickup_location_id.as_deref(),
                        return_trip.pickup_location_name.as_deref(),
                    )
                    .await
                }
                None => (None, String::new()),
            };
        let (return_dropoff_location_id, return_dropoff_location_name) =
            match order.return_trip.as_ref() {
                Some(return_trip) => {
                    Self::resolve_stop(
                        catalog,
                        return_trip.dropoff_location_id.as_deref(),
                        return_trip.dropoff_location_name.as_deref(),
                    )
                    .await
                }
                None => (None, String::new()),
            };

        let vehicle_unit_id = order
            .items
            .first()
            .and_then(|item| item.vehicle_unit_id.as_deref())
            .and_then(|raw| ObjectId::parse_str(raw.trim()).ok());

        let booking = Booking {
            id: None,
            reference: Uuid::new_v4(),
            customer: CustomerDetails {
                client_id,
                name: order.customer.name.clone(),
                phone: order.customer.phone.clone(),
                address: order.customer.address.clone(),
                city: order.customer.city.clone(),
                zip: order.customer.zip.clone(),
                country: order.customer.country.clone(),
                company: order.customer.company.clone(),
            },
            trip: TripDetails {
                pickup_location_id,
                pickup_location_name,
                dropoff_location_id,
                dropoff_location_name,
                return_pickup_location_id,
                return_pickup_location_name,
                return_dropoff_location_id,
                return_dropoff_location_name,
                pickup_at,
                return_at,
                vehicle_unit_id,
                passenger_count: order.people.max(1),
                one_way: !order.is_round_trip(),
            },
            total_amount: order.total,
            currency: order.currency.clone(),
            payment_method: payment_method.to_string(),
            trip_type: order.trip_type.clone(),
            created_at: now,
        };

        let id = sales.insert_booking(&booking).await?;
        let booking = Booking {
            id: Some(id),
            ..booking
        };
        log::info!(
            "booking stored: id={} reference={} client={}",
            id.to_hex(),
            booking.reference,
            booking.customer.client_id
        );

        let confirmation = BookingConfirmation::from_booking(&booking);
        if let Err(err) = notifier.booking_confirmed(&confirmation).await {
            log::error!(
                "confirmation for booking {} not sent: {}",
                booking.reference,
                err
            );
        }

        Ok(booking)
    }

    /// Tries the id first and takes the catalog's name for the stop when
    /// it resolves. A malformed id, a missing row, or a store hiccup all
    /// degrade to the name the customer submitted.
    async fn resolve_stop(
        catalog: &dyn CatalogStore,
        location_id: Option<&str>,
        location_name: Option<&str>,
    ) -> (Option<ObjectId>, String) {
        let fallback = location_name.unwrap_or("").trim().to_string();
        let Some(id) = location_id.and_then(|raw| ObjectId::parse_str(raw.trim()).ok()) else {
            return (None, fallback);
        };
        match catalog.location_by_id(id).await {
            Ok(Some(location)) => (Some(id), location.name),
            Ok(None) => (None, fallback),
            Err(err) => {
                log::warn!("location {} not resolved for booking: {}", id.to_hex(), err);
                (None, fallback)
            }
        }
    }

    /// Accepts RFC 3339 as well as the bare `date-T-time` shapes the
    /// checkout form produces. Naive values are taken as UTC.
    fn parse_order_datetime(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }
        None
    }
}
