use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use speedy_transfers_api::db::catalog::{CatalogError, CatalogStore};
use speedy_transfers_api::db::sales::{SalesError, SalesStore};
use speedy_transfers_api::models::booking::Booking;
use speedy_transfers_api::models::contact::ContactSubmission;
use speedy_transfers_api::models::location::Location;
use speedy_transfers_api::models::rate::{Rate, TripDirection};
use speedy_transfers_api::models::vehicle::{normalize_code, VehicleCategory, VehicleUnit};
use speedy_transfers_api::models::zone::Zone;
use speedy_transfers_api::routes;
use speedy_transfers_api::services::asset_resolver::AssetResolver;
use speedy_transfers_api::services::notifier::{BookingConfirmation, Notifier, NotifyError};
use speedy_transfers_api::services::payment::interface::PaymentGateway;
use speedy_transfers_api::services::payment::sandbox::SandboxGateway;

/// In-memory CatalogStore. Mirrors the sort orders and filter semantics of
/// the Mongo-backed store so route tests exercise the same contracts.
#[derive(Default)]
pub struct MemoryCatalog {
    pub zones: Vec<Zone>,
    pub locations: Vec<Location>,
    pub categories: Vec<VehicleCategory>,
    pub units: Vec<VehicleUnit>,
    pub rates: Vec<Rate>,
    pub fail: bool,
}

impl MemoryCatalog {
    pub fn add_zone(&mut self, name: &str) -> ObjectId {
        let id = ObjectId::new();
        self.zones.push(Zone {
            id: Some(id),
            name: name.to_string(),
            description: None,
        });
        id
    }

    pub fn add_location(&mut self, name: &str, zone_id: Option<ObjectId>) -> ObjectId {
        let id = ObjectId::new();
        let mut location = Location::new(name, zone_id);
        location.id = Some(id);
        self.locations.push(location);
        id
    }

    pub fn add_airport(&mut self, name: &str) -> ObjectId {
        let id = ObjectId::new();
        let mut location = Location::airport(name);
        location.id = Some(id);
        self.locations.push(location);
        id
    }

    /// Stores the code verbatim, the way legacy rows sit in the collection.
    pub fn add_category_raw(&mut self, code: &str, name: &str, max_capacity: u32) -> ObjectId {
        let id = ObjectId::new();
        self.categories.push(VehicleCategory {
            id: Some(id),
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            max_capacity,
        });
        id
    }

    pub fn add_unit(
        &mut self,
        name: &str,
        category_id: ObjectId,
        max_capacity: Option<u32>,
    ) -> ObjectId {
        let id = ObjectId::new();
        let mut unit = VehicleUnit::new(name, category_id);
        unit.id = Some(id);
        unit.max_capacity = max_capacity;
        self.units.push(unit);
        id
    }

    pub fn add_rate(
        &mut self,
        zone_id: ObjectId,
        vehicle_unit_id: ObjectId,
        direction: TripDirection,
        price: Decimal,
    ) -> ObjectId {
        let id = ObjectId::new();
        self.rates.push(Rate {
            id: Some(id),
            zone_id,
            vehicle_unit_id,
            direction,
            price,
        });
        id
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.fail {
            Err(CatalogError::Unavailable("injected failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn zones(&self) -> Result<Vec<Zone>, CatalogError> {
        self.check()?;
        let mut zones = self.zones.clone();
        zones.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(zones)
    }

    async fn locations(&self) -> Result<Vec<Location>, CatalogError> {
        self.check()?;
        let mut locations = self.locations.clone();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }

    async fn locations_in_zone(&self, zone_id: ObjectId) -> Result<Vec<Location>, CatalogError> {
        self.check()?;
        let mut locations: Vec<Location> = self
            .locations
            .iter()
            .filter(|l| l.zone_id == Some(zone_id))
            .cloned()
            .collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }

    async fn unzoned_locations(&self) -> Result<Vec<Location>, CatalogError> {
        self.check()?;
        let mut locations: Vec<Location> = self
            .locations
            .iter()
            .filter(|l| l.zone_id.is_none())
            .cloned()
            .collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }

    async fn location_by_id(&self, id: ObjectId) -> Result<Option<Location>, CatalogError> {
        self.check()?;
        Ok(self.locations.iter().find(|l| l.id == Some(id)).cloned())
    }

    async fn vehicle_categories(&self) -> Result<Vec<VehicleCategory>, CatalogError> {
        self.check()?;
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(categories)
    }

    async fn category_by_code(&self, code: &str) -> Result<Option<VehicleCategory>, CatalogError> {
        self.check()?;
        let wanted = normalize_code(code);
        Ok(self
            .categories
            .iter()
            .find(|c| normalize_code(&c.code) == wanted)
            .cloned())
    }

    async fn vehicle_units_by_ids(
        &self,
        ids: &[ObjectId],
    ) -> Result<Vec<VehicleUnit>, CatalogError> {
        self.check()?;
        Ok(self
            .units
            .iter()
            .filter(|u| u.id.map_or(false, |id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn rates_in_zone(
        &self,
        zone_id: ObjectId,
        direction: TripDirection,
    ) -> Result<Vec<Rate>, CatalogError> {
        self.check()?;
        let mut rates: Vec<Rate> = self
            .rates
            .iter()
            .filter(|r| r.zone_id == zone_id && r.direction == direction)
            .cloned()
            .collect();
        rates.sort_by_key(|r| r.id);
        Ok(rates)
    }
}

/// In-memory SalesStore. Stored bookings stay inspectable through the
/// `bookings` mutex so tests can assert on what was persisted.
#[derive(Default)]
pub struct MemorySales {
    pub bookings: Mutex<Vec<Booking>>,
    pub contacts: Mutex<Vec<ContactSubmission>>,
    pub fail: bool,
}

#[async_trait]
impl SalesStore for MemorySales {
    async fn insert_booking(&self, booking: &Booking) -> Result<ObjectId, SalesError> {
        if self.fail {
            return Err(SalesError::Unavailable("injected failure".to_string()));
        }
        let id = ObjectId::new();
        let mut stored = booking.clone();
        stored.id = Some(id);
        self.bookings.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn bookings_between(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Booking>, SalesError> {
        if self.fail {
            return Err(SalesError::Unavailable("injected failure".to_string()));
        }
        let mut bookings: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| {
                start.map_or(true, |s| b.created_at >= s) && end.map_or(true, |e| b.created_at <= e)
            })
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<ObjectId, SalesError> {
        if self.fail {
            return Err(SalesError::Unavailable("injected failure".to_string()));
        }
        let id = ObjectId::new();
        let mut stored = submission.clone();
        stored.id = Some(id);
        self.contacts.lock().unwrap().push(stored);
        Ok(id)
    }
}

/// Notifier that records every delivery instead of sending anything.
#[derive(Default)]
pub struct RecordingNotifier {
    pub confirmations: Mutex<Vec<BookingConfirmation>>,
    pub contact_emails: Mutex<Vec<String>>,
    pub fail: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn booking_confirmed(&self, confirmation: &BookingConfirmation) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::ChannelUnavailable("injected failure".to_string()));
        }
        self.confirmations.lock().unwrap().push(confirmation.clone());
        Ok(())
    }

    async fn contact_received(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::ChannelUnavailable("injected failure".to_string()));
        }
        self.contact_emails
            .lock()
            .unwrap()
            .push(submission.email.clone());
        Ok(())
    }
}

pub struct CatalogFixture {
    pub zone_id: ObjectId,
    pub airport_id: ObjectId,
    pub hotel_id: ObjectId,
    pub unzoned_hotel_id: ObjectId,
    pub category_id: ObjectId,
    pub unit_id: ObjectId,
    pub one_way_rate_id: ObjectId,
    pub round_trip_rate_id: ObjectId,
}

/// One zone, one airport, one zoned hotel, one unassigned hotel, and a VAN
/// priced both ways. The category code carries a trailing space the way
/// hand-entered rows did.
pub fn bucerias_fixture(catalog: &mut MemoryCatalog) -> CatalogFixture {
    let zone_id = catalog.add_zone("BUCERIAS");
    let airport_id = catalog.add_airport("AEROPUERTO PVR");
    let hotel_id = catalog.add_location("HOTEL DECAMERON", Some(zone_id));
    let unzoned_hotel_id = catalog.add_location("HOTEL SIN ZONA", None);
    let category_id = catalog.add_category_raw("VAN ", "Van", 8);
    let unit_id = catalog.add_unit("VAN 001", category_id, Some(8));
    let one_way_rate_id = catalog.add_rate(zone_id, unit_id, TripDirection::OneWay, dec!(65.00));
    let round_trip_rate_id =
        catalog.add_rate(zone_id, unit_id, TripDirection::RoundTrip, dec!(110.00));
    CatalogFixture {
        zone_id,
        airport_id,
        hotel_id,
        unzoned_hotel_id,
        category_id,
        unit_id,
        one_way_rate_id,
        round_trip_rate_id,
    }
}

pub struct TestApp {
    pub catalog: Arc<dyn CatalogStore>,
    pub sales: Arc<MemorySales>,
    pub notifier: Arc<RecordingNotifier>,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl TestApp {
    pub fn new(catalog: MemoryCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sales: Arc::new(MemorySales::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            gateway: Arc::new(SandboxGateway::new("http://localhost:8080")),
        }
    }

    pub fn with_fixture() -> (Self, CatalogFixture) {
        let mut catalog = MemoryCatalog::default();
        let fixture = bucerias_fixture(&mut catalog);
        (Self::new(catalog), fixture)
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let sales: Arc<dyn SalesStore> = self.sales.clone();
        let notifier: Arc<dyn Notifier> = self.notifier.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(sales))
            .app_data(web::Data::new(notifier))
            .app_data(web::Data::new(self.gateway.clone()))
            .app_data(web::Data::new(AssetResolver::new("/static/images/cars")))
            .configure(routes::configure_api)
    }
}
