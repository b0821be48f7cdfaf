pub mod asset_resolver;
pub mod booking_service;
pub mod fleet_allocator;
pub mod notifier;
pub mod offer_presenter;
pub mod payment;
pub mod rate_query;
pub mod report_service;
pub mod search_service;
pub mod zone_resolver;
