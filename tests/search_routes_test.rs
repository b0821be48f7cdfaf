mod common;

use actix_web::test;
use common::{MemoryCatalog, TestApp};
use mongodb::bson::oid::ObjectId;

#[actix_web::test]
async fn test_search_returns_priced_offers() {
    let (test_app, fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let uri = format!(
        "/api/transfers/search?pickup_location={}&car_type=van&people=10",
        fixture.hotel_id.to_hex()
    );
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "priced");
    assert_eq!(body["direction"], "ONE_WAY");

    let offers = body["offers"].as_array().unwrap();
    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0]["id"], format!("{}-1", fixture.unit_id.to_hex()));
    assert_eq!(offers[0]["price"], "65.00");
    assert_eq!(offers[0]["capacity"], 8);
    assert_eq!(offers[0]["vehicle_name"], "VAN 001");
    assert_eq!(offers[0]["is_fleet_split"], true);
    assert_eq!(offers[0]["total_units_in_group"], 2);
    assert_eq!(offers[0]["image_url"], "/static/images/cars/Van_Dark.jpg");
    assert_eq!(offers[1]["unit_number"], 2);
}

#[actix_web::test]
async fn test_search_round_trip_uses_round_trip_rates() {
    let (test_app, fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let uri = format!(
        "/api/transfers/search?pickup_location={}&car_type=VAN&people=4&trip_type=roundtrip",
        fixture.hotel_id.to_hex()
    );
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["direction"], "ROUND_TRIP");
    let offers = body["offers"].as_array().unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["price"], "110.00");
}

#[actix_web::test]
async fn test_search_without_inputs_is_incomplete() {
    let (test_app, _fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/transfers/search")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "incomplete");
    assert!(body["offers"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_search_unassigned_zone_carries_advisory() {
    let (test_app, fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let uri = format!(
        "/api/transfers/search?pickup_location={}&car_type=VAN&people=2",
        fixture.unzoned_hotel_id.to_hex()
    );
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "unassigned_zone");
    assert!(body["advisory"]
        .as_str()
        .unwrap()
        .contains("HOTEL SIN ZONA"));
}

#[actix_web::test]
async fn test_search_malformed_pickup_is_not_found() {
    let (test_app, _fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/transfers/search?pickup_location=xyz&car_type=VAN")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "location not found");
}

#[actix_web::test]
async fn test_search_store_failure_is_service_unavailable() {
    let test_app = TestApp::new(MemoryCatalog {
        fail: true,
        ..Default::default()
    });
    let app = test::init_service(test_app.create_app()).await;

    let uri = format!(
        "/api/transfers/search?pickup_location={}&car_type=VAN",
        ObjectId::new().to_hex()
    );
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "catalog unavailable");
}

#[actix_web::test]
async fn test_zones_endpoint_embeds_member_locations() {
    let (test_app, _fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/zones")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let zones = body.as_array().unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0]["name"], "BUCERIAS");

    let locations = zones[0]["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0]["name"], "HOTEL DECAMERON");
}

#[actix_web::test]
async fn test_locations_endpoint_sorts_by_name() {
    let (test_app, _fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/locations")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["AEROPUERTO PVR", "HOTEL DECAMERON", "HOTEL SIN ZONA"]
    );
}

#[actix_web::test]
async fn test_locations_endpoint_filters_unzoned() {
    let (test_app, _fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/locations?unzoned=true")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let locations = body.as_array().unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0]["name"], "HOTEL SIN ZONA");
}

#[actix_web::test]
async fn test_vehicle_categories_endpoint() {
    let (test_app, _fixture) = TestApp::with_fixture();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/vehicle-categories")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 1);
    // Codes come back exactly as stored, dirty whitespace included.
    assert_eq!(categories[0]["code"], "VAN ");
    assert_eq!(categories[0]["name"], "Van");
    assert_eq!(categories[0]["max_capacity"], 8);
}

#[actix_web::test]
async fn test_catalog_failure_is_service_unavailable() {
    let test_app = TestApp::new(MemoryCatalog {
        fail: true,
        ..Default::default()
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/catalog/zones")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);
}
