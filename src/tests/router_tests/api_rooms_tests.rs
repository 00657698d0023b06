use crate::domain::{NewListing, PriceUnit, StayType};
use crate::router::{handle, serve};
use crate::store::{rooms, Store};
use crate::tests::utils::{body_json, get, init_test_store};

#[test]
fn list_rooms_returns_seeded_catalog_in_order() {
    let store = init_test_store();

    let resp = handle(get("/api/rooms"), &store).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json = body_json(resp);
    let rooms = json.as_array().unwrap();
    assert_eq!(rooms.len(), 7);
    assert_eq!(rooms[0]["id"], 1);
    assert_eq!(rooms[0]["name"], "Deluxe King Suite");
    assert_eq!(rooms[1]["price"], 350000);
    assert_eq!(rooms[1]["stayType"], "long");
    assert_eq!(rooms[1]["priceUnit"], "month");
    assert_eq!(rooms[6]["featured"], true);
    assert!(rooms[0]["amenities"].is_array());
}

#[test]
fn list_rooms_filters_by_stay_type() {
    let store = init_test_store();

    let json = body_json(handle(get("/api/rooms?stayType=long"), &store).unwrap());
    let rooms = json.as_array().unwrap();
    assert_eq!(rooms.len(), 3);
    assert!(rooms.iter().all(|r| r["stayType"] == "long"));

    let json = body_json(handle(get("/api/rooms?stayType=LONG"), &store).unwrap());
    assert!(json.as_array().unwrap().is_empty());
}

#[test]
fn get_room_by_id() {
    let store = init_test_store();

    let resp = handle(get("/api/rooms/4"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let json = body_json(resp);
    assert_eq!(json["id"], 4);
    assert_eq!(json["name"], "Luxury Penthouse");
    assert_eq!(json["imageUrl"], "/images/room4.jpg");
}

#[test]
fn get_room_rejects_non_integer_id() {
    let store = init_test_store();

    let resp = serve(get("/api/rooms/abc"), &store);
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["message"], "Invalid room ID");

    let resp = serve(get("/api/rooms/1.5"), &store);
    assert_eq!(resp.status(), 400);
}

#[test]
fn get_room_unknown_id_is_not_found() {
    let store = init_test_store();

    let resp = serve(get("/api/rooms/99"), &store);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["message"], "Room not found");
}

#[test]
fn featured_room_is_the_royal_penthouse() {
    let store = init_test_store();

    let json = body_json(handle(get("/api/featured-room"), &store).unwrap());
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Royal Penthouse Suite");
    assert_eq!(json["featured"], true);
}

#[test]
fn featured_room_missing_is_not_found() {
    let store = Store::empty();
    rooms::insert(
        &store,
        NewListing {
            name: "Plain Room".into(),
            description: "Nothing special".into(),
            price: 10000,
            stay_type: StayType::Short,
            price_unit: PriceUnit::Night,
            image_url: "/images/plain.jpg".into(),
            amenities: vec![],
            featured: None,
        },
    )
    .unwrap();

    let resp = serve(get("/api/featured-room"), &store);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["message"], "No featured room found");
}

#[test]
fn inserted_listing_is_served_without_featured_flag() {
    let store = init_test_store();
    rooms::insert(
        &store,
        NewListing {
            name: "Garden Studio".into(),
            description: "Quiet studio by the garden".into(),
            price: 200000,
            stay_type: StayType::General,
            price_unit: PriceUnit::Month,
            image_url: "/images/room8.jpg".into(),
            amenities: vec!["Garden View".into()],
            featured: None,
        },
    )
    .unwrap();

    let json = body_json(handle(get("/api/rooms/8"), &store).unwrap());
    assert_eq!(json["featured"], false);
    assert_eq!(json["stayType"], "general");

    let all = body_json(handle(get("/api/rooms"), &store).unwrap());
    assert_eq!(all.as_array().unwrap().len(), 8);
}

#[test]
fn unknown_api_path_is_json_not_found() {
    let store = init_test_store();

    let resp = serve(get("/api/bookings"), &store);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["message"], "Not Found");
}
