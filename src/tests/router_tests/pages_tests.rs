use crate::router::{handle, serve};
use crate::store::{inquiries, Store};
use crate::tests::utils::{body_string, get, init_test_store, post};

const FORM: &str = "application/x-www-form-urlencoded";

#[test]
fn home_page_lists_rooms_and_featured() {
    let store = init_test_store();

    let resp = handle(get("/"), &store).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Experience Unrivaled"));
    assert!(body.contains("Deluxe King Suite"));
    assert!(body.contains("$3,500 / month"));
    assert!(body.contains("Royal Penthouse Suite"));
    assert!(body.contains("Featured Room Without Kitchen"));
    assert!(body.contains(r#"action="/contact""#));
}

#[test]
fn home_page_grid_shows_at_most_six_rooms() {
    let store = init_test_store();
    let body = body_string(handle(get("/"), &store).unwrap());

    // Room 7 only appears through the featured section.
    assert_eq!(body.matches(r#"class="room-card""#).count(), 6);
}

#[test]
fn home_page_without_featured_room_still_renders() {
    let store = Store::empty();

    let resp = handle(get("/"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(!body_string(resp).contains(r#"id="featured""#));
}

#[test]
fn room_detail_page_renders_listing() {
    let store = init_test_store();

    let resp = handle(get("/rooms/2"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Executive Apartment | Aaram Luxury Living"));
    assert!(body.contains("Full Kitchen"));
    assert!(body.contains("Minimum stay: 1 month"));
}

#[test]
fn room_detail_unknown_or_bad_id_is_html_not_found() {
    let store = init_test_store();

    for uri in ["/rooms/42", "/rooms/abc"] {
        let resp = serve(get(uri), &store);
        assert_eq!(resp.status(), 404, "{uri}");
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert!(body_string(resp).contains("doesn't exist or has been removed"));
    }
}

#[test]
fn contact_form_submission_stores_inquiry() {
    let store = init_test_store();

    let req = post(
        "/contact",
        FORM,
        "name=Ada+Lovelace&email=ada%40example.com&subject=Long+stay&message=Looking+for+a+month+in+March",
    );
    let resp = handle(req, &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Thank you for your message!"));
    assert!(body.contains("ada@example.com"));

    let stored = inquiries::list_all(&store).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Ada Lovelace");
    assert_eq!(stored[0].message, "Looking for a month in March");
}

#[test]
fn invalid_contact_form_is_rerendered_with_errors() {
    let store = init_test_store();

    let req = post("/contact", FORM, "name=A&email=nope&subject=Hello&message=short");
    let resp = handle(req, &store).unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Name must be at least 2 characters"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Message must be at least 10 characters"));
    assert!(!body.contains("Subject must be at least 2 characters"));
    // submitted values are kept
    assert!(body.contains(r#"value="Hello""#));

    assert!(inquiries::list_all(&store).unwrap().is_empty());
}

#[test]
fn contact_page_loads() {
    let store = init_test_store();

    let resp = handle(get("/contact"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Send Message"));
}

#[test]
fn stylesheet_is_served_as_css() {
    let store = init_test_store();

    let resp = handle(get("/static/site.css"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains("--gold"));
}

#[test]
fn unknown_page_is_html_not_found() {
    let store = init_test_store();

    let resp = serve(get("/no-such-page"), &store);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Page not found"));
}
