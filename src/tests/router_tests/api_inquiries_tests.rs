use crate::router::{handle, serve};
use crate::store::inquiries;
use crate::tests::utils::{body_json, init_test_store, post, post_json};
use serde_json::json;

#[test]
fn create_inquiry_returns_created_record() {
    let store = init_test_store();

    let req = post_json(
        "/api/inquiries",
        &json!({
            "name": "Al",
            "email": "a@b.co",
            "subject": "Hi",
            "message": "0123456789"
        }),
    );
    let resp = handle(req, &store).expect("Handler failed");
    assert_eq!(resp.status(), 201);

    let json = body_json(resp);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Al");
    assert_eq!(json["email"], "a@b.co");
    assert!(json["createdAt"].as_str().unwrap().ends_with('Z'));

    let stored = inquiries::list_all(&store).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].subject, "Hi");
}

#[test]
fn ids_increase_per_submission() {
    let store = init_test_store();
    let payload = json!({
        "name": "Guest",
        "email": "guest@example.com",
        "subject": "Availability",
        "message": "Is the suite free next week?"
    });

    let first = body_json(handle(post_json("/api/inquiries", &payload), &store).unwrap());
    let second = body_json(handle(post_json("/api/inquiries", &payload), &store).unwrap());
    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}

#[test]
fn client_supplied_id_and_timestamp_are_ignored() {
    let store = init_test_store();

    let req = post_json(
        "/api/inquiries",
        &json!({
            "id": 500,
            "createdAt": "1999-01-01",
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Stay",
            "message": "Looking for a long stay."
        }),
    );
    let json = body_json(handle(req, &store).unwrap());
    assert_eq!(json["id"], 1);
    assert_ne!(json["createdAt"], "1999-01-01");
}

#[test]
fn validation_failure_lists_every_field() {
    let store = init_test_store();

    let req = post_json(
        "/api/inquiries",
        &json!({
            "name": "A",
            "email": "not-an-email",
            "subject": "S",
            "message": "012345678"
        }),
    );
    let resp = serve(req, &store);
    assert_eq!(resp.status(), 400);

    let json = body_json(resp);
    assert_eq!(json["message"], "Invalid inquiry data");
    let paths: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"][0].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["name", "email", "subject", "message"]);

    assert!(inquiries::list_all(&store).unwrap().is_empty());
}

#[test]
fn missing_fields_are_reported_as_required() {
    let store = init_test_store();

    let resp = serve(post_json("/api/inquiries", &json!({ "name": "Ada" })), &store);
    assert_eq!(resp.status(), 400);

    let json = body_json(resp);
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e["message"] == "Required"));
}

#[test]
fn empty_body_behaves_like_empty_object() {
    let store = init_test_store();

    let resp = serve(post("/api/inquiries", "application/json", ""), &store);
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["errors"].as_array().unwrap().len(), 4);
}

#[test]
fn malformed_json_is_bad_request() {
    let store = init_test_store();

    let resp = serve(post("/api/inquiries", "application/json", "{not json"), &store);
    assert_eq!(resp.status(), 400);
    assert!(body_json(resp)["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid inquiry data"));
}

#[test]
fn oversized_body_is_rejected() {
    let store = init_test_store();
    let huge = vec![b' '; 70 * 1024];

    let resp = serve(post("/api/inquiries", "application/json", huge), &store);
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["message"], "Request body too large");
}

#[test]
fn get_on_inquiries_is_not_routed() {
    let store = init_test_store();
    let resp = serve(crate::tests::utils::get("/api/inquiries"), &store);
    assert_eq!(resp.status(), 404);
}
