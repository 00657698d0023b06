use crate::store::Store;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// A fresh store seeded with the production catalog.
pub fn init_test_store() -> Store {
    Store::seeded().unwrap_or_else(|e| panic!("Store seeding failed: {e}"))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, content_type: &str, body: impl Into<Vec<u8>>) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", content_type)
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn post_json(uri: &str, json: &serde_json::Value) -> Request {
    post(uri, "application/json", serde_json::to_vec(json).unwrap())
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}
