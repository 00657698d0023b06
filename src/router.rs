use crate::errors::{ResultResp, ServerError};
use crate::handlers::{api, pages};
use crate::responses::assets::stylesheet_response;
use crate::responses::{html_error_response, json_error_response};
use crate::store::Store;
use astra::{Request, Response};
use std::collections::HashMap;
use std::time::Instant;

/// Entry point for every request: dispatch, then render any error
/// as JSON under `/api/` and as an HTML page everywhere else.
pub fn serve(req: Request, store: &Store) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, store) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(%method, %path, error = %err, "request failed");
            } else {
                tracing::warn!(%method, %path, status = err.status(), error = %err, "request rejected");
            }

            if is_api_path(&path) {
                json_error_response(&err)
            } else {
                html_error_response(&err)
            }
        }
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(req: Request, store: &Store) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        // Pages
        ("GET", []) => pages::home(store),
        ("GET", ["rooms", id]) => pages::room_detail(store, id),
        ("GET", ["contact"]) => pages::contact(),
        ("POST", ["contact"]) => pages::submit_contact(req, store),
        ("GET", ["static", "site.css"]) => stylesheet_response(),

        // JSON API
        ("GET", ["api", "rooms"]) => api::list_rooms(store, &parse_query(&req)),
        ("GET", ["api", "rooms", id]) => api::get_room(store, id),
        ("GET", ["api", "featured-room"]) => api::featured_room(store),
        ("POST", ["api", "inquiries"]) => api::create_inquiry(req, store),

        _ => Err(ServerError::NotFound("Not Found".into())),
    }
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Percent-decoded query parameters. Later keys overwrite earlier ones.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
