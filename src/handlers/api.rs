// handlers/api.rs
use std::collections::HashMap;

use chrono::Utc;

use crate::domain::InquiryForm;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{fault, read_body};
use crate::responses::json_response;
use crate::store::{inquiries, rooms, Store};
use astra::Request;

/// GET /api/rooms, optionally narrowed with `?stayType=`.
pub fn list_rooms(store: &Store, query: &HashMap<String, String>) -> ResultResp {
    let rooms = match query.get("stayType") {
        Some(stay_type) => rooms::list_by_category(store, stay_type),
        None => rooms::list_all(store),
    }
    .map_err(|e| fault(e, "Failed to fetch rooms"))?;

    json_response(200, &rooms)
}

/// GET /api/rooms/:id
pub fn get_room(store: &Store, raw_id: &str) -> ResultResp {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ServerError::BadRequest("Invalid room ID".into()))?;

    let room = rooms::get_by_id(store, id)
        .map_err(|e| fault(e, "Failed to fetch room"))?
        .ok_or_else(|| ServerError::NotFound("Room not found".into()))?;

    json_response(200, &room)
}

/// GET /api/featured-room
pub fn featured_room(store: &Store) -> ResultResp {
    let room = rooms::get_featured(store)
        .map_err(|e| fault(e, "Failed to fetch featured room"))?
        .ok_or_else(|| ServerError::NotFound("No featured room found".into()))?;

    json_response(200, &room)
}

/// POST /api/inquiries
pub fn create_inquiry(req: Request, store: &Store) -> ResultResp {
    let body = read_body(req)?;

    // An empty body is treated like `{}` so every field reports "Required".
    let form: InquiryForm = if body.iter().all(u8::is_ascii_whitespace) {
        InquiryForm::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ServerError::BadRequest(format!("Invalid inquiry data: {e}")))?
    };

    let new_inquiry = form.validate().map_err(ServerError::Validation)?;

    let inquiry = inquiries::submit(store, new_inquiry, Utc::now())
        .map_err(|e| fault(e, "Failed to submit inquiry"))?;

    tracing::info!(inquiry_id = inquiry.id, "inquiry received");
    json_response(201, &inquiry)
}
