// store/inquiries.rs
use chrono::{DateTime, Utc};

use crate::domain::{Inquiry, NewInquiry};
use crate::errors::ServerError;
use crate::store::Store;

/// Store an already-validated inquiry. No validation happens here.
pub fn submit(
    store: &Store,
    new_inquiry: NewInquiry,
    now: DateTime<Utc>,
) -> Result<Inquiry, ServerError> {
    store.with_write(|state| {
        let id = state.next_inquiry_id;
        state.next_inquiry_id += 1;

        let inquiry = new_inquiry.into_inquiry(id, now);
        state.inquiries.insert(id, inquiry.clone());
        inquiry
    })
}

pub fn list_all(store: &Store) -> Result<Vec<Inquiry>, ServerError> {
    store.with_read(|state| state.inquiries.values().cloned().collect())
}
