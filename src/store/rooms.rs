// store/rooms.rs
use crate::domain::{Listing, NewListing};
use crate::errors::ServerError;
use crate::store::Store;

/// Every listing, in insertion order.
pub fn list_all(store: &Store) -> Result<Vec<Listing>, ServerError> {
    store.with_read(|state| state.rooms.values().cloned().collect())
}

/// Listings whose category tag is exactly `category` (case-sensitive).
pub fn list_by_category(store: &Store, category: &str) -> Result<Vec<Listing>, ServerError> {
    store.with_read(|state| {
        state
            .rooms
            .values()
            .filter(|room| room.stay_type.as_str() == category)
            .cloned()
            .collect()
    })
}

pub fn get_by_id(store: &Store, id: i64) -> Result<Option<Listing>, ServerError> {
    store.with_read(|state| state.rooms.get(&id).cloned())
}

/// First featured listing in insertion order, if any.
pub fn get_featured(store: &Store) -> Result<Option<Listing>, ServerError> {
    store.with_read(|state| state.rooms.values().find(|room| room.featured).cloned())
}

pub fn insert(store: &Store, new_listing: NewListing) -> Result<Listing, ServerError> {
    store.with_write(|state| {
        let id = state.next_room_id;
        state.next_room_id += 1;

        let listing = new_listing.into_listing(id);
        state.rooms.insert(id, listing.clone());
        listing
    })
}
