use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::{Inquiry, Listing};
use crate::errors::ServerError;

pub mod inquiries;
pub mod rooms;
pub mod seed;

/// Everything the site keeps in memory. Ids are assigned from the
/// counters below, so `BTreeMap` key order is insertion order.
#[derive(Debug)]
pub struct StoreState {
    pub(crate) rooms: BTreeMap<i64, Listing>,
    pub(crate) inquiries: BTreeMap<i64, Inquiry>,
    pub(crate) next_room_id: i64,
    pub(crate) next_inquiry_id: i64,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            rooms: BTreeMap::new(),
            inquiries: BTreeMap::new(),
            next_room_id: 1,
            next_inquiry_id: 1,
        }
    }
}

/// Process-wide store handle. Cloning shares the same state.
#[derive(Clone, Debug)]
pub struct Store {
    state: Arc<RwLock<StoreState>>,
}

impl Store {
    /// A store with no listings and no inquiries.
    pub fn empty() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::empty())),
        }
    }

    /// A store populated with the fixed room catalog.
    pub fn seeded() -> Result<Self, ServerError> {
        let store = Self::empty();
        for listing in seed::rooms() {
            rooms::insert(&store, listing)?;
        }
        Ok(store)
    }

    /// Shared access. Runs concurrently with other readers, never with a writer.
    pub fn with_read<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&StoreState) -> T,
    {
        let state = self
            .state
            .read()
            .map_err(|e| ServerError::Store(format!("read lock poisoned: {e}")))?;
        Ok(f(&state))
    }

    /// Exclusive access for inserts. Id counters are bumped while this is held.
    pub fn with_write<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut StoreState) -> T,
    {
        let mut state = self
            .state
            .write()
            .map_err(|e| ServerError::Store(format!("write lock poisoned: {e}")))?;
        Ok(f(&mut state))
    }
}
