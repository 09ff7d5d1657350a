//! In-process owner of encoded image bytes.
//!
//! Stands in for the platform image cache: the core only ever holds a
//! `mem://` handle, never the bytes behind it. Contents live for the
//! process and are dropped with the store.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Handle prefix for images parked in an [`ImageStore`].
pub const URI_SCHEME: &str = "mem://";

/// Byte cache keyed by opaque `mem://` handles.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: RwLock<HashMap<String, Arc<Vec<u8>>>>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park encoded bytes and mint a fresh handle for them.
    pub fn insert(&self, bytes: Vec<u8>) -> String {
        let uri = format!("{URI_SCHEME}{}", uuid::Uuid::new_v4());
        self.images.write().insert(uri.clone(), Arc::new(bytes));
        uri
    }

    /// The bytes behind a handle, if still cached.
    pub fn resolve(&self, uri: &str) -> Option<Arc<Vec<u8>>> {
        self.images.read().get(uri).cloned()
    }

    /// Drop the bytes behind a handle. Unknown handles are a no-op.
    pub fn remove(&self, uri: &str) {
        self.images.write().remove(uri);
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.images.write().clear();
    }

    pub fn len(&self) -> usize {
        self.images.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.read().is_empty()
    }
}
