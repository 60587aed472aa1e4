//! Session name storage over local key-value storage.

use std::sync::Arc;

use recipes_core::error::Result;
use recipes_core::session::SessionRepository;
use recipes_core::storage::{KeyValueStore, SESSION_STORAGE_KEY};

/// Stores the logged-in display name as a plain string under
/// [`SESSION_STORAGE_KEY`].
pub struct LocalSessionRepository {
    storage: Arc<dyn KeyValueStore>,
}

impl LocalSessionRepository {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }
}

impl SessionRepository for LocalSessionRepository {
    fn load_name(&self) -> Result<Option<String>> {
        self.storage.get_item(SESSION_STORAGE_KEY)
    }

    fn store_name(&self, name: &str) -> Result<()> {
        self.storage.set_item(SESSION_STORAGE_KEY, name)
    }

    fn clear(&self) -> Result<()> {
        self.storage.remove_item(SESSION_STORAGE_KEY)
    }
}
