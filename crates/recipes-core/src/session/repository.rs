//! Session repository trait.

use crate::error::Result;

/// Storage for the remembered display name.
///
/// Decouples the session service from the concrete storage mechanism
/// (local key-value store, in-memory map).
pub trait SessionRepository: Send + Sync {
    /// Returns the stored name, if any.
    fn load_name(&self) -> Result<Option<String>>;

    /// Stores `name`, replacing any previous one.
    fn store_name(&self, name: &str) -> Result<()>;

    /// Forgets the stored name. Succeeds when nothing is stored.
    fn clear(&self) -> Result<()>;
}
