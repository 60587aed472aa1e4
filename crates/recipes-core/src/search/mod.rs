//! Free-text search over the recipe collection.
//!
//! The filter is recomputed from scratch for every query; the collection is
//! small and fully in memory, so there is no index to maintain.

mod filter;

pub use filter::{filter, matches};
