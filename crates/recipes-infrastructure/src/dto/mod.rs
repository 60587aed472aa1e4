//! Data Transfer Objects (DTOs) for persistence.
//!
//! DTOs mirror the stored wire shape exactly and stay private to the
//! infrastructure layer. Domain models never derive their storage format
//! directly, so the on-disk layout can stay compatible with values written
//! by the browser build of the catalog.
//!
//! ### Recipe collection layout
//! - JSON array of camelCase objects
//! - `createdAt` as an RFC 3339 string with milliseconds (`...T12:00:00.000Z`)

mod recipe;

pub use recipe::{RecipeDTO, decode_collection, encode_collection};
