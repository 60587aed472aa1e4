//! Session domain module.
//!
//! A session is a locally remembered display name. There is no credential
//! check; any non-blank name logs in.
//!
//! # Module Structure
//!
//! - `model`: Session value and synthetic email derivation
//! - `repository`: Storage trait for the remembered name
//! - `service`: Login/logout/current-user operations

mod model;
mod repository;
mod service;

pub use model::{EMAIL_DOMAIN, Session, derive_email};
pub use repository::SessionRepository;
pub use service::SessionService;
