//! Shared contracts for the daily collection sheet.
//!
//! Wire DTOs exchanged with the backend plus the pure page logic
//! (derivations, filtering, validation, payload building) so it can be
//! tested without a browser.

pub mod domain;
pub mod shared;
pub mod system;
