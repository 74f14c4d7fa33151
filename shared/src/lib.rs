//! Shared types for the pharmacy back-office
//!
//! Domain models, monetary value types, error types and response
//! structures used by both the calculation core (`backoffice`) and the
//! REST client (`botica-client`).

pub mod error;
pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult};
pub use models::money::{Currency, ExchangeRate, Money};
pub use response::ErrorBody;
pub use types::{Permission, Timestamp};
