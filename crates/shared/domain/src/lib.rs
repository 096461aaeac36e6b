//! Domain layer - Core entities and value objects for user profiles.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{UserFields, UserId, UserList, UserRecord};
