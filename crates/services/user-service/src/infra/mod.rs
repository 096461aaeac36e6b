//! Infrastructure layer - database connection management.

mod db;

pub use db::Database;
