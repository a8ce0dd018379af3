//! Repository implementations for database access
//!
//! Each operation is a single statement; not-found is detected on the
//! statement itself rather than with a separate existence query.

pub mod users;

pub use users::{DbError, User, UserRepo};
