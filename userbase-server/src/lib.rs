//! userbase-server: HTTP server for the user directory
//!
//! Exposes CRUD operations on the `users` table over HTTP.
//! The `http` module owns the axum router and error mapping;
//! the `db` module owns the connection pool and repositories.

pub mod db;
pub mod http;
