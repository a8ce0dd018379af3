//! Database layer - connection pool, schema bootstrap, repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - One query per operation - existence checks ride on the same statement
//! - Identifier uniqueness is enforced by the database, not the application

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
