// Postgres storage layer with sqlx
//
// This crate provides the database implementation for the core trait:
// - PgKvStore: implements KvStore over a single kv_entries table

pub mod kv_store;
pub mod models;
pub mod repositories;

pub use kv_store::PgKvStore;
pub use models::*;
pub use repositories::*;
