//! SQLite backend for the Mergington activity directory.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Each activity is one row holding its
//! roster as a JSON array, so roster edits are single `UPDATE` statements.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
