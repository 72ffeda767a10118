//! Core types and trait definitions for the Mergington activity directory.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod activity;
pub mod error;
pub mod seed;
pub mod store;

pub use activity::{Activity, ActivityMap};
pub use error::{Error, Result};
