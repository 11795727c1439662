//! Folio - portfolio project catalog
//!
//! An in-memory catalog of portfolio project records with read-only queries,
//! plus helpers for authoring and validating new records.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod models;
pub mod services;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
