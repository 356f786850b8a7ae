//! Core modules for the OLT provisioning client
//!
//! The validator and dispatcher carry the actual logic and are independent
//! of the CLI shell in `main.rs`, so a different presentation layer can
//! reuse them unchanged.

pub mod client;
pub mod config;
pub mod http;
pub mod models;
pub mod validate;
