//! # Verification Server API
//!
//! JSON RPC surface of the verification server: the issuance endpoint, the
//! health endpoint, and telemetry setup for the server binary.

pub mod app;
pub mod dto;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
