//! # Verification Server Core
//!
//! Core issuance protocol and domain layer of the verification server.
//! This crate contains the domain types, the error taxonomy, the collaborator
//! traits (code cache and notifier) and the issuance service that decides
//! whether to reuse a live code or mint, persist and deliver a new one.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{ErrorCode, IssuanceRequest, IssuanceResponse, VerificationCode};
pub use errors::{DomainError, DomainResult, IssuanceError, TransportFault};
pub use services::{CodeCacheTrait, CodeGenerator, IssuanceConfig, IssuanceService, NotifierTrait};
