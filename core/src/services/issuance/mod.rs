//! Verification code issuance
//!
//! This module implements the issue-code protocol:
//! - Reuse a live code cached under `prefix + identity`
//! - Otherwise generate a code and persist it with a fixed lifetime
//! - Deliver the code through the notifier and report a single outcome

mod generator;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use generator::{generator_for, AlphanumericCodeGenerator, CodeGenerator, UuidCodeGenerator};
pub use service::IssuanceService;
pub use traits::{CodeCacheTrait, NotifierTrait};
pub use vs_shared::IssuanceConfig;
