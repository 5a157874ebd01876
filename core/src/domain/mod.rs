//! Domain layer containing the verification code entity and the issuance
//! request/response value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::VerificationCode;
pub use value_objects::{ErrorCode, IssuanceRequest, IssuanceResponse};
