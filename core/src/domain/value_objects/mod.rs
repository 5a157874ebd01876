//! Value objects exchanged across the RPC boundary

pub mod error_code;
pub mod issuance;

pub use error_code::ErrorCode;
pub use issuance::{IssuanceRequest, IssuanceResponse};
