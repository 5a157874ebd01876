//! Business services containing domain logic and use cases.

pub mod issuance;

// Re-export commonly used types
pub use issuance::{
    generator_for, AlphanumericCodeGenerator, CodeCacheTrait, CodeGenerator, IssuanceConfig,
    IssuanceService, NotifierTrait, UuidCodeGenerator,
};
