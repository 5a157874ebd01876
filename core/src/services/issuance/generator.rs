//! Fresh code generation

use rand::{distributions::Alphanumeric, thread_rng, Rng};
use std::sync::Arc;
use uuid::Uuid;

use vs_shared::{GeneratorKind, IssuanceConfig};

use crate::domain::entities::VerificationCode;

/// Source of new verification codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> VerificationCode;
}

/// Leading characters of a random v4 UUID (lowercase hex)
#[derive(Debug, Clone)]
pub struct UuidCodeGenerator {
    length: usize,
}

impl UuidCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl CodeGenerator for UuidCodeGenerator {
    fn generate(&self) -> VerificationCode {
        let id = Uuid::new_v4().simple().to_string();
        VerificationCode::truncated(&id, self.length)
    }
}

/// Random characters from `[A-Za-z0-9]`
#[derive(Debug, Clone)]
pub struct AlphanumericCodeGenerator {
    length: usize,
}

impl AlphanumericCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl CodeGenerator for AlphanumericCodeGenerator {
    fn generate(&self) -> VerificationCode {
        let code: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();
        VerificationCode::new(code)
    }
}

/// Generator selected by configuration
pub fn generator_for(config: &IssuanceConfig) -> Arc<dyn CodeGenerator> {
    match config.generator {
        GeneratorKind::Uuid => Arc::new(UuidCodeGenerator::new(config.code_length)),
        GeneratorKind::Alphanumeric => Arc::new(AlphanumericCodeGenerator::new(config.code_length)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_codes_are_short_hex() {
        let generator = UuidCodeGenerator::new(4);
        for _ in 0..200 {
            let code = generator.generate();
            assert_eq!(code.len(), 4);
            assert!(code
                .as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_alphanumeric_codes() {
        let generator = AlphanumericCodeGenerator::new(6);
        for _ in 0..200 {
            let code = generator.generate();
            assert_eq!(code.len(), 6);
            assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generator_for_respects_config() {
        let config = IssuanceConfig {
            generator: GeneratorKind::Alphanumeric,
            code_length: 8,
            ..Default::default()
        };
        assert_eq!(generator_for(&config).generate().len(), 8);
        assert_eq!(generator_for(&IssuanceConfig::default()).generate().len(), 4);
    }
}
