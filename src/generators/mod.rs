// src/generators/mod.rs
pub mod password;
pub mod strength;

use crate::models::{GenerationRequest, StrengthAssessment};

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, request: &GenerationRequest) -> String {
        password::generate_password(request)
    }

    pub fn assess(&self, password: &str) -> StrengthAssessment {
        strength::assess_strength(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
