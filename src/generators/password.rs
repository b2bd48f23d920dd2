// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};

use crate::models::GenerationRequest;

/// Lowercase letters, uppercase letters and digits (62 characters).
pub const BASE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Punctuation added when symbols are requested (24 characters).
pub const SYMBOL_ALPHABET: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// Generate a password by drawing each position independently and uniformly
/// from the resolved alphabet.
///
/// An empty alphabet (an empty custom string) yields an empty password rather
/// than an error; there is nothing to draw from. No class balancing is done,
/// so a generated password may happen to miss a character class entirely.
pub fn generate_password(request: &GenerationRequest) -> String {
    let alphabet = resolve_alphabet(request);
    if alphabet.is_empty() {
        return String::new();
    }

    let mut rng = rand::thread_rng();
    let dist = Uniform::from(0..alphabet.len());

    (0..request.length)
        .map(|_| alphabet[dist.sample(&mut rng)])
        .collect()
}

// Custom alphabets are taken verbatim, duplicates included: a repeated
// character legitimately raises its draw weight.
fn resolve_alphabet(request: &GenerationRequest) -> Vec<char> {
    match &request.custom_alphabet {
        Some(custom) => custom.chars().collect(),
        None => {
            let mut chars: Vec<char> = BASE_ALPHABET.chars().collect();
            if request.include_symbols {
                chars.extend(SYMBOL_ALPHABET.chars());
            }
            chars
        }
    }
}
