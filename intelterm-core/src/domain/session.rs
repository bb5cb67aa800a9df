use crate::constants::{SESSION_ID_ALPHABET, SESSION_ID_LEN};
use rand::Rng;
use std::fmt;

/// Cosmetic 8-character terminal id shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..SESSION_ID_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..SESSION_ID_ALPHABET.len());
                SESSION_ID_ALPHABET[idx] as char
            })
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
