//! Salted, iterated SHA-256 password digests.
//!
//! `hash_0 = sha256(salt || password)`, `hash_i = sha256(hash_{i-1} || salt)`
//! for `rounds` iterations. Salt, round count and final hash are stored
//! together so the round count can be raised without invalidating old
//! accounts.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Rounds used for new accounts unless configured otherwise.
pub const DEFAULT_DIGEST_ROUNDS: u32 = 10_000;

/// Largest round count accepted, for new digests and stored ones alike.
pub const MAX_DIGEST_ROUNDS: u32 = 1_000_000;

/// Stored form of a password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordDigest {
    salt: String,
    rounds: u32,
    hash: String,
}

impl PasswordDigest {
    /// Digest `password` with a fresh random salt.
    pub fn create(password: &str, rounds: u32) -> Self {
        let salt = hex::encode(uuid::Uuid::new_v4().as_bytes());
        let rounds = rounds.clamp(1, MAX_DIGEST_ROUNDS);
        let hash = hex::encode(stretch(&salt, password, rounds));
        Self { salt, rounds, hash }
    }

    /// Check `password` against this digest in constant time.
    ///
    /// A stored round count outside `1..=MAX_DIGEST_ROUNDS` never verifies.
    pub fn verify(&self, password: &str) -> bool {
        if !(1..=MAX_DIGEST_ROUNDS).contains(&self.rounds) {
            return false;
        }
        let Ok(expected) = hex::decode(&self.hash) else {
            return false;
        };
        let actual = stretch(&self.salt, password, self.rounds);
        expected.len() == actual.len()
            && expected
                .iter()
                .zip(actual.iter())
                .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                == 0
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

fn stretch(salt: &str, password: &str, rounds: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    for _ in 1..rounds {
        let mut hasher = Sha256::new();
        hasher.update(out);
        hasher.update(salt.as_bytes());
        out.copy_from_slice(&hasher.finalize());
    }
    out
}
