//! Direction and award-seed derivation from resolved oracle entropy.
//!
//! Both derivations are fixed functions of the revealed bytes, published
//! before any commitment is made, so neither party can bias a step by
//! choosing values at commit time.

use serde::{Deserialize, Serialize};

/// Binary step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Domain separation for the card-award stream.
const AWARD_SEED_CONTEXT: &str = "run-engine v1 card award";

/// Derive the correct direction for a step from the oracle's revealed bytes.
///
/// XOR-parity over every byte: flipping any single bit anywhere in the
/// entropy flips the outcome. Must stay identical between commit validation
/// and reveal.
pub fn correct_direction(entropy: &[u8]) -> Direction {
    let parity = entropy.iter().fold(0u8, |acc, b| acc ^ b) & 1;
    if parity == 0 {
        Direction::Left
    } else {
        Direction::Right
    }
}

/// Derive the card-award RNG seed from the same entropy.
///
/// Domain-separated from the direction bit so the award stream shares no
/// structure with the step outcome.
pub fn derive_award_seed(entropy: &[u8]) -> u64 {
    let key = blake3::derive_key(AWARD_SEED_CONTEXT, entropy);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&key[..8]);
    u64::from_le_bytes(bytes)
}
