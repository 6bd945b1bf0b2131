//! Key types for AES-128.

use crate::error::{fixed, Error};

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Number of words produced by the key schedule.
pub const EXPANDED_KEY_WORDS: usize = 4 * (ROUNDS + 1);

/// Four bytes, the unit the key schedule works in.
pub type Word = [u8; 4];

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        fixed(value, "key").map(Self)
    }
}

/// The 44 words derived from a key; round `r` uses words `4r..4r + 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandedKey(pub(crate) [Word; EXPANDED_KEY_WORDS]);

impl ExpandedKey {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn round_key(&self, round: usize) -> [Word; 4] {
        core::array::from_fn(|i| self.0[round * 4 + i])
    }

    /// All words of the schedule in order.
    pub fn words(&self) -> &[Word; EXPANDED_KEY_WORDS] {
        &self.0
    }
}
