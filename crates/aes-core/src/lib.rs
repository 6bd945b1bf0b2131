//! From-scratch AES-128 for a single 16-byte block.
//!
//! This crate follows FIPS-197 and provides:
//! - Arithmetic in GF(2^8) and the fixed S-box tables.
//! - The 4x4 state codec and each round transformation.
//! - The AES-128 key schedule.
//! - Single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;
mod state;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, key_expansion, RCON};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, ExpandedKey, Word, EXPANDED_KEY_WORDS, KEY_SIZE, ROUNDS};
pub use crate::state::{bytes_to_state, state_to_bytes, State};
