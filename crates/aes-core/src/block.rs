//! Block representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];
