//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::error::{fixed, Result};
use crate::key::{Aes128Key, ExpandedKey, Word, EXPANDED_KEY_WORDS, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;
use crate::state::State;

/// Round constants: successive powers of `x` in GF(2^8).
pub const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    [
        lhs[0] ^ rhs[0],
        lhs[1] ^ rhs[1],
        lhs[2] ^ rhs[2],
        lhs[3] ^ rhs[3],
    ]
}

/// Expands a 128-bit key into 44 words (11 round keys).
pub fn expand_key(key: &Aes128Key) -> ExpandedKey {
    log::trace!("expanding AES-128 key schedule");
    let mut w = [[0u8; 4]; EXPANDED_KEY_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in 4..EXPANDED_KEY_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / 4 - 1];
        }
        w[i] = xor_word(w[i - 4], temp);
    }

    ExpandedKey(w)
}

/// Expands a key given as a byte slice, which must be 16 bytes long.
pub fn key_expansion(key: &[u8]) -> Result<ExpandedKey> {
    let key = Aes128Key::try_from(key)?;
    Ok(expand_key(&key))
}

fn encrypt_state(state: &mut State, keys: &ExpandedKey) {
    add_round_key(state, &keys.round_key(0));

    for round in 1..ROUNDS {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, &keys.round_key(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, &keys.round_key(ROUNDS));
}

fn decrypt_state(state: &mut State, keys: &ExpandedKey) {
    add_round_key(state, &keys.round_key(ROUNDS));

    for round in (1..ROUNDS).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, &keys.round_key(round));
        inv_mix_columns(state);
    }

    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, &keys.round_key(0));
}

/// Encrypts a single 16-byte block under a 16-byte key.
///
/// Both lengths are checked before any round runs.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block: Block = fixed(plaintext, "plaintext")?;
    let key = Aes128Key::try_from(key)?;
    log::trace!("encrypting one block");

    let mut state = State::from_block(&block);
    let keys = expand_key(&key);
    encrypt_state(&mut state, &keys);
    Ok(state.to_block())
}

/// Decrypts a single 16-byte block under a 16-byte key.
///
/// This is the direct inverse cipher, walking the round keys from last to first.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block: Block = fixed(ciphertext, "ciphertext")?;
    let key = Aes128Key::try_from(key)?;
    log::trace!("decrypting one block");

    let mut state = State::from_block(&block);
    let keys = expand_key(&key);
    decrypt_state(&mut state, &keys);
    Ok(state.to_block())
}
