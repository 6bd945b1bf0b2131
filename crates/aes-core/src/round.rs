//! AES round transformations over the 4x4 state.

use crate::gf::gmul;
use crate::key::Word;
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// MixColumns coefficients, row-major.
pub const MIX_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// InvMixColumns coefficients, row-major.
pub const INV_MIX_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        state[row].rotate_left(row);
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        state[row].rotate_right(row);
    }
}

fn mul_column(matrix: &[[u8; 4]; 4], column: [u8; 4]) -> [u8; 4] {
    matrix.map(|coeffs| {
        coeffs
            .iter()
            .zip(column.iter())
            .fold(0u8, |acc, (&c, &a)| acc ^ gmul(c, a))
    })
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mul_column(&MIX_MATRIX, state.column(col));
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mul_column(&INV_MIX_MATRIX, state.column(col));
        state.set_column(col, mixed);
    }
}

/// XORs a round key into the state; word `c` covers column `c`.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &[Word; 4]) {
    for row in 0..4 {
        for (col, word) in round_key.iter().enumerate() {
            state[row][col] ^= word[row];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn state(bytes: [u8; 16]) -> State {
        State::from_block(&bytes)
    }

    // FIPS-197 appendix B, round 1.
    const ROUND1_START: [u8; 16] = [
        0x19, 0x3d, 0xe3, 0xbe, 0xa0, 0xf4, 0xe2, 0x2b, 0x9a, 0xc6, 0x8d, 0x2a, 0xe9, 0xf8, 0x48,
        0x08,
    ];
    const ROUND1_SUB: [u8; 16] = [
        0xd4, 0x27, 0x11, 0xae, 0xe0, 0xbf, 0x98, 0xf1, 0xb8, 0xb4, 0x5d, 0xe5, 0x1e, 0x41, 0x52,
        0x30,
    ];
    const ROUND1_SHIFT: [u8; 16] = [
        0xd4, 0xbf, 0x5d, 0x30, 0xe0, 0xb4, 0x52, 0xae, 0xb8, 0x41, 0x11, 0xf1, 0x1e, 0x27, 0x98,
        0xe5,
    ];
    const ROUND1_MIX: [u8; 16] = [
        0x04, 0x66, 0x81, 0xe5, 0xe0, 0xcb, 0x19, 0x9a, 0x48, 0xf8, 0xd3, 0x7a, 0x28, 0x06, 0x26,
        0x4c,
    ];
    const ROUND1_KEY: [Word; 4] = [
        [0xa0, 0xfa, 0xfe, 0x17],
        [0x88, 0x54, 0x2c, 0xb1],
        [0x23, 0xa3, 0x39, 0x39],
        [0x2a, 0x6c, 0x76, 0x05],
    ];
    const ROUND2_START: [u8; 16] = [
        0xa4, 0x9c, 0x7f, 0xf2, 0x68, 0x9f, 0x35, 0x2b, 0x6b, 0x5b, 0xea, 0x43, 0x02, 0x6a, 0x50,
        0x49,
    ];

    #[test]
    fn forward_round_matches_fips_trace() {
        let mut s = state(ROUND1_START);
        sub_bytes(&mut s);
        assert_eq!(s.to_block(), ROUND1_SUB);
        shift_rows(&mut s);
        assert_eq!(s.to_block(), ROUND1_SHIFT);
        mix_columns(&mut s);
        assert_eq!(s.to_block(), ROUND1_MIX);
        add_round_key(&mut s, &ROUND1_KEY);
        assert_eq!(s.to_block(), ROUND2_START);
    }

    #[test]
    fn inverse_round_walks_trace_backwards() {
        let mut s = state(ROUND2_START);
        add_round_key(&mut s, &ROUND1_KEY);
        assert_eq!(s.to_block(), ROUND1_MIX);
        inv_mix_columns(&mut s);
        assert_eq!(s.to_block(), ROUND1_SHIFT);
        inv_shift_rows(&mut s);
        assert_eq!(s.to_block(), ROUND1_SUB);
        inv_sub_bytes(&mut s);
        assert_eq!(s.to_block(), ROUND1_START);
    }

    #[test]
    fn mix_single_column_known_vector() {
        let mut s = State::default();
        s.set_column(0, [0xdb, 0x13, 0x53, 0x45]);
        s.set_column(1, [0x01, 0x01, 0x01, 0x01]);
        s.set_column(2, [0xc6, 0xc6, 0xc6, 0xc6]);
        s.set_column(3, [0xd4, 0xd4, 0xd4, 0xd5]);
        mix_columns(&mut s);
        assert_eq!(s.column(0), [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(s.column(1), [0x01, 0x01, 0x01, 0x01]);
        assert_eq!(s.column(2), [0xc6, 0xc6, 0xc6, 0xc6]);
        assert_eq!(s.column(3), [0xd5, 0xd5, 0xd7, 0xd6]);
    }

    #[test]
    fn shift_rows_moves_positions_only() {
        let mut s = state(core::array::from_fn(|i| i as u8));
        shift_rows(&mut s);
        assert_eq!(s[0], [0, 4, 8, 12]);
        assert_eq!(s[1], [5, 9, 13, 1]);
        assert_eq!(s[2], [10, 14, 2, 6]);
        assert_eq!(s[3], [15, 3, 7, 11]);
    }

    #[test]
    fn layers_invert_on_random_states() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..64 {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            let original = state(block);

            let mut s = original;
            shift_rows(&mut s);
            inv_shift_rows(&mut s);
            assert_eq!(s, original);

            mix_columns(&mut s);
            inv_mix_columns(&mut s);
            assert_eq!(s, original);

            sub_bytes(&mut s);
            inv_sub_bytes(&mut s);
            assert_eq!(s, original);
        }
    }

    #[test]
    fn sub_bytes_commutes_with_shift_rows() {
        let mut rng = ChaCha20Rng::from_seed([8u8; 32]);
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);

        let mut a = state(block);
        sub_bytes(&mut a);
        shift_rows(&mut a);

        let mut b = state(block);
        shift_rows(&mut b);
        sub_bytes(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let original = state(ROUND1_START);
        let mut s = original;
        add_round_key(&mut s, &ROUND1_KEY);
        assert_ne!(s, original);
        add_round_key(&mut s, &ROUND1_KEY);
        assert_eq!(s, original);
    }
}
