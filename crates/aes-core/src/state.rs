//! The 4x4 state matrix and its mapping to and from 16-byte blocks.

use core::ops::{Index, IndexMut};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{fixed, Result};

/// AES state: four rows of four bytes.
///
/// Block byte `i` lives at row `i % 4`, column `i / 4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State([[u8; 4]; 4]);

impl State {
    /// Lays a block out column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (i, &byte) in block.iter().enumerate() {
            rows[i % 4][i / 4] = byte;
        }
        Self(rows)
    }

    /// Reads the state back column by column.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.0[i % 4][i / 4];
        }
        block
    }

    /// Returns column `col` top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    /// Overwrites column `col` top to bottom.
    #[inline]
    pub fn set_column(&mut self, col: usize, values: [u8; 4]) {
        for (row, value) in values.into_iter().enumerate() {
            self.0[row][col] = value;
        }
    }

    /// Mutable access to every byte, row-major.
    pub fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.0.iter_mut().flatten()
    }
}

impl Index<usize> for State {
    type Output = [u8; 4];

    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl IndexMut<usize> for State {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

/// Builds a state from a slice that must be exactly one block long.
pub fn bytes_to_state(block: &[u8]) -> Result<State> {
    let block: Block = fixed(block, "block")?;
    Ok(State::from_block(&block))
}

/// Serialises a state back into a block.
pub fn state_to_bytes(state: &State) -> Block {
    state.to_block()
}
