// SPDX-FileCopyrightText: 2025 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use itertools::Itertools;
use std::fmt;

use crate::InterpreterError;

/// A flat, fixed-size address space.
///
/// Unlike a growable tape, every access is bounds-checked: reading or writing an address that is
/// negative or past the last cell is an [`InterpreterError::OutOfBounds`].
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Memory {
    cells: Vec<i64>,
}

impl Memory {
    /// The number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow the cells as a slice
    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.cells
    }

    fn slot(&self, address: i64) -> Result<usize, InterpreterError> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.cells.len())
            .ok_or(InterpreterError::OutOfBounds {
                address,
                len: self.cells.len(),
            })
    }

    /// Read the cell at `address`
    #[doc(alias = "peek")]
    pub fn get(&self, address: i64) -> Result<i64, InterpreterError> {
        self.slot(address).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `address`
    #[doc(alias = "poke")]
    pub fn set(&mut self, address: i64, value: i64) -> Result<(), InterpreterError> {
        let i = self.slot(address)?;
        self.cells[i] = value;
        Ok(())
    }
}

impl From<Vec<i64>> for Memory {
    fn from(cells: Vec<i64>) -> Self {
        Self { cells }
    }
}

impl FromIterator<i64> for Memory {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Memory {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(&self.cells).finish()
    }
}

/// Renders the cells in the same comma-separated form they are parsed from
impl fmt::Display for Memory {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.cells.iter().join(","))
    }
}
