use crate::support::configuration::{MAX_MATRIX_CELLS, SELECTED_CHAR, UNSELECTED_CHAR};
use crate::support::error::{Result, bounds_error, check_index, construction_error};
use bitvec::prelude::*;
use rand::Rng;
use std::fmt;

/// Fixed-size boolean matrix stored as one flat bit sequence
///
/// Cell `(i, j)` lives at linear index `i * cols + j`. External consumers may
/// decode a decision vector positionally, so this layout is part of the
/// public contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BitMatrixRecord"))]
pub struct BitMatrix {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl BitMatrix {
    /// Create a matrix with every cell cleared
    ///
    /// # Errors
    ///
    /// Returns a construction error if `rows * cols` overflows or exceeds
    /// [`MAX_MATRIX_CELLS`]
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let cells = rows
            .checked_mul(cols)
            .filter(|&cells| cells <= MAX_MATRIX_CELLS)
            .ok_or_else(|| {
                construction_error(
                    "dimensions",
                    &format!("{rows}x{cols}"),
                    &format!("matrix may hold at most {MAX_MATRIX_CELLS} cells"),
                )
            })?;

        Ok(Self {
            bits: bitvec![0; cells],
            rows,
            cols,
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test if the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Linear index of cell `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `i >= rows` or `j >= cols`
    pub fn index(&self, i: usize, j: usize) -> Result<usize> {
        let row = check_index("row", i, self.rows)?;
        let col = check_index("column", j, self.cols)?;
        Ok(row * self.cols + col)
    }

    /// Read cell `(i, j)`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if the cell is outside the matrix
    pub fn get(&self, i: usize, j: usize) -> Result<bool> {
        let index = self.index(i, j)?;
        Ok(self.bits.get(index).as_deref() == Some(&true))
    }

    /// Write cell `(i, j)` and return its previous value
    ///
    /// # Errors
    ///
    /// Returns a bounds error if the cell is outside the matrix
    pub fn replace(&mut self, i: usize, j: usize, value: bool) -> Result<bool> {
        let index = self.index(i, j)?;
        Ok(self.bits.replace(index, value))
    }

    /// Write a cell already known to be in range
    ///
    /// Callers iterate over valid ranges only. An out-of-range cell is a
    /// logic error: it panics in debug builds and is skipped in release.
    pub(crate) fn write(&mut self, i: usize, j: usize, value: bool) {
        debug_assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        if let Ok(index) = self.index(i, j) {
            self.bits.set(index, value);
        }
    }

    /// Row `i` as a bit slice of length `cols`
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `i >= rows`
    pub fn row(&self, i: usize) -> Result<&BitSlice> {
        let start = check_index("row", i, self.rows)? * self.cols;
        self.bits
            .get(start..start + self.cols)
            .ok_or_else(|| bounds_error("row", i, self.rows))
    }

    /// Number of set cells
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Flat view of every cell in row-major order
    pub fn as_bitslice(&self) -> &BitSlice {
        &self.bits
    }

    /// Replace every cell with an independent fair coin flip
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for index in 0..self.bits.len() {
            self.bits.set(index, rng.random::<bool>());
        }
    }
}

/// Serialized form, checked against the declared dimensions before use
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BitMatrixRecord {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<BitMatrixRecord> for BitMatrix {
    type Error = crate::support::error::DecisionError;

    fn try_from(record: BitMatrixRecord) -> Result<Self> {
        let mut matrix = Self::new(record.rows, record.cols)?;
        if record.bits.len() != matrix.len() {
            return Err(construction_error(
                "bits",
                &record.bits.len(),
                &format!(
                    "a {}x{} matrix needs exactly {} cells",
                    record.rows,
                    record.cols,
                    matrix.len()
                ),
            ));
        }
        matrix.bits.copy_from_bitslice(&record.bits);
        Ok(matrix)
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.bits)
    }
}

/// Render a bit sequence as `0`/`1` characters in index order
pub(crate) fn write_bits(f: &mut fmt::Formatter<'_>, bits: &BitSlice) -> fmt::Result {
    for bit in bits {
        let symbol = if *bit { SELECTED_CHAR } else { UNSELECTED_CHAR };
        fmt::Write::write_char(f, symbol)?;
    }
    Ok(())
}
