//! Jagged two-dimensional tables composed from growable sequences.
//!
//! A [`JaggedTable`] is an outer sequence of inner sequences, each row
//! allocated with its own length and filled cell by cell. It adds no new
//! storage primitive; every row is an ordinary [`GrowableSequence`].

use std::fmt;

use runway_core::SequenceError;

use crate::sequence::GrowableSequence;

/// Rows of independent lengths, addressed by `(row, column)`.
pub struct JaggedTable<T> {
    rows: GrowableSequence<GrowableSequence<T>>,
}

impl<T: Clone + Default> JaggedTable<T> {
    /// Allocate one row per entry of `row_lengths` and fill every cell with
    /// `fill(row, column)`.
    pub fn from_fn<F>(row_lengths: &[usize], mut fill: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut rows: GrowableSequence<GrowableSequence<T>> =
            GrowableSequence::with_len(row_lengths.len());
        {
            let mut slots = rows.as_mut_slice();
            for (i, (slot, &len)) in slots.iter_mut().zip(row_lengths).enumerate() {
                let mut row = GrowableSequence::with_len(len);
                for (j, cell) in row.as_mut_slice().iter_mut().enumerate() {
                    *cell = fill(i, j);
                }
                *slot = row;
            }
        }
        Self { rows }
    }

    /// `n` rows where row `i` has `i + 1` cells.
    pub fn triangular<F>(n: usize, fill: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let lengths: Vec<usize> = (1..=n).collect();
        Self::from_fn(&lengths, fill)
    }

    /// Read cell `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<T, SequenceError> {
        self.row(row)?.get(column)
    }

    /// Overwrite cell `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), SequenceError> {
        self.row(row)?.set(column, value)
    }

    /// Copy every row out.
    pub fn to_nested_vec(&self) -> Vec<Vec<T>> {
        self.rows.as_slice().iter().map(|r| r.to_vec()).collect()
    }
}

impl<T> JaggedTable<T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// A header sharing row `row`'s storage.
    ///
    /// Writes through the returned sequence are visible in the table until
    /// the returned sequence reallocates.
    pub fn row(&self, row: usize) -> Result<GrowableSequence<T>, SequenceError> {
        self.rows.get(row)
    }

    /// Number of cells in row `row`.
    pub fn row_len(&self, row: usize) -> Result<usize, SequenceError> {
        Ok(self.row(row)?.len())
    }
}

impl<T: fmt::Display> fmt::Display for JaggedTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rows, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for JaggedTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows.as_slice();
        let mut list = f.debug_list();
        for row in rows.iter() {
            list.entry(&&*row.as_slice());
        }
        list.finish()
    }
}
