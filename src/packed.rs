//! Dynamically resizable boolean vector packed into byte-wide words.
//!
//! # Layout
//!
//! Logical bit `i` lives at bit `i % 8` (LSB-first) of byte `i / 8`.
//! The backing buffer always holds exactly `ceil(occupied / 8)` bytes:
//! storage shrinks as elements are removed and is dropped entirely when
//! the vector becomes empty. Bits at positions `>= occupied` within the
//! last byte are kept cleared so that equal vectors have equal storage.
//!
//! All mutating operations validate their arguments before touching the
//! buffer: a call that returns an error leaves the vector exactly as it
//! was.

use crate::error::{Error, Result};

/// Number of logical bits per storage word.
const WORD_BITS: usize = 8;

/// A growable sequence of booleans stored one bit each.
#[derive(Clone, Default)]
pub struct PackedBoolVec {
    /// Number of logical booleans stored; the authoritative length.
    occupied: usize,
    /// Backing words, always exactly `occupied.div_ceil(8)` long.
    data: Vec<u8>,
}

impl std::fmt::Debug for PackedBoolVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ones: usize = self.data.iter().map(|w| w.count_ones() as usize).sum();
        f.debug_struct("PackedBoolVec")
            .field("len", &self.occupied)
            .field("ones", &ones)
            .finish()
    }
}

impl PackedBoolVec {
    /// Create a new, empty vector. Allocates nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a logical index to its (word, bit offset) pair.
    fn locate(index: usize) -> (usize, u32) {
        (index / WORD_BITS, (index % WORD_BITS) as u32)
    }

    /// Resize the backing buffer to hold exactly `count` logical bits.
    ///
    /// `count == 0` clears storage outright. Growth zero-fills new
    /// words, shrinking truncates from the tail; bit content is never
    /// preserved beyond what truncation and zero-fill naturally do.
    fn ensure_size(&mut self, count: usize) {
        if count == 0 {
            self.data.clear();
            return;
        }
        self.data.resize(count.div_ceil(WORD_BITS), 0);
    }

    /// Read the bit at `index`. Caller must have validated the index.
    fn bit(&self, index: usize) -> bool {
        let (word, offset) = Self::locate(index);
        (self.data[word] >> offset) & 1 != 0
    }

    /// Write the bit at `index`. Caller must have validated the index.
    fn set_bit(&mut self, index: usize, value: bool) {
        let (word, offset) = Self::locate(index);
        if value {
            self.data[word] |= 1 << offset;
        } else {
            self.data[word] &= !(1 << offset);
        }
    }

    /// Append a single boolean to the logical tail.
    ///
    /// Fails with [`Error::CapacityExceeded`] if the occupancy counter
    /// is already saturated.
    pub fn push(&mut self, value: bool) -> Result<()> {
        if self.occupied == usize::MAX {
            return Err(Error::CapacityExceeded);
        }
        self.ensure_size(self.occupied + 1);
        self.set_bit(self.occupied, value);
        self.occupied += 1;
        Ok(())
    }

    /// Append a batch of booleans in order.
    ///
    /// Storage grows once for the whole batch. Fails with
    /// [`Error::CapacityExceeded`] and no mutation if the resulting
    /// occupancy would overflow.
    pub fn push_all(&mut self, values: &[bool]) -> Result<()> {
        let new_count = self
            .occupied
            .checked_add(values.len())
            .ok_or(Error::CapacityExceeded)?;
        self.ensure_size(new_count);
        for &value in values {
            self.set_bit(self.occupied, value);
            self.occupied += 1;
        }
        Ok(())
    }

    /// Remove the last `n` booleans, returning them in ascending
    /// original index order (not reverse pop order).
    ///
    /// Fails with [`Error::InsufficientElements`] when `n` exceeds the
    /// current length, leaving the vector unmodified.
    pub fn pop(&mut self, n: usize) -> Result<Vec<bool>> {
        if n > self.occupied {
            return Err(Error::InsufficientElements {
                requested: n,
                available: self.occupied,
            });
        }
        let start = self.occupied - n;
        let tail: Vec<bool> = (start..self.occupied).map(|i| self.bit(i)).collect();
        for i in start..self.occupied {
            self.set_bit(i, false);
        }
        self.occupied = start;
        self.ensure_size(start);
        Ok(tail)
    }

    /// Remove and return the last boolean.
    ///
    /// Fails with [`Error::InsufficientElements`] on an empty vector.
    pub fn pop_one(&mut self) -> Result<bool> {
        if self.occupied == 0 {
            return Err(Error::InsufficientElements {
                requested: 1,
                available: 0,
            });
        }
        let value = self.bit(self.occupied - 1);
        self.set_bit(self.occupied - 1, false);
        self.occupied -= 1;
        self.ensure_size(self.occupied);
        Ok(value)
    }

    /// Return the boolean at `index`.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] when `index` is at or
    /// past the current length.
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.occupied {
            return Err(Error::IndexOutOfBounds(index));
        }
        Ok(self.bit(index))
    }

    /// Return the booleans at each requested index, in request order.
    ///
    /// The first invalid index aborts the whole call with
    /// [`Error::IndexOutOfBounds`]; no partial result is returned.
    pub fn get_many(&self, indices: &[usize]) -> Result<Vec<bool>> {
        let mut out = Vec::with_capacity(indices.len());
        for &index in indices {
            out.push(self.get(index)?);
        }
        Ok(out)
    }

    /// Overwrite the boolean at an existing logical index.
    ///
    /// The length is unchanged; exactly one bit flips or stays. Fails
    /// with [`Error::IndexOutOfBounds`] when `index >= len()`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        if index >= self.occupied {
            return Err(Error::IndexOutOfBounds(index));
        }
        self.set_bit(index, value);
        Ok(())
    }

    /// Insert a batch of booleans starting at `index`, shifting every
    /// element at `[index, len())` right by `values.len()`.
    ///
    /// `index == len()` is a plain append. The final content equals
    /// `original[..index] ++ values ++ original[index..]`. Fails with
    /// [`Error::IndexOutOfBounds`] when `index > len()`, with no
    /// modification.
    pub fn insert(&mut self, index: usize, values: &[bool]) -> Result<()> {
        if index > self.occupied {
            return Err(Error::IndexOutOfBounds(index));
        }
        let new_count = self
            .occupied
            .checked_add(values.len())
            .ok_or(Error::CapacityExceeded)?;
        if values.is_empty() {
            return Ok(());
        }
        self.ensure_size(new_count);
        let old_count = self.occupied;
        self.occupied = new_count;
        for i in (index..old_count).rev() {
            let shifted = self.bit(i);
            self.set_bit(i + values.len(), shifted);
        }
        for (offset, &value) in values.iter().enumerate() {
            self.set_bit(index + offset, value);
        }
        Ok(())
    }

    /// Delete the booleans at the given logical indices, which need
    /// not be sorted or unique (duplicates each count).
    ///
    /// Indices are processed in the order supplied; after `k` earlier
    /// deletions in the batch, each target index is adjusted by `-k`
    /// before the element at the adjusted position is removed by
    /// shifting all following elements left by one.
    ///
    /// Every index is validated before any mutation: each must be
    /// strictly below the current length, and an index smaller than
    /// the number of indices preceding it in the batch (which would
    /// drive the `-k` adjustment below zero) is rejected too. Any
    /// invalid index fails the whole call with
    /// [`Error::IndexOutOfBounds`] and no modification at all.
    pub fn remove_many(&mut self, indices: &[usize]) -> Result<()> {
        for (prior, &index) in indices.iter().enumerate() {
            if index >= self.occupied || index < prior {
                return Err(Error::IndexOutOfBounds(index));
            }
        }
        for (prior, &index) in indices.iter().enumerate() {
            let target = index - prior;
            let live = self.occupied - prior;
            for i in target..live - 1 {
                let shifted = self.bit(i + 1);
                self.set_bit(i, shifted);
            }
            self.set_bit(live - 1, false);
        }
        self.occupied -= indices.len();
        self.ensure_size(self.occupied);
        Ok(())
    }

    /// Delete the boolean at a single logical index.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.remove_many(&[index])
    }

    /// Delete the contiguous index range `[index, index + count)`.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] when the range end lies
    /// past the current length.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        let end = index
            .checked_add(count)
            .ok_or(Error::IndexOutOfBounds(index))?;
        if end > self.occupied {
            return Err(Error::IndexOutOfBounds(index));
        }
        let indices: Vec<usize> = (index..end).collect();
        self.remove_many(&indices)
    }

    /// Reset to the empty state, dropping all storage.
    pub fn clear(&mut self) {
        self.occupied = 0;
        self.ensure_size(0);
    }

    /// Materialize a snapshot of every stored boolean in index order.
    ///
    /// The returned vector is freshly allocated and does not alias the
    /// internal storage.
    pub fn to_vec(&self) -> Vec<bool> {
        (0..self.occupied).map(|i| self.bit(i)).collect()
    }

    /// Return the number of stored booleans.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Return true if no booleans are stored.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Storage footprint in bytes of the backing word sequence only.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

impl FromIterator<bool> for PackedBoolVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut v = Self::default();
        for value in iter {
            // Occupancy cannot saturate before allocation fails, so the
            // fallible push is not needed here.
            v.ensure_size(v.occupied + 1);
            v.set_bit(v.occupied, value);
            v.occupied += 1;
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[bool]) -> PackedBoolVec {
        let mut v = PackedBoolVec::new();
        v.push_all(values).unwrap();
        v
    }

    #[test]
    fn test_push_word_growth() {
        // (pushes, expected backing words)
        let cases = [
            (0, 0),
            (1, 1),
            (2, 1),
            (7, 1),
            (8, 1),
            (9, 2),
            (15, 2),
            (16, 2),
            (17, 3),
            (64, 8),
        ];
        for (pushes, words) in cases {
            let mut v = PackedBoolVec::new();
            for _ in 0..pushes {
                v.push(true).unwrap();
            }
            assert_eq!(v.len(), pushes, "length after {pushes} pushes");
            assert_eq!(v.size_bytes(), words, "words after {pushes} pushes");
        }
    }

    #[test]
    fn test_push_all_grows_once_and_round_trips() {
        let values = [true, false, true, true, false, false, true, false, true];
        let v = filled(&values);
        assert_eq!(v.len(), 9);
        assert_eq!(v.size_bytes(), 2);
        assert_eq!(v.to_vec(), values);
    }

    #[test]
    fn test_pop_returns_tail_in_original_order() {
        let mut v = filled(&[true, false, true]);
        assert_eq!(v.pop(2).unwrap(), vec![false, true]);
        assert_eq!(v.to_vec(), vec![true]);
    }

    #[test]
    fn test_pop_shrinks_storage() {
        // (pushes, pops, expected words afterwards)
        let cases = [(1, 1, 0), (2, 1, 1), (9, 1, 1), (8, 8, 0), (9, 8, 1)];
        for (pushes, pops, words) in cases {
            let mut v = PackedBoolVec::new();
            for _ in 0..pushes {
                v.push(true).unwrap();
            }
            assert_eq!(v.pop(pops).unwrap().len(), pops);
            assert_eq!(v.len(), pushes - pops);
            assert_eq!(v.size_bytes(), words, "case ({pushes}, {pops})");
        }
    }

    #[test]
    fn test_pop_too_many_fails_unmodified() {
        let mut v = filled(&[true, false]);
        let err = v.pop(3).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientElements {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(v.to_vec(), vec![true, false]);
        assert_eq!(v.size_bytes(), 1);
    }

    #[test]
    fn test_empty_vector_failures() {
        let mut v = PackedBoolVec::new();
        assert!(matches!(
            v.pop(1),
            Err(Error::InsufficientElements { .. })
        ));
        assert!(matches!(v.pop_one(), Err(Error::InsufficientElements { .. })));
        assert_eq!(v.get(0), Err(Error::IndexOutOfBounds(0)));
        assert!(v.is_empty());
    }

    #[test]
    fn test_push_pop_one_restores_state() {
        let mut v = filled(&[false, true, false]);
        let before = v.to_vec();
        let size = v.size_bytes();
        v.push(true).unwrap();
        assert_eq!(v.pop_one().unwrap(), true);
        assert_eq!(v.to_vec(), before);
        assert_eq!(v.size_bytes(), size);
    }

    #[test]
    fn test_set_flips_only_target_bit() {
        let mut v = filled(&[false, false, false, false]);
        v.set(2, true).unwrap();
        assert_eq!(v.to_vec(), vec![false, false, true, false]);
        v.set(2, false).unwrap();
        assert_eq!(v.to_vec(), vec![false; 4]);
        assert_eq!(v.set(4, true), Err(Error::IndexOutOfBounds(4)));
    }

    #[test]
    fn test_get_many_order_and_abort() {
        let v = filled(&[true, false, true]);
        assert_eq!(
            v.get_many(&[2, 0, 1, 0]).unwrap(),
            vec![true, true, false, true]
        );
        assert_eq!(v.get_many(&[0, 3, 1]), Err(Error::IndexOutOfBounds(3)));
    }

    #[test]
    fn test_insert_middle() {
        let mut v = filled(&[false, false]);
        v.insert(1, &[true, true]).unwrap();
        assert_eq!(v.to_vec(), vec![false, true, true, false]);
    }

    #[test]
    fn test_insert_bounds() {
        let mut v = filled(&[true]);
        v.insert(1, &[false]).unwrap(); // append position
        v.insert(0, &[false]).unwrap();
        assert_eq!(v.to_vec(), vec![false, true, false]);
        assert_eq!(v.insert(4, &[true]), Err(Error::IndexOutOfBounds(4)));
        assert_eq!(v.to_vec(), vec![false, true, false]);
    }

    #[test]
    fn test_insert_across_word_boundary() {
        let mut v = filled(&[true; 7]);
        v.insert(3, &[false, false, false]).unwrap();
        assert_eq!(v.len(), 10);
        assert_eq!(v.size_bytes(), 2);
        let mut expected = vec![true; 3];
        expected.extend([false; 3]);
        expected.extend([true; 4]);
        assert_eq!(v.to_vec(), expected);
    }

    #[test]
    fn test_remove_many_sequential_adjustment() {
        let mut v = filled(&[false, true, true, false, true]);
        v.remove_many(&[1, 2]).unwrap();
        assert_eq!(v.to_vec(), vec![false, false, true]);
        v.remove(2).unwrap();
        assert_eq!(v.to_vec(), vec![false, false]);
    }

    #[test]
    fn test_remove_many_duplicates_count_individually() {
        let mut v = filled(&[true, false, true, false]);
        // The repeated index resolves against the shrinking vector:
        // index 2, then adjusted index 1, deleting two elements.
        v.remove_many(&[2, 2]).unwrap();
        assert_eq!(v.to_vec(), vec![true, false]);
    }

    #[test]
    fn test_remove_many_rejects_len_index() {
        let mut v = filled(&[true, false]);
        assert_eq!(v.remove_many(&[2]), Err(Error::IndexOutOfBounds(2)));
        assert_eq!(v.to_vec(), vec![true, false]);
    }

    #[test]
    fn test_remove_many_atomic_on_late_invalid_index() {
        let mut v = filled(&[true, false, true]);
        assert_eq!(v.remove_many(&[0, 5]), Err(Error::IndexOutOfBounds(5)));
        assert_eq!(v.to_vec(), vec![true, false, true]);
        assert_eq!(v.size_bytes(), 1);
    }

    #[test]
    fn test_remove_many_rejects_underflowing_adjustment() {
        let mut v = filled(&[true, false, true]);
        // Second index adjusts to -1 under the sequential -k rule.
        assert_eq!(v.remove_many(&[2, 0]), Err(Error::IndexOutOfBounds(0)));
        assert_eq!(v.to_vec(), vec![true, false, true]);
    }

    #[test]
    fn test_remove_range() {
        let mut v = filled(&[true, false, true, true, false]);
        v.remove_range(1, 3).unwrap();
        assert_eq!(v.to_vec(), vec![true, false]);
        assert_eq!(v.remove_range(1, 2), Err(Error::IndexOutOfBounds(1)));
        assert_eq!(v.to_vec(), vec![true, false]);
        v.remove_range(0, 2).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.size_bytes(), 0);
    }

    #[test]
    fn test_remove_range_undoes_insert() {
        let original = [true, false, false, true, true];
        let mut v = filled(&original);
        v.insert(2, &[false, true, false]).unwrap();
        v.remove_range(2, 3).unwrap();
        assert_eq!(v.to_vec(), original);
        assert_eq!(v.size_bytes(), 1);
    }

    #[test]
    fn test_clear() {
        let mut v = filled(&[true; 20]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.size_bytes(), 0);
        assert_eq!(v.to_vec(), Vec::<bool>::new());
    }

    #[test]
    fn test_from_iterator() {
        let v: PackedBoolVec = (0..10).map(|i| i % 3 == 0).collect();
        assert_eq!(v.len(), 10);
        assert_eq!(v.size_bytes(), 2);
        let expected: Vec<bool> = (0..10).map(|i| i % 3 == 0).collect();
        assert_eq!(v.to_vec(), expected);
    }

    #[test]
    fn test_debug_reports_len_and_ones() {
        let v = filled(&[true, true, false]);
        assert_eq!(format!("{v:?}"), "PackedBoolVec { len: 3, ones: 2 }");
    }
}
