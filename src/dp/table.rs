//! DP table storage.
//!
//! Values live in two rolling rows; the take/skip decision of every cell is
//! kept in a row-major bit arena addressed by `(item, capacity_unit)`. The
//! back-trace only needs the decisions, so memory is one bit per cell plus
//! two value rows.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::discretize::DiscreteItem;

/// Cells per arena word. Also the unit of parallel work within a row.
const BLOCK: usize = 64;

/// Row-major bit arena of take decisions.
#[derive(Debug, Clone)]
pub(crate) struct ChoiceArena {
    words_per_row: usize,
    bits: Vec<u64>,
}

impl ChoiceArena {
    /// Arena for `rows` items over `width` capacity units (`0..width`).
    pub(crate) fn new(rows: usize, width: usize) -> Self {
        let words_per_row = width.div_ceil(BLOCK);
        Self {
            words_per_row,
            bits: vec![0; rows * words_per_row],
        }
    }

    fn row_mut(&mut self, row: usize) -> &mut [u64] {
        let start = row * self.words_per_row;
        &mut self.bits[start..start + self.words_per_row]
    }

    /// Whether item `row` was taken at capacity `unit`.
    #[inline]
    pub(crate) fn is_taken(&self, row: usize, unit: usize) -> bool {
        let word = self.bits[row * self.words_per_row + unit / BLOCK];
        (word >> (unit % BLOCK)) & 1 == 1
    }
}

/// Fills one block of `curr` starting at capacity unit `start`.
///
/// The item is taken only when that is strictly better, so ties keep the
/// exclusion branch.
fn fill_block(prev: &[f64], curr: &mut [f64], word: &mut u64, start: usize, weight: usize, value: f64) {
    let mut bits = 0u64;
    for (offset, cell) in curr.iter_mut().enumerate() {
        let c = start + offset;
        let skip = prev[c];
        *cell = skip;
        if c >= weight {
            let take = prev[c - weight] + value;
            if take > skip {
                *cell = take;
                bits |= 1 << offset;
            }
        }
    }
    *word = bits;
}

/// Computes `curr` from `prev` for one item and records its decisions.
fn fill_row(
    prev: &[f64],
    curr: &mut [f64],
    words: &mut [u64],
    weight: usize,
    value: f64,
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            curr.par_chunks_mut(BLOCK)
                .zip(words.par_iter_mut())
                .enumerate()
                .for_each(|(k, (chunk, word))| {
                    fill_block(prev, chunk, word, k * BLOCK, weight, value)
                });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    curr.chunks_mut(BLOCK)
        .zip(words.iter_mut())
        .enumerate()
        .for_each(|(k, (chunk, word))| fill_block(prev, chunk, word, k * BLOCK, weight, value));
}

/// Bytes the DP table needs for `rows` cases over `capacity_units`: the
/// decision arena plus two `f64` value rows.
///
/// ```
/// use u_casepack::dp::table_bytes;
///
/// // 3 cases, 50 units: one arena word per row, two rows of 51 values.
/// assert_eq!(table_bytes(3, 50), 3 * 8 + 2 * 51 * 8);
/// ```
pub fn table_bytes(rows: usize, capacity_units: u64) -> u128 {
    let width = u128::from(capacity_units) + 1;
    let words_per_row = width.div_ceil(BLOCK as u128);
    let arena = rows as u128 * words_per_row * 8;
    let value_rows = 2 * width * 8;
    arena + value_rows
}

/// Filled DP table: the optimum and the decision arena.
#[derive(Debug, Clone)]
pub(crate) struct FilledTable {
    pub(crate) best_value: f64,
    pub(crate) arena: ChoiceArena,
}

/// Fills the table row by row.
///
/// `should_stop` is polled before each row; returning `true` aborts with
/// `None`.
pub(crate) fn fill_table(
    items: &[DiscreteItem],
    width: usize,
    parallel: bool,
    mut should_stop: impl FnMut() -> bool,
) -> Option<FilledTable> {
    let mut arena = ChoiceArena::new(items.len(), width);
    let mut prev = vec![0.0f64; width];
    let mut curr = vec![0.0f64; width];

    for (row, item) in items.iter().enumerate() {
        if should_stop() {
            return None;
        }
        // weight_units <= capacity_units < width, checked by the caller
        let weight = item.weight_units as usize;
        fill_row(&prev, &mut curr, arena.row_mut(row), weight, item.value, parallel);
        std::mem::swap(&mut prev, &mut curr);
    }

    let best_value = prev.last().copied().unwrap_or(0.0);
    Some(FilledTable { best_value, arena })
}

/// Walks the arena from `(n, capacity_units)` back to row 0.
///
/// Returns item positions (into `items`) in ascending order.
pub(crate) fn backtrace(arena: &ChoiceArena, items: &[DiscreteItem], capacity_units: usize) -> Vec<usize> {
    let mut remaining = capacity_units;
    let mut picked = Vec::new();
    for row in (0..items.len()).rev() {
        if arena.is_taken(row, remaining) {
            picked.push(row);
            remaining -= items[row].weight_units as usize;
        }
    }
    picked.reverse();
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(raw: &[(f64, u64)]) -> Vec<DiscreteItem> {
        raw.iter()
            .enumerate()
            .map(|(i, &(value, weight_units))| DiscreteItem {
                pool_index: i,
                value,
                weight_units,
            })
            .collect()
    }

    #[test]
    fn test_arena_bits() {
        let mut arena = ChoiceArena::new(2, 130);
        assert_eq!(arena.words_per_row, 3);
        arena.row_mut(1)[2] = 1 << 1; // unit 129
        assert!(arena.is_taken(1, 129));
        assert!(!arena.is_taken(1, 128));
        assert!(!arena.is_taken(0, 129));
    }

    #[test]
    fn test_classic_instance() {
        let items = items(&[(60.0, 1), (100.0, 2), (120.0, 3)]);
        let table = fill_table(&items, 6, false, || false).unwrap();
        assert_eq!(table.best_value, 220.0);
        assert_eq!(backtrace(&table.arena, &items, 5), vec![1, 2]);
    }

    #[test]
    fn test_ties_prefer_exclusion() {
        // Two identical items, room for one: the later row must not be
        // taken on a tie, so the earlier one is selected.
        let items = items(&[(10.0, 2), (10.0, 2)]);
        let table = fill_table(&items, 3, false, || false).unwrap();
        assert_eq!(table.best_value, 10.0);
        assert_eq!(backtrace(&table.arena, &items, 2), vec![0]);
    }

    #[test]
    fn test_zero_value_items_never_taken() {
        let items = items(&[(0.0, 1), (5.0, 1)]);
        let table = fill_table(&items, 3, false, || false).unwrap();
        assert_eq!(backtrace(&table.arena, &items, 2), vec![1]);
    }

    #[test]
    fn test_wide_rows_cross_block_boundaries() {
        // 200 units wide forces several arena words per row.
        let items = items(&[(5.0, 70), (7.0, 90), (4.0, 60), (9.0, 130)]);
        let table = fill_table(&items, 201, false, || false).unwrap();
        // pairs within 200: 5+7 (160) = 12, 9+4 (190) = 13, 9+5 (200) = 14;
        // 5+7+4 needs 220
        assert_eq!(table.best_value, 14.0);
        assert_eq!(backtrace(&table.arena, &items, 200), vec![0, 3]);
    }

    #[test]
    fn test_stop_aborts() {
        let items = items(&[(1.0, 1), (1.0, 1)]);
        let mut calls = 0;
        let result = fill_table(&items, 3, false, || {
            calls += 1;
            calls > 1
        });
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_items() {
        let table = fill_table(&[], 4, false, || false).unwrap();
        assert_eq!(table.best_value, 0.0);
        assert!(backtrace(&table.arena, &[], 3).is_empty());
    }

    #[test]
    fn test_table_bytes_counts_value_rows() {
        // A single case over a wide grid is dominated by the value rows.
        let bytes = table_bytes(1, 999_999_999);
        assert_eq!(bytes, 15_625_000 * 8 + 2 * 1_000_000_000 * 8);
        assert!(bytes > 16_000_000_000);
        assert_eq!(table_bytes(0, 0), 16);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let items = items(&[(5.0, 70), (7.0, 90), (4.0, 60), (9.0, 130), (3.0, 10)]);
        let seq = fill_table(&items, 301, false, || false).unwrap();
        let par = fill_table(&items, 301, true, || false).unwrap();
        assert_eq!(seq.best_value, par.best_value);
        assert_eq!(seq.arena.bits, par.arena.bits);
    }
}
