use crate::artifacts::diff::operation::{DiffAlgorithm, DiffOperation};
use derive_new::new;

/// Longest-common-subsequence lengths for every pair of line prefixes.
///
/// `get(i, j)` is the LCS length of `a[..i]` and `b[..j]`. The table only
/// covers the lines in front of the common trailing run (see [`LcsDiff`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn new(rows: usize, cols: usize) -> Self {
        LcsTable {
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// LCS line aligner.
///
/// Backtracking walks from `(|a|, |b|)` to the origin and prefers, in order:
/// a diagonal move over equal lines, an insertion when
/// `table[i][j-1] >= table[i-1][j]`, and a deletion otherwise. Equal lines at
/// the end of both inputs are always consumed by the diagonal rule before the
/// table is consulted, so the table is built only for the lines before that
/// trailing run; the result is the same as with the full table.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq> LcsDiff<'_, T> {
    fn common_suffix_len(&self) -> usize {
        self.a
            .iter()
            .rev()
            .zip(self.b.iter().rev())
            .take_while(|(x, y)| x == y)
            .count()
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Table = LcsTable;
    type EditPath = Vec<(usize, usize, usize, usize)>;
    type EditScript = Vec<DiffOperation<T>>;
    type Output = String;

    fn compute_table(&self) -> Self::Table {
        let suffix = self.common_suffix_len();
        let (n, m) = (self.a.len() - suffix, self.b.len() - suffix);

        let mut table = LcsTable::new(n + 1, m + 1);
        for i in 1..=n {
            for j in 1..=m {
                let value = if self.a[i - 1] == self.b[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.set(i, j, value);
            }
        }

        table
    }

    fn backtrack(&self) -> Self::EditPath {
        let table = self.compute_table();
        let (mut x, mut y) = (self.a.len(), self.b.len());
        let mut edit_path = Vec::with_capacity(x + y);

        while x > 0 || y > 0 {
            if x > 0 && y > 0 && self.a[x - 1] == self.b[y - 1] {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            } else if y > 0 && (x == 0 || table.get(x, y - 1) >= table.get(x - 1, y)) {
                edit_path.push((x, y - 1, x, y));
                y -= 1;
            } else {
                edit_path.push((x - 1, y, x, y));
                x -= 1;
            }
        }

        edit_path
    }

    fn diff(&self) -> Self::EditScript {
        let mut diff = self
            .backtrack()
            .into_iter()
            .map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    DiffOperation::Added {
                        line: self.b[prev_y].clone(),
                    }
                } else if y == prev_y {
                    DiffOperation::Removed {
                        line: self.a[prev_x].clone(),
                    }
                } else {
                    DiffOperation::Unchanged {
                        line: self.b[prev_y].clone(),
                    }
                }
            })
            .collect::<Vec<_>>();

        diff.reverse();
        diff
    }
}

/// Aligns two line sequences into unchanged/added/removed operations.
pub fn align<T: Eq + Clone>(old: &[T], new: &[T]) -> Vec<DiffOperation<T>> {
    LcsDiff::new(old, new).diff()
}
