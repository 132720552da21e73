//! Binary matrices and the wildcard templates they are expanded from.
//!
//! A [`Pattern`] is a grid over `{0, 1, ?}`. Each `?` is a wildcard that can
//! independently take either bit, so a pattern with `K` wildcards has exactly
//! `2^K` completions, enumerated by [`Pattern::completions`].
//!
//! # Example
//!
//! ```
//! use exhaust_proof::pattern::Pattern;
//!
//! let pattern = Pattern::parse(&["0?", "?1"]).unwrap();
//! let completions: Vec<String> = pattern.completions().map(|m| m.to_string()).collect();
//! assert_eq!(completions, ["00\n01", "01\n01", "00\n11", "01\n11"]);
//! ```

use std::fmt;

use thiserror::Error;

/// Errors produced while parsing a pattern or matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern has no rows")]
    Empty,

    #[error("pattern has no columns")]
    NoColumns,

    #[error("row {row} has length {found}, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("invalid cell {found:?} at row {row}, column {column}")]
    InvalidCell { row: usize, column: usize, found: char },

    #[error("pattern has {0} wildcards, at most 63 are supported")]
    TooManyWildcards(usize),

    #[error("matrix must not contain wildcards, found {0}")]
    Unresolved(usize),
}

/// Largest number of wildcards whose completions can be indexed by a `u64` mask.
pub const MAX_WILDCARDS: usize = 63;

/// A fully resolved binary matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: Vec<Vec<bool>>,
}

impl Matrix {
    /// Parses a matrix from rows of `0`/`1` characters.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, PatternError> {
        let pattern = Pattern::parse(rows)?;
        match pattern.wildcards.len() {
            0 => Ok(pattern.completion(0)),
            k => Err(PatternError::Unresolved(k)),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns the bit at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &bit in row {
                write!(f, "{}", if bit { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

/// A matrix template whose cells are `Some(bit)` or a wildcard (`None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<Vec<Option<bool>>>,
    /// Wildcard positions `(row, col)` in row-major order.
    wildcards: Vec<(usize, usize)>,
}

impl Pattern {
    /// Parses a pattern from rows over `{0, 1, ?}`.
    ///
    /// All rows must have the same, non-zero length.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, PatternError> {
        let first = rows.first().ok_or(PatternError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(PatternError::NoColumns);
        }

        let mut cells = Vec::with_capacity(rows.len());
        let mut wildcards = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(PatternError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            let mut parsed = Vec::with_capacity(width);
            for (column, c) in line.chars().enumerate() {
                let cell = match c {
                    '0' => Some(false),
                    '1' => Some(true),
                    '?' => {
                        wildcards.push((row, column));
                        None
                    }
                    found => return Err(PatternError::InvalidCell { row, column, found }),
                };
                parsed.push(cell);
            }
            cells.push(parsed);
        }

        if wildcards.len() > MAX_WILDCARDS {
            return Err(PatternError::TooManyWildcards(wildcards.len()));
        }

        Ok(Pattern { cells, wildcards })
    }

    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Returns the cell at `(row, col)`, or `None` for a wildcard.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells[row][col]
    }

    /// Wildcard positions in row-major order.
    ///
    /// Bit `i` of a completion mask fills `wildcards()[i]`.
    pub fn wildcards(&self) -> &[(usize, usize)] {
        &self.wildcards
    }

    /// Number of completions, `2^K` for `K` wildcards.
    pub fn num_completions(&self) -> u64 {
        1u64 << self.wildcards.len()
    }

    /// Builds the completion selected by `mask`.
    ///
    /// # Panics
    ///
    /// Panics if `mask` has bits set beyond the number of wildcards.
    pub fn completion(&self, mask: u64) -> Matrix {
        assert!(
            mask < self.num_completions(),
            "Mask {:#b} out of range for {} wildcards",
            mask,
            self.wildcards.len()
        );

        let mut rows: Vec<Vec<bool>> = self
            .cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.unwrap_or(false)).collect())
            .collect();
        for (index, &(row, col)) in self.wildcards.iter().enumerate() {
            rows[row][col] = mask & (1 << index) != 0;
        }
        Matrix { rows }
    }

    /// Returns an iterator over all completions, in increasing mask order.
    pub fn completions(&self) -> Completions<'_> {
        Completions {
            pattern: self,
            next: 0,
            end: self.num_completions(),
        }
    }

    /// Returns true if `matrix` agrees with every fixed cell of the pattern.
    pub fn matches(&self, matrix: &Matrix) -> bool {
        matrix.num_rows() == self.num_rows()
            && matrix.num_cols() == self.num_cols()
            && self.cells.iter().zip(matrix.rows()).all(|(cells, bits)| {
                cells
                    .iter()
                    .zip(bits)
                    .all(|(cell, &bit)| cell.map_or(true, |c| c == bit))
            })
    }

    /// Recovers the mask that produced `matrix` from its wildcard cells.
    pub fn mask_of(&self, matrix: &Matrix) -> u64 {
        self.wildcards
            .iter()
            .enumerate()
            .filter(|&(_, &(row, col))| matrix.get(row, col))
            .fold(0, |mask, (index, _)| mask | (1 << index))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                let c = match cell {
                    Some(false) => '0',
                    Some(true) => '1',
                    None => '?',
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the completions of a [`Pattern`].
pub struct Completions<'a> {
    pattern: &'a Pattern,
    next: u64,
    end: u64,
}

impl Iterator for Completions<'_> {
    type Item = Matrix;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let matrix = self.pattern.completion(self.next);
        self.next += 1;
        Some(matrix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Completions<'_> {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    use test_log::test;

    #[test]
    fn test_parse_matrix() {
        let m = Matrix::parse(&["010", "101"]).unwrap();
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_cols(), 3);
        assert!(!m.get(0, 0));
        assert!(m.get(0, 1));
        assert_eq!(m.to_string(), "010\n101");
    }

    #[test]
    fn test_parse_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(Pattern::parse(&empty), Err(PatternError::Empty));
        assert_eq!(Pattern::parse(&[""]), Err(PatternError::NoColumns));
        assert_eq!(
            Pattern::parse(&["01?", "01"]),
            Err(PatternError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Pattern::parse(&["01", "0x"]),
            Err(PatternError::InvalidCell {
                row: 1,
                column: 1,
                found: 'x'
            })
        );
        assert_eq!(Matrix::parse(&["0?", "?1"]), Err(PatternError::Unresolved(2)));

        let wide = "?".repeat(64);
        assert_eq!(Pattern::parse(&[wide]), Err(PatternError::TooManyWildcards(64)));
    }

    #[test]
    fn test_no_wildcards() {
        let p = Pattern::parse(&["01", "10"]).unwrap();
        let all: Vec<Matrix> = p.completions().collect();
        assert_eq!(all, vec![Matrix::parse(&["01", "10"]).unwrap()]);
    }

    #[test]
    fn test_wildcard_order() {
        let p = Pattern::parse(&["?0", "1?"]).unwrap();
        assert_eq!(p.wildcards(), &[(0, 0), (1, 1)]);
        let all: Vec<String> = p.completions().map(|m| m.to_string()).collect();
        assert_eq!(all, ["00\n10", "10\n10", "00\n11", "10\n11"]);
    }

    #[test]
    fn test_completions_properties() {
        let p = Pattern::parse(&["01?1?", "10?0?", "?01?1", "?10?0"]).unwrap();
        assert_eq!(p.wildcards().len(), 8);
        assert_eq!(p.num_completions(), 256);

        let completions = p.completions();
        assert_eq!(completions.len(), 256);

        let mut seen = HashSet::new();
        for (mask, m) in p.completions().enumerate() {
            assert!(p.matches(&m));
            assert_eq!(p.mask_of(&m), mask as u64);
            assert!(seen.insert(m));
        }
        assert_eq!(seen.len(), 256);
    }

    #[test]
    fn test_matches_rejects_fixed_cell_mismatch() {
        let p = Pattern::parse(&["0?", "1?"]).unwrap();
        assert!(p.matches(&Matrix::parse(&["01", "10"]).unwrap()));
        assert!(!p.matches(&Matrix::parse(&["11", "10"]).unwrap()));
        assert!(!p.matches(&Matrix::parse(&["01"]).unwrap()));
    }

    #[test]
    fn test_pattern_display() {
        let p = Pattern::parse(&["01?", "?10"]).unwrap();
        assert_eq!(p.to_string(), "01?/?10");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_completion_mask_out_of_range() {
        let p = Pattern::parse(&["0?"]).unwrap();
        p.completion(2);
    }
}
