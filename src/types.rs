//! Directed column-pair edges and the normalized equalities between them.
//!
//! Columns are 0-indexed internally. The `Display` impls print the 1-indexed
//! form used in proof reports.

use std::fmt;

/// A directed relation `from -> to` between two matrix columns.
///
/// Edges `(i, j)` and `(j, i)` are distinct values; each is the
/// [reverse][Edge::reversed] of the other.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub const fn new(from: usize, to: usize) -> Self {
        Edge { from, to }
    }

    /// Returns the complementary edge `to -> from`.
    pub const fn reversed(self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from + 1, self.to + 1)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Edge::new(from, to)
    }
}

/// An equality between two edges pointing into the same pivot column.
///
/// # Invariants
///
/// - `first.to == second.to`
/// - `first.from < second.from`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Equality {
    first: Edge,
    second: Edge,
}

impl Equality {
    /// Creates the normalized equality `a = b`.
    ///
    /// If both edges leave the same column, both are reversed so that they
    /// enter it instead. The edge with the smaller `from` goes first.
    ///
    /// # Panics
    ///
    /// Panics if the edges do not share a pivot column, or if they are the
    /// same edge.
    pub fn new(a: Edge, b: Edge) -> Self {
        let (mut first, mut second) = (a, b);
        if first.from == second.from {
            first = first.reversed();
            second = second.reversed();
        }
        assert_eq!(first.to, second.to, "Edges {} and {} do not share a pivot column", a, b);
        assert_ne!(first.from, second.from, "Edges {} and {} are not distinct", a, b);
        if first.from > second.from {
            std::mem::swap(&mut first, &mut second);
        }
        Equality { first, second }
    }

    pub fn first(&self) -> Edge {
        self.first
    }

    pub fn second(&self) -> Edge {
        self.second
    }

    /// The column both edges point into.
    pub fn pivot(&self) -> usize {
        self.first.to
    }
}

impl fmt::Display for Equality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.first, self.second)
    }
}
