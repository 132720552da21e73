//! Edge-equality graphs of binary matrices.
//!
//! Every ordered pair of distinct columns `(i, j)` is a directed edge. A
//! matrix forces two edges into the same class when two of its rows read
//! `(v, !v, v)` and `(!v, v, !v)` on columns `(i, j, k)`: then `i->j = k->j`
//! and, symmetrically, `j->i = j->k`.
//!
//! Classes are tracked with a [`DisjointSetForest`] over one slot per
//! directed edge. If some edge ends up in the same class as its reverse, the
//! matrix admits no colored graph and [`ComponentsGraph::Contradiction`] is
//! returned. Otherwise the nontrivial classes come in mirrored pairs (a class
//! and the class of all reversed edges), and each pair becomes one color.
//!
//! # Example
//!
//! ```
//! use exhaust_proof::graph::ComponentsGraph;
//! use exhaust_proof::pattern::Matrix;
//! use exhaust_proof::types::{Edge, Equality};
//!
//! let m = Matrix::parse(&["010", "101"]).unwrap();
//! let g = ComponentsGraph::build(&m);
//! assert!(!g.is_contradiction());
//! assert!(g.equalities().contains(&Equality::new(Edge::new(0, 1), Edge::new(2, 1))));
//! assert_eq!(g.num_colors(), 1);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::pattern::Matrix;
use crate::types::{Edge, Equality};
use crate::union_find::DisjointSetForest;

/// Bijection between ordered column pairs `(i, j)`, `i != j`, and slots
/// `0..m*(m-1)`.
///
/// Pairs are numbered by walking `i < j` in row-major order: `(i, j)` gets
/// an even slot and `(j, i)` the odd slot right after it.
#[derive(Debug, Clone)]
pub struct EdgeSlots {
    num_columns: usize,
    slots: Vec<Option<usize>>,
}

impl EdgeSlots {
    pub fn new(num_columns: usize) -> Self {
        let mut slots = vec![None; num_columns * num_columns];
        let mut index = 0;
        for i in 0..num_columns {
            for j in i + 1..num_columns {
                slots[i * num_columns + j] = Some(index);
                slots[j * num_columns + i] = Some(index + 1);
                index += 2;
            }
        }
        Self { num_columns, slots }
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Total number of slots, `m * (m - 1)`.
    pub fn len(&self) -> usize {
        self.num_columns * self.num_columns.saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slot of the directed edge `i -> j`.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either column is out of range.
    pub fn slot(&self, i: usize, j: usize) -> usize {
        assert!(i < self.num_columns && j < self.num_columns, "Edge {}->{} out of range", i, j);
        match self.slots[i * self.num_columns + j] {
            Some(slot) => slot,
            None => panic!("Loop edge {}->{} has no slot", i, j),
        }
    }
}

/// The colored graph derived from one matrix, or the contradiction marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentsGraph {
    Colored {
        num_columns: usize,
        equalities: BTreeSet<Equality>,
        /// Edges of each color, in row-major order.
        colors: Vec<Vec<Edge>>,
        /// Color of each colored edge, keyed by both directions.
        color_of_edge: BTreeMap<Edge, usize>,
    },
    /// Some edge was forced equal to its own reverse.
    Contradiction { equalities: BTreeSet<Equality> },
}

impl ComponentsGraph {
    /// Builds the graph of `matrix`.
    pub fn build(matrix: &Matrix) -> Self {
        let n = matrix.num_rows();
        let m = matrix.num_cols();
        let slots = EdgeSlots::new(m);
        let mut forest = DisjointSetForest::new(slots.len());
        let mut equalities = BTreeSet::new();

        for i in 0..m {
            for j in 0..m {
                for k in i + 1..m {
                    if i == j || j == k {
                        continue;
                    }
                    for a in 0..n {
                        for b in a + 1..n {
                            if !forces_equality(matrix, (a, b), (i, j, k)) {
                                continue;
                            }
                            let joined = forest.join(slots.slot(i, j), slots.slot(k, j));
                            forest.join(slots.slot(j, i), slots.slot(j, k));
                            trace!("rows ({}, {}) on columns ({}, {}, {}): joined = {}", a, b, i, j, k, joined);
                            let eq = Equality::new(Edge::new(i, j), Edge::new(k, j));
                            if equalities.insert(eq) {
                                debug!("forced {}", eq);
                            }
                        }
                    }
                }
            }
        }

        // An edge in the same class as its reverse is a contradiction.
        for i in 0..m {
            for j in i + 1..m {
                if forest.same_set(slots.slot(i, j), slots.slot(j, i)) {
                    debug!("contradiction: {} and {} share a class", Edge::new(i, j), Edge::new(j, i));
                    return ComponentsGraph::Contradiction { equalities };
                }
            }
        }

        let num_labels = forest.normalize_nontrivial();
        let mut provisional: Vec<Vec<Option<usize>>> = vec![vec![None; m]; m];
        let mut max_label: Option<usize> = None;
        for i in 0..m {
            for j in 0..m {
                if i != j && forest.size(slots.slot(i, j)) > 1 {
                    let label = forest.label(slots.slot(i, j));
                    provisional[i][j] = label;
                    max_label = max_label.max(label);
                }
            }
        }

        // Each class and its mirror get the same final color; the mirror's
        // edges are not listed.
        #[derive(Clone, Copy)]
        enum Renamed {
            Unseen,
            Color(usize),
            Mirror,
        }
        let mut renamed = vec![Renamed::Unseen; num_labels];
        let mut num_colors = 0;
        for i in 0..m {
            for j in i + 1..m {
                if let Some(label) = provisional[i][j] {
                    if let Renamed::Unseen = renamed[label] {
                        renamed[label] = Renamed::Color(num_colors);
                        num_colors += 1;
                        if let Some(mirror) = provisional[j][i] {
                            renamed[mirror] = Renamed::Mirror;
                        }
                    }
                }
            }
        }
        assert_eq!(
            num_colors,
            max_label.map_or(0, |max| (max + 1) / 2),
            "Classes of {}x{} matrix do not pair up with their mirrors",
            n,
            m
        );

        let mut colors = vec![Vec::new(); num_colors];
        for i in 0..m {
            for j in 0..m {
                if let Some(label) = provisional[i][j] {
                    if let Renamed::Color(color) = renamed[label] {
                        colors[color].push(Edge::new(i, j));
                    }
                }
            }
        }
        debug!("{} equalities, {} colors", equalities.len(), num_colors);

        ComponentsGraph::colored(m, equalities, colors)
    }

    fn colored(num_columns: usize, equalities: BTreeSet<Equality>, colors: Vec<Vec<Edge>>) -> Self {
        let mut color_of_edge = BTreeMap::new();
        for (color, edges) in colors.iter().enumerate() {
            for &e in edges {
                color_of_edge.insert(e, color);
                color_of_edge.insert(e.reversed(), color);
            }
        }
        ComponentsGraph::Colored {
            num_columns,
            equalities,
            colors,
            color_of_edge,
        }
    }

    pub fn is_contradiction(&self) -> bool {
        matches!(self, ComponentsGraph::Contradiction { .. })
    }

    /// Equalities found while scanning, also available for contradictions.
    pub fn equalities(&self) -> &BTreeSet<Equality> {
        match self {
            ComponentsGraph::Colored { equalities, .. } => equalities,
            ComponentsGraph::Contradiction { equalities } => equalities,
        }
    }

    pub fn into_equalities(self) -> BTreeSet<Equality> {
        match self {
            ComponentsGraph::Colored { equalities, .. } => equalities,
            ComponentsGraph::Contradiction { equalities } => equalities,
        }
    }

    /// Number of columns, or `None` for a contradiction.
    pub fn num_columns(&self) -> Option<usize> {
        match self {
            ComponentsGraph::Colored { num_columns, .. } => Some(*num_columns),
            ComponentsGraph::Contradiction { .. } => None,
        }
    }

    /// Edge lists of each color. Empty for a contradiction.
    pub fn color_classes(&self) -> &[Vec<Edge>] {
        match self {
            ComponentsGraph::Colored { colors, .. } => colors,
            ComponentsGraph::Contradiction { .. } => &[],
        }
    }

    pub fn num_colors(&self) -> usize {
        self.color_classes().len()
    }

    /// Returns the color of `edge` (in either direction), if it has one.
    pub fn color_of(&self, edge: Edge) -> Option<usize> {
        match self {
            ComponentsGraph::Colored { color_of_edge, .. } => color_of_edge.get(&edge).copied(),
            ComponentsGraph::Contradiction { .. } => None,
        }
    }
}

/// Checks whether rows `a` and `b` read `(v, !v, v)` and `(!v, v, !v)` on
/// columns `(i, j, k)`, with `v` taken from row `a`, column `i`.
fn forces_equality(matrix: &Matrix, (a, b): (usize, usize), (i, j, k): (usize, usize, usize)) -> bool {
    let v = matrix.get(a, i);
    matrix.get(a, j) == !v
        && matrix.get(a, k) == v
        && matrix.get(b, i) == !v
        && matrix.get(b, j) == v
        && matrix.get(b, k) == !v
}
