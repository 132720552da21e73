//! Exhaustive proof of edge equalities shared by all completions of a pattern.
//!
//! A [`Lemma`] is a wildcard [`Pattern`] plus a list of excluded equalities.
//! Proving it builds the [`ComponentsGraph`] of every completion, drops the
//! contradictory ones and those that already contain an excluded equality,
//! and intersects the equality sets of the rest. Whatever survives the
//! intersection holds in every abiding completion.
//!
//! ```
//! use exhaust_proof::lemma::Lemma;
//!
//! let proof = Lemma::builtin(1).unwrap().prove();
//! let lines: Vec<String> = proof.guaranteed.iter().map(|eq| eq.to_string()).collect();
//! assert!(lines.contains(&"3->1 = 5->1".to_string()));
//! ```

use std::collections::BTreeSet;

use log::{debug, info};
use thiserror::Error;

use crate::graph::ComponentsGraph;
use crate::pattern::{Matrix, Pattern, PatternError};
use crate::types::{Edge, Equality};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LemmaError {
    #[error("unknown lemma {0}, expected 1 or 2")]
    Unknown(i64),

    #[error("invalid lemma pattern: {0}")]
    Pattern(#[from] PatternError),
}

const LEMMA_1: [&str; 4] = ["01?1?", "10?0?", "?01?1", "?10?0"];
const LEMMA_2: [&str; 4] = ["01?0?", "10?1?", "?01?1", "?10?0"];

/// Equalities that disqualify a completion in both built-in lemmas.
fn side_conditions() -> Vec<Equality> {
    vec![
        Equality::new(Edge::new(0, 1), Edge::new(2, 1)),
        Equality::new(Edge::new(0, 1), Edge::new(4, 1)),
    ]
}

/// A pattern to exhaust, together with the equalities that exclude a
/// completion from the proof.
#[derive(Debug, Clone)]
pub struct Lemma {
    pub name: String,
    pub pattern: Pattern,
    pub excluded: Vec<Equality>,
}

impl Lemma {
    pub fn new(name: impl Into<String>, pattern: Pattern, excluded: Vec<Equality>) -> Self {
        Self {
            name: name.into(),
            pattern,
            excluded,
        }
    }

    /// Returns one of the two built-in lemmas.
    pub fn builtin(index: i64) -> Result<Self, LemmaError> {
        let rows = match index {
            1 => LEMMA_1,
            2 => LEMMA_2,
            _ => return Err(LemmaError::Unknown(index)),
        };
        let pattern = Pattern::parse(&rows)?;
        Ok(Lemma::new(format!("lemma {}", index), pattern, side_conditions()))
    }

    /// Returns true if `graph` contains one of the excluded equalities.
    pub fn is_excluded(&self, graph: &ComponentsGraph) -> bool {
        self.excluded.iter().any(|eq| graph.equalities().contains(eq))
    }

    pub fn prove(&self) -> Proof {
        self.prove_with(|_, _, _| {})
    }

    /// Runs the proof, calling `on_abiding` with the 1-based count, matrix,
    /// and graph of every completion that passes the filters.
    pub fn prove_with<F>(&self, mut on_abiding: F) -> Proof
    where
        F: FnMut(usize, &Matrix, &ComponentsGraph),
    {
        info!("proving {} over {} completions of {}", self.name, self.pattern.num_completions(), self.pattern);

        let mut proof = Proof::default();
        let mut common: Option<BTreeSet<Equality>> = None;
        for matrix in self.pattern.completions() {
            proof.candidates += 1;
            let graph = ComponentsGraph::build(&matrix);
            if graph.is_contradiction() {
                proof.contradictions += 1;
                continue;
            }
            if self.is_excluded(&graph) {
                proof.excluded += 1;
                continue;
            }

            proof.abiding += 1;
            debug!("abiding matrix #{}:\n{}", proof.abiding, matrix);
            on_abiding(proof.abiding, &matrix, &graph);
            common = Some(intersect(common, graph.into_equalities()));
        }
        proof.guaranteed = common.unwrap_or_default();

        info!(
            "{}: {} candidates, {} contradictions, {} excluded, {} abiding, {} guaranteed",
            self.name,
            proof.candidates,
            proof.contradictions,
            proof.excluded,
            proof.abiding,
            proof.guaranteed.len()
        );
        proof
    }
}

/// Outcome of [`Lemma::prove`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proof {
    /// Equalities present in every abiding completion.
    pub guaranteed: BTreeSet<Equality>,
    pub candidates: usize,
    pub contradictions: usize,
    pub excluded: usize,
    pub abiding: usize,
}

/// Intersects the equality sets of `graphs`.
///
/// Returns the empty set when there are no graphs.
pub fn intersect_equalities<'a, I>(graphs: I) -> BTreeSet<Equality>
where
    I: IntoIterator<Item = &'a ComponentsGraph>,
{
    graphs
        .into_iter()
        .fold(None, |common, graph| Some(intersect(common, graph.equalities().clone())))
        .unwrap_or_default()
}

fn intersect(common: Option<BTreeSet<Equality>>, next: BTreeSet<Equality>) -> BTreeSet<Equality> {
    match common {
        None => next,
        Some(common) => common.intersection(&next).copied().collect(),
    }
}
