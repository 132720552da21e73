//! # exhaust-proof: forced edge equalities in binary matrices
//!
//! **`exhaust-proof`** mechanizes a small combinatorial lemma by brute force.
//! A lemma is given as a binary matrix pattern with wildcards. Every
//! completion of the pattern induces a set of *edge equalities* between
//! directed column pairs; the equalities shared by all relevant completions
//! are *guaranteed* and form the conclusion of the lemma.
//!
//! ## The inference rule
//!
//! Columns `i`, `j`, `k` and rows `a`, `b` force `i->j = k->j` (and its
//! mirror `j->i = j->k`) when the rows read
//!
//! ```text
//!        i   j   k
//! a:     v  !v   v
//! b:    !v   v  !v
//! ```
//!
//! Equalities are closed under transitivity with a union-find over directed
//! edges. A completion where some edge is forced equal to its own reverse is
//! contradictory and takes no part in the proof.
//!
//! ## Usage
//!
//! ```rust
//! use exhaust_proof::lemma::Lemma;
//!
//! let lemma = Lemma::builtin(2).unwrap();
//! let proof = lemma.prove();
//! assert_eq!(proof.candidates, 256);
//! for eq in &proof.guaranteed {
//!     println!("Guaranteed edge in formula graph: {}", eq);
//! }
//! ```
//!
//! ## Core Components
//!
//! - **[`pattern`]**: wildcard patterns and their completions.
//! - **[`union_find`]**: the disjoint-set forest.
//! - **[`graph`]**: per-matrix edge-equality graphs.
//! - **[`lemma`]**: the exhaustive proof driver.
//! - **[`types`]**: edges and equalities.

pub mod graph;
pub mod lemma;
pub mod pattern;
pub mod types;
pub mod union_find;
