//! Zero-of-function (ZOF) root finders.
//!
//! Six classical iterative methods for single-variable nonlinear equations,
//! each returning a [`root_finding::report::SolveResult`] that carries the
//! per-iteration trace alongside the root estimate.

pub mod root_finding;
