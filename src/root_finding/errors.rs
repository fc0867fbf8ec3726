//! Root-finding error types.
//!
//! [`RootFindingError`] covers contract violations only, raised before
//! any iteration runs:
//! ├ invalid tolerances and iteration caps
//! ├ invalid starting data (bounds, guesses, perturbation)
//! └ unknown algorithm tags and mismatched dispatch parameters
//!
//! Numerical failures (no sign change, vanishing derivative, divergence,
//! iteration limit) are not errors; they are reported through
//! [`Diagnostic`](super::report::Diagnostic) on the returned result.


use thiserror::Error;
use super::algorithms::Algorithm;


#[derive(Debug, Error, PartialEq)]
pub enum RootFindingError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid initial guess: must be finite (and distinct for two-point methods). got x0={x0}, x1={x1:?}")]
    InvalidGuess { x0: f64, x1: Option<f64> },

    #[error("invalid perturbation delta: must be finite and > 0. got {got}")]
    InvalidDelta { got: f64 },

    #[error("invalid divergence bound: must be > 0. got {got}")]
    InvalidDivergenceBound { got: f64 },

    #[error("unknown algorithm: {got:?}")]
    UnknownAlgorithm { got: String },

    #[error("parameters for {params} passed to {algorithm}")]
    ParamsMismatch { algorithm: Algorithm, params: Algorithm },
}
