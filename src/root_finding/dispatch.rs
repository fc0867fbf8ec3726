//! Uniform entry point over the six methods.
//!
//! Front ends (a text menu, a web form) pick an [`Algorithm`] by tag and
//! collect numeric parameters; [`solve`] routes a [`MethodInput`] to the
//! matching solve operation. Each request builds a fresh input; nothing is
//! shared between calls.

use serde::{Deserialize, Serialize};

use super::algorithms::Algorithm;
use super::config::CommonCfg;
use super::errors::RootFindingError;
use super::report::SolveResult;
use super::bisection::{bisection, BisectionCfg};
use super::regula_falsi::{regula_falsi, RegulaFalsiCfg};
use super::secant::{secant, SecantCfg};
use super::newton::{newton_raphson, NewtonCfg};
use super::fixed_point::{fixed_point, FixedPointCfg};
use super::modified_secant::{modified_secant, ModifiedSecantCfg};


/// Method-specific numeric parameters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MethodParams {
    Bisection      { a: f64, b: f64 },
    RegulaFalsi    { a: f64, b: f64 },
    Secant         { x0: f64, x1: f64 },
    NewtonRaphson  { x0: f64 },
    FixedPoint     { x0: f64 },
    /// `delta` falls back to [`ModifiedSecantCfg::DEFAULT_DELTA`].
    ModifiedSecant { x0: f64, delta: Option<f64> },
}

impl MethodParams {
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            MethodParams::Bisection { .. }      => Algorithm::Bisection,
            MethodParams::RegulaFalsi { .. }    => Algorithm::RegulaFalsi,
            MethodParams::Secant { .. }         => Algorithm::Secant,
            MethodParams::NewtonRaphson { .. }  => Algorithm::NewtonRaphson,
            MethodParams::FixedPoint { .. }     => Algorithm::FixedPoint,
            MethodParams::ModifiedSecant { .. } => Algorithm::ModifiedSecant,
        }
    }
}


/// Everything one solve request needs.
///
/// - `f`      : function of one real variable; for [`Algorithm::FixedPoint`]
///              this is the iteration function `g`
/// - `df`     : derivative of `f`, used by Newton-Raphson only; when absent
///              Newton-Raphson falls back to a central finite difference
/// - `params` : method tag and its numeric parameters
/// - `common` : tolerance, iteration cap, optional residual tolerance
pub struct MethodInput<'f> {
    pub f      : &'f dyn Fn(f64) -> f64,
    pub df     : Option<&'f dyn Fn(f64) -> f64>,
    pub params : MethodParams,
    pub common : CommonCfg,
}

impl<'f> MethodInput<'f> {
    pub fn new(f: &'f dyn Fn(f64) -> f64, params: MethodParams) -> Self {
        Self { f, df: None, params, common: CommonCfg::new() }
    }

    #[must_use]
    pub fn with_derivative(mut self, df: &'f dyn Fn(f64) -> f64) -> Self {
        self.df = Some(df);
        self
    }

    #[must_use]
    pub fn with_common(mut self, common: CommonCfg) -> Self {
        self.common = common;
        self
    }

    pub fn algorithm(&self) -> Algorithm { self.params.algorithm() }
}

impl std::fmt::Debug for MethodInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodInput")
            .field("params", &self.params)
            .field("common", &self.common)
            .field("has_derivative", &self.df.is_some())
            .finish_non_exhaustive()
    }
}


/// Runs the method selected by `input.params`.
///
/// # Errors
/// Whatever the selected method rejects up front (bounds, guesses, delta);
/// see the individual solve functions.
pub fn solve(input: &MethodInput<'_>) -> Result<SolveResult, RootFindingError> {
    let f = input.f;
    let common = input.common;
    tracing::debug!(algorithm = %input.algorithm(), params = ?input.params, "solve");

    match input.params {
        MethodParams::Bisection { a, b } =>
            bisection(f, a, b, BisectionCfg::new().set_common(common)),
        MethodParams::RegulaFalsi { a, b } =>
            regula_falsi(f, a, b, RegulaFalsiCfg::new().set_common(common)),
        MethodParams::Secant { x0, x1 } =>
            secant(f, x0, x1, SecantCfg::new().set_common(common)),
        MethodParams::NewtonRaphson { x0 } =>
            newton_raphson(f, input.df, x0, NewtonCfg::new().set_common(common)),
        MethodParams::FixedPoint { x0 } =>
            fixed_point(f, x0, FixedPointCfg::new().set_common(common)),
        MethodParams::ModifiedSecant { x0, delta } => {
            let mut cfg = ModifiedSecantCfg::new().set_common(common);
            if let Some(delta) = delta {
                cfg = cfg.set_delta(delta)?;
            }
            modified_secant(f, x0, cfg)
        }
    }
}


/// Runs `algorithm`, checking that `input.params` belongs to it.
///
/// For front ends where the method tag and the parameter set arrive
/// separately (a menu choice followed by prompts).
///
/// # Errors
/// - [`RootFindingError::ParamsMismatch`] : `input.params` is for another method
/// - anything [`solve`] returns
pub fn solve_with(algorithm: Algorithm, input: &MethodInput<'_>) -> Result<SolveResult, RootFindingError> {
    let params = input.algorithm();
    if params != algorithm {
        return Err(RootFindingError::ParamsMismatch { algorithm, params });
    }
    solve(input)
}
