//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, the closed set of supported methods,
//! along with the names and table headers each one reports under.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::RootFindingError;


/// Root-finding algorithm variants.
/// - Bracket methods : [`Algorithm::Bisection`], [`Algorithm::RegulaFalsi`]
/// - Open methods    : [`Algorithm::Secant`], [`Algorithm::NewtonRaphson`],
///                     [`Algorithm::FixedPoint`], [`Algorithm::ModifiedSecant`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bisection,
    RegulaFalsi,
    Secant,
    NewtonRaphson,
    FixedPoint,
    ModifiedSecant,
}

impl Algorithm {
    /// All methods, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bisection,
        Algorithm::RegulaFalsi,
        Algorithm::Secant,
        Algorithm::NewtonRaphson,
        Algorithm::FixedPoint,
        Algorithm::ModifiedSecant,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection      => "bisection",
            Algorithm::RegulaFalsi    => "regula_falsi",
            Algorithm::Secant         => "secant",
            Algorithm::NewtonRaphson  => "newton_raphson",
            Algorithm::FixedPoint     => "fixed_point",
            Algorithm::ModifiedSecant => "modified_secant",
        }
    }

    /// Human-readable name used in result headers.
    pub const fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bisection      => "Bisection Method",
            Algorithm::RegulaFalsi    => "Regula Falsi Method",
            Algorithm::Secant         => "Secant Method",
            Algorithm::NewtonRaphson  => "Newton-Raphson Method",
            Algorithm::FixedPoint     => "Fixed Point Iteration",
            Algorithm::ModifiedSecant => "Modified Secant Method",
        }
    }

    /// 1-based position in the method menu.
    pub const fn menu_index(self) -> usize {
        match self {
            Algorithm::Bisection      => 1,
            Algorithm::RegulaFalsi    => 2,
            Algorithm::Secant         => 3,
            Algorithm::NewtonRaphson  => 4,
            Algorithm::FixedPoint     => 5,
            Algorithm::ModifiedSecant => 6,
        }
    }

    /// `true` for methods that require a sign-changing bracket `[a, b]`.
    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bisection | Algorithm::RegulaFalsi)
    }

    /// Column headers of the iteration table, matching
    /// [`IterationRecord::columns`](super::report::IterationRecord::columns)
    /// with the iteration index prepended.
    pub const fn column_headers(self) -> &'static [&'static str] {
        match self {
            Algorithm::Bisection
            | Algorithm::RegulaFalsi    => &["iteration", "a", "b", "c", "f(c)", "error"],
            Algorithm::Secant           => &["iteration", "x0", "x1", "x2", "f(x2)", "error"],
            Algorithm::NewtonRaphson    => &["iteration", "x", "f(x)", "f'(x)", "x_new", "error"],
            Algorithm::FixedPoint       => &["iteration", "x", "g(x)", "error"],
            Algorithm::ModifiedSecant   => &["iteration", "x", "f(x)", "f(x+δx)", "x_new", "error"],
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

/// Parses a menu number (`"1"`..`"6"`), a machine name (`"newton_raphson"`)
/// or a short alias (`"newton"`, `"false_position"`). Case and surrounding
/// whitespace are ignored; `-` and spaces are read as `_`.
impl FromStr for Algorithm {
    type Err = RootFindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let algorithm = match key.as_str() {
            "1" | "bisection"                                      => Algorithm::Bisection,
            "2" | "regula_falsi" | "false_position"                => Algorithm::RegulaFalsi,
            "3" | "secant"                                         => Algorithm::Secant,
            "4" | "newton_raphson" | "newton"                      => Algorithm::NewtonRaphson,
            "5" | "fixed_point" | "fixed_point_iteration"          => Algorithm::FixedPoint,
            "6" | "modified_secant"                                => Algorithm::ModifiedSecant,
            _ => return Err(RootFindingError::UnknownAlgorithm { got: s.to_string() }),
        };
        Ok(algorithm)
    }
}
