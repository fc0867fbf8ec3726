//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerance and iteration limit,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] — universal fields
//! ├ `tol`      : error tolerance; `error < tol` converges
//! ├ `max_iter` : iteration cap
//! └ `abs_fx`   : optional residual tolerance; `|f(x)| < abs_fx` converges
//!
//! Some algorithms carry extra fields (e.g. the modified secant
//! perturbation `delta`) on their own config struct.


use super::errors::RootFindingError;


pub const DEFAULT_TOL      : f64   = 1e-6;
pub const DEFAULT_MAX_ITER : usize = 100;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tol:      f64,
    max_iter: usize,
    abs_fx:   Option<f64>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tol      : DEFAULT_TOL,
            max_iter : DEFAULT_MAX_ITER,
            abs_fx   : None,
        }
    }

    // getters
    pub fn tol(&self)      -> f64 { self.tol }
    pub fn max_iter(&self) -> usize { self.max_iter }
    pub fn abs_fx(&self)   -> Option<f64> { self.abs_fx }

    pub fn set_tol(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RootFindingError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }
    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
    pub fn set_abs_fx(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RootFindingError::InvalidAbsFx { got: v });
        }
        self.abs_fx = Some(v);
        Ok(self)
    }

    /// `true` if `fx` counts as a root: exactly zero, or inside `abs_fx`.
    #[inline]
    pub(crate) fn residual_reached(&self, fx: f64) -> bool {
        fx == 0.0 || self.abs_fx.is_some_and(|tol| fx.abs() < tol)
    }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common = self.common.set_tol(v)?;
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common = self.common.set_max_iter(v)?;
                Ok(self)
            }
            pub fn set_abs_fx(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common = self.common.set_abs_fx(v)?;
                Ok(self)
            }

            /// Replaces the shared fields with an already-validated [`CommonCfg`].
            #[must_use]
            pub fn set_common(mut self, common: $crate::root_finding::config::CommonCfg) -> Self {
                self.common = common;
                self
            }

            pub fn common(&self) -> &$crate::root_finding::config::CommonCfg { &self.common }
        }

        impl Default for $cfg {
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg;
