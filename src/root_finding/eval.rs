//! Evaluation-counting wrapper shared by all algorithms.

/// Wraps a user function, counting calls.
pub(crate) struct Counted<F> {
    func  : F,
    evals : usize,
}

impl<F> Counted<F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: F) -> Self {
        Self { func, evals: 0 }
    }

    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> f64 {
        self.evals += 1;
        (self.func)(x)
    }

    #[inline]
    pub(crate) fn evals(&self) -> usize { self.evals }
}


/// `true` if `denom` is zero relative to the values it was formed from,
/// i.e. `|lhs - rhs|` is within one ulp-scale of `max(|lhs|, |rhs|)`.
#[inline]
pub(crate) fn vanishing_difference(lhs: f64, rhs: f64, denom: f64) -> bool {
    denom.abs() <= f64::EPSILON * lhs.abs().max(rhs.abs())
}
