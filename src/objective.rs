//! Objective functions.
//!
//! Every optimizer is generic over an [`Objective`]: a pure function from a
//! candidate to a scalar fitness. Plain closures work directly; closures
//! that can fail are wrapped in [`Fallible`] so their error reaches the
//! caller of `optimize()` unchanged.

use std::convert::Infallible;

/// A black-box fitness function over candidates of type `G`.
///
/// `G` is `[f64]` for the real-valued optimizers and `[bool]` for the
/// binary GA. Implementations must be deterministic: optimizers cache the
/// fitness of surviving candidates instead of re-evaluating them.
///
/// # Examples
///
/// ```
/// use u_evolve::objective::{Fallible, Objective};
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0][..]), Ok(5.0));
///
/// let checked = Fallible(|x: &[f64]| {
///     if x.iter().all(|v| v.is_finite()) {
///         Ok(x.iter().sum::<f64>())
///     } else {
///         Err("non-finite input")
///     }
/// });
/// assert_eq!(checked.evaluate(&[f64::NAN][..]), Err("non-finite input"));
/// ```
pub trait Objective<G: ?Sized> {
    /// Error raised by the objective. [`Infallible`] for plain closures.
    type Error;

    /// Computes the fitness of `candidate`.
    fn evaluate(&self, candidate: &G) -> Result<f64, Self::Error>;
}

impl<G, F> Objective<G> for F
where
    G: ?Sized,
    F: Fn(&G) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, candidate: &G) -> Result<f64, Infallible> {
        Ok(self(candidate))
    }
}

/// Adapter for closures returning `Result<f64, E>`.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<G, F, E> Objective<G> for Fallible<F>
where
    G: ?Sized,
    F: Fn(&G) -> Result<f64, E>,
{
    type Error = E;

    fn evaluate(&self, candidate: &G) -> Result<f64, E> {
        (self.0)(candidate)
    }
}
