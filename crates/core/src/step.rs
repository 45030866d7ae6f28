/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the Euler solver advance the type by
/// `derivative * delta`, where the derivative is taken with respect to
/// `Delta`. `Delta` is usually a plain `f64` step in the independent variable.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for [`StepIntegrable::Derivative`].
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
