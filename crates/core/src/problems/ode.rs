use crate::{DerivativeOf, StepIntegrable};

/// Defines an ordinary differential equation to be stepped by a solver.
///
/// An ODE problem pulls the state out of a model input, turns the model's
/// input and output into a derivative, and rebuilds the next model input once
/// the state has been stepped by `delta`. The independent variable (time,
/// position, or a plain `x`) advances inside [`build_input`](Self::build_input).
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the state from model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the derivative of the state at the start of a step.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Builds the next model input from a stepped state.
    ///
    /// `base` is the input the step started from and `delta` the step size.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from the state.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;
}
