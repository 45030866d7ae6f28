//! Forward Euler solver for ODE problems.
//!
//! Each step advances the state with the derivative evaluated at the start of
//! the interval:
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * delta
//! ```
//!
//! The solver records every snapshot, so the returned [`Solution`] holds the
//! full history from the initial point to the last completed step. Non-finite
//! states are not treated as failures; they are recorded like any other value.
//!
//! # Example
//!
//! ```ignore
//! use slope_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial, 0.1, 20)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use slope_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each step `1..=steps`:
///    - Extract the state from the current input.
///    - Compute the derivative from the current input and output.
///    - Step the state forward: `state + derivative * delta`.
///    - Build the next input from the stepped state.
///    - Call the model to get the next output.
///    - Emit an [`Event`] to the observer.
/// 3. Return the solution with the full history.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial snapshot and after each
/// step, and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any step.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    delta: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    log::debug!("euler: starting run of {steps} steps");

    let initial_output = model.call(&initial).map_err(|e| Error::model(0, e))?;
    let initial_snapshot = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(initial_snapshot.clone());

    let event = Event {
        step: 0,
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        log::debug!("euler: stopped by observer before the first step");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=steps {
        let state = problem
            .state(&current.input)
            .map_err(|e| Error::problem(step, e))?;
        let derivative = problem
            .derivative(&current.input, &current.output)
            .map_err(|e| Error::problem(step, e))?;

        let next_state = state.step(derivative, delta.clone());

        let next_input = problem
            .build_input(&current.input, &next_state, &delta)
            .map_err(|e| Error::problem(step, e))?;
        let next_output = model.call(&next_input).map_err(|e| Error::model(step, e))?;
        let next_snapshot = Snapshot::new(next_input, next_output);

        history.push(next_snapshot.clone());
        log::trace!("euler: completed step {step}");

        let event = Event {
            step,
            snapshot: next_snapshot.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("euler: stopped by observer after step {step}");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_snapshot;
    }

    log::debug!("euler: completed {steps} steps");

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] with a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any step.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    delta: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, delta, steps, ())
}
