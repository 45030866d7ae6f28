use slope_core::Snapshot;

/// Event emitted by the Euler solver for each recorded snapshot.
///
/// Step 0 is the initial point. Steps `1..=n` follow each integration step.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number.
    pub step: usize,

    /// Snapshot of the model input and output at this step.
    pub snapshot: Snapshot<I, O>,
}
