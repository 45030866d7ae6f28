/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic: the same input always produces the same
/// output. Solvers rely on this to replay a run bit for bit.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type for domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// Rate of change for dy/dx = k·y.
    struct Rate {
        k: f64,
    }

    impl Model for Rate {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, y: &f64) -> Result<f64, Infallible> {
            Ok(self.k * y)
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let model = Rate { k: -0.5 };
        let first = model.call(&3.0).unwrap();
        let second = model.call(&3.0).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(first, -1.5);
    }

    #[test]
    fn snapshot_keeps_both_sides() {
        let model = Rate { k: 2.0 };
        let snapshot = Snapshot::new(4.0, model.call(&4.0).unwrap());
        assert_eq!(snapshot, Snapshot { input: 4.0, output: 8.0 });
    }
}
