use std::convert::Infallible;

use slope_core::{DerivativeOf, Model, OdeProblem, StepIntegrable};

/// A point (x, y) on an approximate or exact solution curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The stepped quantity y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(pub f64);

/// The slope dy/dx.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate(pub f64);

impl Rate {
    /// Returns the change in y over a step of size `h`, `h · dy/dx`.
    #[must_use]
    pub fn increment(self, h: f64) -> f64 {
        h * self.0
    }
}

impl StepIntegrable<f64> for Amount {
    type Derivative = Rate;

    fn step(&self, derivative: Rate, h: f64) -> Self {
        Amount(self.0 + derivative.increment(h))
    }
}

/// Evaluates the right-hand side of dy/dx = k·y at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthModel {
    k: f64,
}

impl GrowthModel {
    #[must_use]
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    /// Returns the rate constant.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }
}

impl Model for GrowthModel {
    type Input = Point;
    type Output = Rate;
    type Error = Infallible;

    fn call(&self, point: &Point) -> Result<Rate, Infallible> {
        Ok(Rate(self.k * point.y))
    }
}

/// Steps y along x: the state is `y`, and each step moves x forward by `h`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthProblem;

impl OdeProblem for GrowthProblem {
    type Input = Point;
    type Output = Rate;
    type Delta = f64;
    type State = Amount;
    type Error = Infallible;

    fn state(&self, point: &Point) -> Result<Amount, Infallible> {
        Ok(Amount(point.y))
    }

    fn derivative(
        &self,
        _point: &Point,
        rate: &Rate,
    ) -> Result<DerivativeOf<Amount, f64>, Infallible> {
        Ok(*rate)
    }

    fn build_input(&self, base: &Point, state: &Amount, h: &f64) -> Result<Point, Infallible> {
        Ok(Point {
            x: base.x + h,
            y: state.0,
        })
    }
}
