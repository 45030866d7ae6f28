//! Plotting observer for comparing approximate and exact curves.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use slope_core::Observer;
use slope_growth::{Point, Rate};
use slope_solvers::transient::euler;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Euler vs. exact").legend().markers(0))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    markers: Vec<usize>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig`: no title, no legend, linear scale, and
    /// lines only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// Non-positive y values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Draws a marker at every recorded point of the trace at `index`.
    #[must_use]
    pub fn markers(mut self, index: usize) -> Self {
        self.markers.push(index);
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely, or
/// `None` in a trace slot to skip only that trace.
///
/// # Example
///
/// ```ignore
/// impl Plottable<1> for StepEvent {
///     fn x(&self) -> Option<f64> {
///         Some(self.x)
///     }
///
///     fn traces(&self) -> [Option<f64>; 1] {
///         [self.y.is_finite().then_some(self.y)]
///     }
/// }
/// ```
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// An observer that collects named traces of `[x, y]` points.
///
/// The const generic `N` is the number of traces. Points arrive either
/// through the [`Observer`] impl, for events implementing [`Plottable<N>`],
/// or through [`record`](Self::record) and [`extend`](Self::extend).
///
/// # Example
///
/// ```
/// use slope_observers::PlotObserver;
///
/// let mut obs = PlotObserver::<2>::new(["Euler", "Exact"]);
/// obs.extend(1, [[0.0, 1.0], [1.0, 1.1052]]);
/// obs.record(0.0, [Some(1.0), None]);
/// obs.record(1.0, [Some(1.1), None]);
///
/// assert_eq!(obs.points(0), [[0.0, 1.0], [1.0, 1.1]]);
/// assert_eq!(obs.points(1).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single x value across all traces.
    ///
    /// A `None` slot leaves that trace unchanged.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Appends a run of points to the trace at `index`.
    ///
    /// Useful for loading a precomputed curve, such as an exact solution
    /// sampled on a dense grid.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn extend(&mut self, index: usize, points: impl IntoIterator<Item = [f64; 2]>) {
        self.data[index].extend(points);
    }

    /// Returns the name of the trace at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Returns the points recorded for the trace at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.data[index]
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    #[cfg(feature = "plot")]
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(app::PlotApp::new(traces, config)))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so the points remain available after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Puts the Euler approximation of a growth run in trace 0.
///
/// Any other traces are left empty for overlays such as the exact curve.
impl<const N: usize> Plottable<N> for euler::Event<Point, Rate> {
    fn x(&self) -> Option<f64> {
        Some(self.snapshot.input.x)
    }

    fn traces(&self) -> [Option<f64>; N] {
        let y = self.snapshot.input.y;
        std::array::from_fn(|index| (index == 0).then_some(y))
    }
}

#[cfg(feature = "plot")]
mod app {
    use eframe::egui;
    use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

    use super::ShowConfig;

    /// The egui [`eframe::App`] that renders collected traces.
    pub(super) struct PlotApp {
        traces: Vec<(String, Vec<[f64; 2]>)>,
        config: ShowConfig,
    }

    impl PlotApp {
        pub(super) fn new(traces: Vec<(String, Vec<[f64; 2]>)>, config: ShowConfig) -> Self {
            Self { traces, config }
        }

        fn transformed(&self, points: &[[f64; 2]]) -> Vec<[f64; 2]> {
            if self.config.log_y {
                points
                    .iter()
                    .filter(|p| p[1] > 0.0)
                    .map(|p| [p[0], p[1].log10()])
                    .collect()
            } else {
                points.iter().copied().filter(|p| p[1].is_finite()).collect()
            }
        }
    }

    impl eframe::App for PlotApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut plot = Plot::new("plot_observer").x_axis_label("x");
                plot = plot.y_axis_label(if self.config.log_y { "log₁₀ y" } else { "y" });
                if self.config.legend {
                    plot = plot.legend(Legend::default());
                }
                plot.show(ui, |plot_ui| {
                    for (index, (name, points)) in self.traces.iter().enumerate() {
                        let points = self.transformed(points);
                        if self.config.markers.contains(&index) {
                            let markers: PlotPoints = points.iter().copied().collect();
                            plot_ui.points(Points::new(markers).radius(3.0).name(name));
                        }
                        let line: PlotPoints = points.into_iter().collect();
                        plot_ui.line(Line::new(line).name(name));
                    }
                });
            });
        }
    }
}
