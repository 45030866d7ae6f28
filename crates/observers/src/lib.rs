//! Observers for recording and plotting Euler runs.
//!
//! [`PlotObserver`] collects named traces of `[x, y]` points, either from
//! solver events that implement [`Plottable`] or from direct
//! [`record`](PlotObserver::record) and [`extend`](PlotObserver::extend)
//! calls.
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver::show`], which opens a native egui
//!   window. This feature adds dependencies on `eframe` and `egui_plot`.

mod plot;

pub use plot::{PlotObserver, Plottable, ShowConfig};
