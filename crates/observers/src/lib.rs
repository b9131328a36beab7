//! Reusable observers for the Feigen sweep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both sweep solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasParameter`], [`CanStopEarly`])
//! - [`LogProgress`] — logs sweep progress through the `log` facade
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for viewing the bifurcation diagram and
//!   Lyapunov profile via egui. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`Observer`]: feigen_core::Observer
//! [`HasParameter`]: traits::HasParameter
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod progress;

pub use progress::LogProgress;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig, Style, show_all};
