//! Plotting observer for viewing sweep results.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, Points};
use feigen_core::Observer;
use feigen_solvers::{bifurcation, lyapunov};

/// Configuration for rendering one or more [`PlotObserver`]s.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Lyapunov exponent").zero_line())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    zero_line: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no
    /// reference line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            zero_line: false,
        }
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

    /// Draws a horizontal reference line at `y = 0` on line plots.
    ///
    /// On a Lyapunov profile this marks the boundary between stable and
    /// chaotic parameters.
    #[must_use]
    pub fn zero_line(mut self) -> Self {
        self.zero_line = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Connected line, for one value per r.
    Line,

    /// Unconnected dots, for point clouds such as a bifurcation diagram.
    Points,
}

/// Extracts plottable `[x, y]` pairs from a solver event.
///
/// Implemented for both solver events: a bifurcation event yields every
/// observed `(r, x)` for its r, and a Lyapunov event yields its single
/// `(r, λ)`.
pub trait Plottable {
    /// Returns the points this event contributes.
    fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_;
}

impl Plottable for bifurcation::Event<'_> {
    fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points.iter().map(|p| [p.r, p.x])
    }
}

impl Plottable for lyapunov::Event {
    fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        std::iter::once([self.point.r, self.point.lambda])
    }
}

/// An observer that collects one trace during a sweep and displays it via egui.
///
/// Pass `&mut PlotObserver` as the solver observer, then call
/// [`show`][PlotObserver::show] (or [`show_all`] for several stacked plots)
/// once the sweep completes.
///
/// # Example
///
/// ```ignore
/// let mut diagram = PlotObserver::points("x");
/// let mut profile = PlotObserver::line("λ");
/// bifurcation::solve(&sweep, &bif_config, &mut diagram);
/// lyapunov::solve(&sweep, &lyap_config, &mut profile);
/// show_all(vec![diagram, profile], ShowConfig::new().title("r sweep").zero_line())?;
/// ```
pub struct PlotObserver {
    name: String,
    style: Style,
    data: Vec<[f64; 2]>,
}

impl PlotObserver {
    /// Creates an empty trace with the given name and style.
    pub fn new(name: impl Into<String>, style: Style) -> Self {
        Self {
            name: name.into(),
            style,
            data: Vec::new(),
        }
    }

    /// Creates an empty trace drawn as unconnected dots.
    pub fn points(name: impl Into<String>) -> Self {
        Self::new(name, Style::Points)
    }

    /// Creates an empty trace drawn as a connected line.
    pub fn line(name: impl Into<String>) -> Self {
        Self::new(name, Style::Line)
    }

    /// Records a single point.
    pub fn record(&mut self, x: f64, y: f64) {
        self.data.push([x, y]);
    }

    /// Returns the recorded points.
    #[must_use]
    pub fn data(&self) -> &[[f64; 2]] {
        &self.data
    }

    /// Opens a blocking egui window displaying this trace.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        show_all(vec![self], config)
    }
}

impl<E, A> Observer<E, A> for PlotObserver
where
    E: Plottable,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.data.extend(event.points());
        None
    }
}

/// Allows `&mut PlotObserver` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<E, A> Observer<E, A> for &mut PlotObserver
where
    E: Plottable,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

/// Opens a blocking egui window with one plot per observer, stacked
/// vertically and sharing the window height.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_all(plots: Vec<PlotObserver>, config: ShowConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = config.title.unwrap_or_default();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PlotApp {
                plots,
                legend: config.legend,
                zero_line: config.zero_line,
            }))
        }),
    )
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    plots: Vec<PlotObserver>,
    legend: bool,
    zero_line: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            #[allow(clippy::cast_precision_loss)]
            let height = ui.available_height() / self.plots.len().max(1) as f32;

            for (i, trace) in self.plots.iter().enumerate() {
                let mut plot = Plot::new(("feigen_plot", i)).height(height).x_axis_label("r");
                if self.legend {
                    plot = plot.legend(Legend::default());
                }
                let zero_line = self.zero_line && trace.style == Style::Line;

                plot.show(ui, |plot_ui| {
                    let points: PlotPoints = trace.data.iter().copied().collect();
                    match trace.style {
                        Style::Line => plot_ui.line(Line::new(points).name(&trace.name)),
                        Style::Points => {
                            plot_ui.points(Points::new(points).name(&trace.name).radius(0.5));
                        }
                    }
                    if zero_line {
                        plot_ui.hline(HLine::new(0.0));
                    }
                });
            }
        });
    }
}
