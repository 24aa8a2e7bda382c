//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, PieWedge, FAILURE_COLOR, PALETTE, SUCCESS_COLOR};
pub use renderer::{RenderError, StaticChartRenderer};
