//! Chart Plotter Module
//! Interactive outcome-share and payload-correlation charts using egui_plot.

use crate::stats::{OutcomeSummary, PayloadSelection};
use egui::{Color32, RichText};
use egui_plot::{Legend, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Polygon, Text};
use std::f64::consts::{FRAC_PI_2, TAU};

pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const FAILURE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Largest arc drawn as one polygon; keeps every piece convex.
const MAX_PIECE_ANGLE: f64 = FRAC_PI_2;
const ARC_STEP: f64 = TAU / 120.0;

/// One slice of a pie chart, angles in radians counter-clockwise from +x.
#[derive(Debug, Clone, PartialEq)]
pub struct PieWedge {
    pub label: String,
    pub value: f64,
    pub share: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieWedge {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for a series by its index in a stable ordering.
    pub fn palette_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Slice colors for an outcome summary.
    pub fn slice_colors(summary: &OutcomeSummary) -> Vec<Color32> {
        match summary {
            OutcomeSummary::BySite(sites) => {
                (0..sites.len()).map(Self::palette_color).collect()
            }
            OutcomeSummary::SingleSite { .. } => vec![SUCCESS_COLOR, FAILURE_COLOR],
        }
    }

    /// Split labelled values into wedges starting at 12 o'clock, clockwise.
    ///
    /// Non-positive values get no wedge. A zero total yields no wedges.
    pub fn pie_wedges(slices: &[(String, f64)]) -> Vec<PieWedge> {
        let total: f64 = slices.iter().map(|(_, v)| v.max(0.0)).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut angle = FRAC_PI_2;
        slices
            .iter()
            .filter(|(_, v)| *v > 0.0)
            .map(|(label, value)| {
                let share = value / total;
                let start_angle = angle;
                angle -= share * TAU;
                PieWedge {
                    label: label.clone(),
                    value: *value,
                    share,
                    start_angle,
                    end_angle: angle,
                }
            })
            .collect()
    }

    /// Convex outline pieces for one wedge on a unit circle.
    pub fn wedge_pieces(wedge: &PieWedge) -> Vec<Vec<[f64; 2]>> {
        let sweep = wedge.start_angle - wedge.end_angle;
        let n_pieces = (sweep / MAX_PIECE_ANGLE - 1e-9).ceil().max(1.0) as usize;
        let piece_sweep = sweep / n_pieces as f64;

        (0..n_pieces)
            .map(|p| {
                let from = wedge.start_angle - p as f64 * piece_sweep;
                let steps = (piece_sweep / ARC_STEP).ceil().max(1.0) as usize;
                let mut outline = Vec::with_capacity(steps + 2);
                outline.push([0.0, 0.0]);
                for s in 0..=steps {
                    let a = from - piece_sweep * s as f64 / steps as f64;
                    outline.push([a.cos(), a.sin()]);
                }
                outline
            })
            .collect()
    }

    /// Draw the outcome share chart.
    pub fn draw_pie_chart(ui: &mut egui::Ui, summary: &OutcomeSummary, height: f32) {
        let wedges = Self::pie_wedges(&summary.slices());
        let colors = Self::slice_colors(summary);
        let slices = summary.slices();

        if wedges.is_empty() {
            ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No launches for this selection").size(14.0));
                });
            });
            return;
        }

        Plot::new("outcome_pie")
            .height(height)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for wedge in &wedges {
                    let idx = slices
                        .iter()
                        .position(|(label, _)| *label == wedge.label)
                        .unwrap_or(0);
                    let color = colors.get(idx).copied().unwrap_or(Color32::GRAY);

                    for piece in Self::wedge_pieces(wedge) {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(piece))
                                .fill_color(color.gamma_multiply(0.85))
                                .stroke(egui::Stroke::new(1.0, Color32::WHITE))
                                .name(&wedge.label),
                        );
                    }

                    let mid = wedge.mid_angle();
                    plot_ui.text(Text::new(
                        PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                        RichText::new(format!("{:.1}%", wedge.share * 100.0))
                            .size(12.0)
                            .color(Color32::WHITE)
                            .strong(),
                    ));
                }
            });
    }

    /// Draw payload mass vs outcome, one series per booster category.
    ///
    /// `categories` fixes the color of each category across selections.
    pub fn draw_scatter_chart(
        ui: &mut egui::Ui,
        selection: &PayloadSelection,
        categories: &[String],
        height: f32,
    ) {
        let (x_min, x_max) = selection.axis_bounds;

        Plot::new("payload_scatter")
            .height(height)
            .x_axis_label("Payload Mass (kg)")
            .y_axis_label("class")
            .allow_scroll(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (category, points) in selection.by_category() {
                    let idx = categories
                        .iter()
                        .position(|c| *c == category)
                        .unwrap_or(0);

                    plot_ui.points(
                        Points::new(PlotPoints::from(points))
                            .radius(4.0)
                            .color(Self::palette_color(idx))
                            .name(&category),
                    );
                }

                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, -0.25], [x_max, 1.25]));
            });
    }
}
