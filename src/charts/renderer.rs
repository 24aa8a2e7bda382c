//! Static Chart Renderer
//! Writes the outcome-share and payload-correlation charts to a PNG with plotters.
//!
//! Layout: share chart on the left half, scatter on the right half, each with
//! its own title. Colors match the interactive charts.

use crate::charts::plotter::ChartPlotter;
use crate::stats::{OutcomeSummary, PayloadSelection};
use egui::Color32;
use log::info;
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart drawing failed: {0}")]
    Draw(String),
}

pub const DEFAULT_SIZE: (u32, u32) = (1600, 700);

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// File name for an export of the given selection.
    pub fn export_file_name(selection: &PayloadSelection) -> String {
        let site: String = selection
            .site
            .to_string()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!(
            "launch_dashboard_{}_{:.0}-{:.0}.png",
            site,
            selection.range.lo(),
            selection.range.hi()
        )
    }

    /// Render both charts side by side into `dir`, returning the written path.
    pub fn export_png(
        summary: &OutcomeSummary,
        selection: &PayloadSelection,
        categories: &[String],
        dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let path = dir.join(Self::export_file_name(selection));
        Self::render_png(summary, selection, categories, &path, DEFAULT_SIZE)
            .map_err(|e| RenderError::Draw(e.to_string()))?;
        info!("Exported charts to {}", path.display());
        Ok(path)
    }

    fn render_png(
        summary: &OutcomeSummary,
        selection: &PayloadSelection,
        categories: &[String],
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;

        let panels = root.split_evenly((1, 2));
        Self::draw_pie(&panels[0], summary)?;
        Self::draw_scatter(&panels[1], selection, categories)?;

        root.present()?;
        Ok(())
    }

    fn draw_pie<DB: DrawingBackend>(
        area: &DrawingArea<DB, plotters::coord::Shift>,
        summary: &OutcomeSummary,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        DB::ErrorType: 'static,
    {
        let area = area.titled(&summary.title(), ("sans-serif", 24))?;

        let palette = ChartPlotter::slice_colors(summary);
        let mut sizes = Vec::new();
        let mut colors = Vec::new();
        let mut labels = Vec::new();
        for (i, (label, value)) in summary.slices().into_iter().enumerate() {
            if value > 0.0 {
                sizes.push(value);
                colors.push(Self::rgb(palette.get(i).copied().unwrap_or(Color32::GRAY)));
                labels.push(label);
            }
        }

        let (w, h) = area.dim_in_pixel();
        if sizes.is_empty() {
            area.draw(&Text::new(
                "No launches for this selection",
                (w as i32 / 2 - 120, h as i32 / 2),
                ("sans-serif", 18),
            ))?;
            return Ok(());
        }

        let center = (w as i32 / 2, h as i32 / 2);
        let radius = w.min(h) as f64 * 0.35;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
        area.draw(&pie)?;
        Ok(())
    }

    fn draw_scatter<DB: DrawingBackend>(
        area: &DrawingArea<DB, plotters::coord::Shift>,
        selection: &PayloadSelection,
        categories: &[String],
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        DB::ErrorType: 'static,
    {
        let (x_min, x_max) = selection.axis_bounds;

        let mut chart = ChartBuilder::on(area)
            .caption(selection.title(), ("sans-serif", 20))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, -0.25f64..1.25f64)?;

        chart
            .configure_mesh()
            .x_desc("Payload Mass (kg)")
            .y_desc("class")
            .draw()?;

        for (category, points) in selection.by_category() {
            let idx = categories.iter().position(|c| *c == category).unwrap_or(0);
            let color = Self::rgb(ChartPlotter::palette_color(idx));

            chart
                .draw_series(
                    points
                        .iter()
                        .map(|p| Circle::new((p[0], p[1]), 5, color.filled())),
                )?
                .label(category)
                .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
        }

        if !selection.is_empty() {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }
        Ok(())
    }

    fn rgb(color: Color32) -> RGBColor {
        RGBColor(color.r(), color.g(), color.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, LaunchRecord, SiteFilter};
    use crate::stats::{PayloadRange, PayloadSelector};

    #[test]
    fn export_name_is_filesystem_safe() {
        let ds = Dataset::new(vec![LaunchRecord::new("CCAFS LC-40", Some(500.0), 1, "FT")]);
        let range = PayloadRange::new(0.0, 9600.0).unwrap();
        let sel = PayloadSelector::select(&ds, &SiteFilter::Site("CCAFS LC-40".into()), &range);
        assert_eq!(
            StaticChartRenderer::export_file_name(&sel),
            "launch_dashboard_CCAFS_LC_40_0-9600.png"
        );

        let all = PayloadSelector::select(&ds, &SiteFilter::All, &range);
        assert_eq!(
            StaticChartRenderer::export_file_name(&all),
            "launch_dashboard_ALL_0-9600.png"
        );
    }
}
