//! Launch Dashboard Main Application
//! Main window with control panel and chart viewer.

use crate::charts::StaticChartRenderer;
use crate::config::DashboardConfig;
use crate::data::{Dataset, DatasetLoader};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::{OutcomeAggregator, PayloadSelector};
use egui::SidePanel;
use log::{debug, error, warn};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Complete { path: PathBuf, dataset: Dataset },
    Error { path: PathBuf, message: String },
}

/// Main application window.
pub struct LaunchDashApp {
    config: DashboardConfig,
    dataset: Option<Arc<Dataset>>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl LaunchDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self {
            control_panel: ControlPanel::new(config.slider_step_kg),
            config,
            dataset: None,
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };

        let startup_path = app.config.data_path.clone();
        app.start_loading(startup_path);
        app
    }

    /// Load a CSV on a background thread.
    fn start_loading(&mut self, path: PathBuf) {
        if self.is_loading {
            return;
        }

        self.control_panel
            .set_status(&format!("Loading {}...", path.display()));
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        let columns = self.config.columns.clone();

        thread::spawn(move || {
            let result = match DatasetLoader::load_csv(&path, &columns) {
                Ok(dataset) => LoadResult::Complete { path, dataset },
                Err(e) => LoadResult::Error {
                    path,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(result);
        });
    }

    fn handle_open_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_loading(path);
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { path, dataset }) => {
                self.is_loading = false;
                self.install_dataset(path, dataset);
            }
            Ok(LoadResult::Error { path, message }) => {
                self.is_loading = false;
                error!("Failed to load {}: {}", path.display(), message);
                self.control_panel
                    .set_status(&format!("Error: {}", message));
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.is_loading = false;
                self.control_panel.set_status("Error: loader stopped");
            }
        }
    }

    fn install_dataset(&mut self, path: PathBuf, dataset: Dataset) {
        let sites = dataset.sites();
        let bounds = dataset.payload_bounds();

        self.chart_viewer.clear();
        self.chart_viewer.categories = dataset.booster_categories();
        self.control_panel.settings.csv_path = Some(path);
        self.control_panel.update_dataset(sites.clone(), bounds);
        self.control_panel.set_status(&format!(
            "Loaded {} launches, {} sites",
            dataset.len(),
            sites.len()
        ));
        self.dataset = Some(Arc::new(dataset));

        self.refresh_charts();
    }

    /// Recompute both chart results from the current selection.
    fn refresh_charts(&mut self) {
        let Some(dataset) = self.dataset.as_deref() else {
            return;
        };

        let settings = &self.control_panel.settings;
        let site = settings.site_filter();
        let range = match PayloadSelector::selection_range(
            dataset,
            settings.payload_lo,
            settings.payload_hi,
        ) {
            Ok(range) => range,
            Err(e) => {
                warn!("Ignoring payload range: {}", e);
                return;
            }
        };
        debug!(
            "Selection changed: site={} range=[{}, {}]",
            site,
            range.lo(),
            range.hi()
        );

        let summary = OutcomeAggregator::aggregate(dataset, &site);
        let selection =
            PayloadSelector::select_with_margin(dataset, &site, &range, self.config.axis_margin_kg);

        self.chart_viewer.set_results(summary, selection);
        self.control_panel.export_enabled = self.chart_viewer.has_results();
    }

    /// Write both charts to a PNG and open it.
    fn handle_export_png(&mut self) {
        let (Some(summary), Some(selection)) =
            (&self.chart_viewer.summary, &self.chart_viewer.selection)
        else {
            self.control_panel.set_status("No charts to export");
            return;
        };

        let dir = self.config.export_dir();
        match StaticChartRenderer::export_png(
            summary,
            selection,
            &self.chart_viewer.categories,
            &dir,
        ) {
            Ok(path) => {
                self.control_panel
                    .set_status(&format!("Exported {}", path.display()));
                if let Err(e) = open::that(&path) {
                    warn!("Could not open {}: {}", path.display(), e);
                }
            }
            Err(e) => {
                error!("{}", e);
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::OpenCsv => self.handle_open_csv(),
                        ControlPanelAction::SelectionChanged => self.refresh_charts(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
