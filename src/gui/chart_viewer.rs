//! Chart Viewer Widget
//! Central scrollable panel with the outcome-share card above the scatter card.

use crate::charts::ChartPlotter;
use crate::stats::{OutcomeSummary, PayloadSelection};
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;
const PIE_HEIGHT: f32 = 380.0;
const SCATTER_HEIGHT: f32 = 380.0;
const BORDER_COLOR: Color32 = Color32::from_rgb(80, 61, 54);

/// Latest results from the two reducers.
#[derive(Default)]
pub struct ChartViewer {
    pub summary: Option<OutcomeSummary>,
    pub selection: Option<PayloadSelection>,
    /// Every booster category in the dataset, fixing scatter colors.
    pub categories: Vec<String>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.summary = None;
        self.selection = None;
        self.categories.clear();
    }

    pub fn set_results(&mut self, summary: OutcomeSummary, selection: PayloadSelection) {
        self.summary = Some(summary);
        self.selection = Some(selection);
    }

    pub fn has_results(&self) -> bool {
        self.summary.is_some() && self.selection.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let (Some(summary), Some(selection)) = (&self.summary, &self.selection) else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("SpaceX Launch Records Dashboard")
                    .size(28.0)
                    .color(BORDER_COLOR),
            );
        });
        ui.add_space(CARD_SPACING);

        let categories = &self.categories;
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::card(ui, &summary.title(), |ui| {
                    ChartPlotter::draw_pie_chart(ui, summary, PIE_HEIGHT);
                });

                ui.add_space(CARD_SPACING);

                Self::card(ui, &selection.title(), |ui| {
                    ui.label(
                        RichText::new(format!("{} launches in range", selection.len()))
                            .size(12.0)
                            .color(Color32::GRAY),
                    );
                    ChartPlotter::draw_scatter_chart(ui, selection, categories, SCATTER_HEIGHT);
                });
            });
    }

    fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.5, BORDER_COLOR))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(18.0).strong());
                    ui.add_space(8.0);
                    add_contents(ui);
                });
            });
    }
}
