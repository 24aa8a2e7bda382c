//! Control Panel Widget
//! Left side panel with the site selector, payload range and export controls.

use crate::data::{PayloadBounds, SiteFilter, ALL_SITES};
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Current user selection.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    pub csv_path: Option<PathBuf>,
    /// Raw selector value, `"ALL"` or a site name.
    pub site: String,
    pub payload_lo: f64,
    pub payload_hi: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            csv_path: None,
            site: ALL_SITES.to_string(),
            payload_lo: 0.0,
            payload_hi: 0.0,
        }
    }
}

impl UserSettings {
    pub fn site_filter(&self) -> SiteFilter {
        SiteFilter::parse(&self.site)
    }
}

/// Left side control panel.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub sites: Vec<String>,
    pub bounds: Option<PayloadBounds>,
    pub slider_step: f64,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            sites: Vec::new(),
            bounds: None,
            slider_step: 1000.0,
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new(slider_step: f64) -> Self {
        Self {
            slider_step,
            ..Self::default()
        }
    }

    /// Reset controls for a freshly loaded dataset.
    pub fn update_dataset(&mut self, sites: Vec<String>, bounds: Option<PayloadBounds>) {
        self.sites = sites;
        self.bounds = bounds;
        self.settings.site = ALL_SITES.to_string();
        if let Some(b) = bounds {
            self.settings.payload_lo = b.min;
            self.settings.payload_hi = b.max;
        }
    }

    /// Label shown for a selector value.
    pub fn site_label(value: &str) -> &str {
        if value == ALL_SITES {
            "All Sites"
        } else {
            value
        }
    }

    /// Keep `lo <= hi` after one end moved; the end the user did not touch gives way.
    pub fn enforce_order(&mut self, lo_moved: bool) {
        if self.settings.payload_lo > self.settings.payload_hi {
            if lo_moved {
                self.settings.payload_hi = self.settings.payload_lo;
            } else {
                self.settings.payload_lo = self.settings.payload_hi;
            }
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🚀 Launch Records")
                    .size(22.0)
                    .color(Color32::from_rgb(80, 61, 54)),
            );
            ui.label(RichText::new("Dashboard").size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file loaded".to_string());
                    ui.label(RichText::new(&path_text).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Open CSV").clicked() {
                            action = ControlPanelAction::OpenCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Site =====
        ui.label(RichText::new("📍 Launch Site").size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("site")
            .width(250.0)
            .selected_text(Self::site_label(&self.settings.site))
            .show_ui(ui, |ui| {
                let options = std::iter::once(ALL_SITES.to_string()).chain(self.sites.iter().cloned());
                for value in options {
                    if ui
                        .selectable_label(self.settings.site == value, Self::site_label(&value))
                        .clicked()
                        && self.settings.site != value
                    {
                        self.settings.site = value;
                        action = ControlPanelAction::SelectionChanged;
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Payload Range =====
        ui.label(RichText::new("⚖ Payload range (Kg)").size(14.0).strong());
        ui.add_space(5.0);

        match self.bounds {
            Some(bounds) => {
                let lo_changed = ui
                    .add(
                        egui::Slider::new(&mut self.settings.payload_lo, bounds.min..=bounds.max)
                            .step_by(self.slider_step)
                            .text("Min"),
                    )
                    .changed();
                if lo_changed {
                    self.enforce_order(true);
                }

                let hi_changed = ui
                    .add(
                        egui::Slider::new(&mut self.settings.payload_hi, bounds.min..=bounds.max)
                            .step_by(self.slider_step)
                            .text("Max"),
                    )
                    .changed();
                if hi_changed {
                    self.enforce_order(false);
                }

                if lo_changed || hi_changed {
                    action = ControlPanelAction::SelectionChanged;
                }

                if ui.small_button("Reset range").clicked() {
                    self.settings.payload_lo = bounds.min;
                    self.settings.payload_hi = bounds.max;
                    action = ControlPanelAction::SelectionChanged;
                }
            }
            None => {
                ui.label(RichText::new("No payload data").color(Color32::GRAY));
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    OpenCsv,
    SelectionChanged,
    ExportPng,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ControlPanel {
        let mut panel = ControlPanel::new(1000.0);
        panel.update_dataset(
            vec!["siteA".into(), "siteB".into()],
            Some(PayloadBounds {
                min: 0.0,
                max: 9600.0,
            }),
        );
        panel
    }

    #[test]
    fn new_dataset_selects_everything() {
        let mut p = panel();
        p.settings.site = "siteB".into();
        p.update_dataset(
            vec!["siteC".into()],
            Some(PayloadBounds {
                min: 100.0,
                max: 200.0,
            }),
        );
        assert_eq!(p.settings.site_filter(), SiteFilter::All);
        assert_eq!((p.settings.payload_lo, p.settings.payload_hi), (100.0, 200.0));
    }

    #[test]
    fn moving_lo_past_hi_drags_hi() {
        let mut p = panel();
        p.settings.payload_hi = 3000.0;
        p.settings.payload_lo = 5000.0;
        p.enforce_order(true);
        assert_eq!((p.settings.payload_lo, p.settings.payload_hi), (5000.0, 5000.0));
    }

    #[test]
    fn moving_hi_below_lo_drags_lo() {
        let mut p = panel();
        p.settings.payload_lo = 4000.0;
        p.settings.payload_hi = 1000.0;
        p.enforce_order(false);
        assert_eq!((p.settings.payload_lo, p.settings.payload_hi), (1000.0, 1000.0));
    }

    #[test]
    fn sentinel_has_friendly_label() {
        assert_eq!(ControlPanel::site_label("ALL"), "All Sites");
        assert_eq!(ControlPanel::site_label("KSC LC-39A"), "KSC LC-39A");
    }
}
