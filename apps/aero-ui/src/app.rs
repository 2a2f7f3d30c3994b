use crate::views::{AirfoilView, ControlsView, CpPlotView};
use aero_app::{SimSession, SimStatus, format_cl, format_gamma, write_csv, write_svg};
use aero_client::{ApiConfig, HttpClient};
use egui_file_dialog::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct AeroSimApp {
    session: SimSession,
    api_base: String,
    file_dialog: FileDialog,
    export_kind: Option<ExportKind>,
    active_view: ViewTab,
    controls_view: ControlsView,
    airfoil_view: AirfoilView,
    cp_plot_view: CpPlotView,
    last_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Airfoil,
    CpPlot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ExportKind {
    Svg,
    Csv,
}

impl AeroSimApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ApiConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring API environment, using defaults");
            ApiConfig::default()
        });
        let api_base = config.base_url.clone();
        tracing::info!(%api_base, "starting");

        let mut session = SimSession::new(Arc::new(HttpClient::new(config)));
        let ctx = cc.egui_ctx.clone();
        session.set_notifier(move || ctx.request_repaint());
        // Same as the controls settling once on startup.
        session.simulate();

        Self {
            session,
            api_base,
            file_dialog: FileDialog::new(),
            export_kind: None,
            active_view: ViewTab::Airfoil,
            controls_view: ControlsView,
            airfoil_view: AirfoilView::default(),
            cp_plot_view: CpPlotView::default(),
            last_message: None,
        }
    }

    fn start_export(&mut self, kind: ExportKind) {
        self.export_kind = Some(kind);
        self.file_dialog.save_file();
    }

    fn finish_export(&mut self, kind: ExportKind, path: PathBuf) {
        let store = self.session.store();
        let Some(data) = store.data() else {
            self.last_message = Some("Nothing to export yet".to_string());
            return;
        };
        let result = match kind {
            ExportKind::Svg => write_svg(&path, store.params(), data),
            ExportKind::Csv => write_csv(&path, data),
        };
        self.last_message = Some(match result {
            Ok(()) => format!("Exported {}", path.display()),
            Err(e) => format!("Export failed: {}", e),
        });
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        let store = self.session.store();
        ui.horizontal(|ui| {
            let status = store.status();
            let color = match status {
                SimStatus::Error => egui::Color32::LIGHT_RED,
                SimStatus::Ready => egui::Color32::LIGHT_GREEN,
                _ => ui.visuals().text_color(),
            };
            ui.label("Status:");
            ui.colored_label(color, status.label());
            ui.separator();
            ui.label("API:");
            ui.monospace(&self.api_base);
            if let Some(updated) = store.updated_at() {
                ui.separator();
                ui.label(format!("Updated {}", updated.format("%H:%M:%S")));
            }
            if let Some(data) = store.data() {
                ui.separator();
                ui.label(format!(
                    "Cl: {}  |  Gamma: {}  |  {} points",
                    format_cl(data.cl),
                    format_gamma(data.gamma),
                    data.len()
                ));
            }
            if let Some(msg) = &self.last_message {
                ui.separator();
                ui.label(msg);
            }
        });
        if let Some(err) = store.error() {
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }
    }
}

impl eframe::App for AeroSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.tick(now);

        let has_data = self.session.store().data().is_some();
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_view, ViewTab::Airfoil, "Airfoil");
                ui.selectable_value(&mut self.active_view, ViewTab::CpPlot, "Cp(x)");
                ui.separator();
                ui.add_enabled_ui(has_data, |ui| {
                    if ui.button("Export SVG").clicked() {
                        self.start_export(ExportKind::Svg);
                    }
                    if ui.button("Export CSV").clicked() {
                        self.start_export(ExportKind::Csv);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.status_line(ui);
        });

        egui::SidePanel::left("controls")
            .default_width(260.0)
            .show(ctx, |ui| {
                let store = self.session.store();
                let shape = store.params().shape.clone();
                let busy = store.is_loading();
                let inputs = self.session.controls().inputs();

                let actions = self.controls_view.show(ui, &shape, inputs, busy);
                if let Some(inputs) = actions.inputs {
                    self.session.edit_inputs(inputs, now);
                }
                if let Some(shape) = actions.shape {
                    self.session.set_shape(shape);
                }
                if actions.run {
                    self.session.simulate();
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.active_view {
            ViewTab::Airfoil => self.airfoil_view.show(ui, self.session.store()),
            ViewTab::CpPlot => self.cp_plot_view.show(ui, self.session.store()),
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            if let Some(kind) = self.export_kind.take() {
                self.finish_export(kind, path.to_path_buf());
            }
        }

        // Wake up for the debounce deadline even without input.
        if let Some(wait) = self.session.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait.max(Duration::from_millis(10)));
        }
    }
}
