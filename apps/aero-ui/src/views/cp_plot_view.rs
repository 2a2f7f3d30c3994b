use aero_app::SimStore;
use aero_app::view::EMPTY_MESSAGE;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

#[derive(Default)]
pub struct CpPlotView {
    show_points: bool,
}

impl CpPlotView {
    pub fn show(&mut self, ui: &mut egui::Ui, store: &SimStore) {
        ui.horizontal(|ui| {
            ui.heading("Surface pressure");
            ui.separator();
            ui.checkbox(&mut self.show_points, "Markers");
        });
        ui.separator();

        let Some(data) = store.data() else {
            ui.label(EMPTY_MESSAGE);
            return;
        };

        // Aerodynamic convention: suction plotted upward.
        let points: Vec<[f64; 2]> = data.points().map(|(x, _, cp)| [x, -cp]).collect();
        let show_points = self.show_points;

        Plot::new("cp_plot")
            .legend(Legend::default())
            .x_axis_label("x (m)")
            .y_axis_label("-Cp")
            .show(ui, |plot_ui| {
                let label = store.params().shape.label();
                plot_ui.line(Line::new(PlotPoints::from(points.clone())).name(label));
                if show_points {
                    plot_ui.points(Points::new(PlotPoints::from(points)).radius(2.0));
                }
            });
    }
}
