use aero_app::ControlInputs;
use aero_app::controls::{
    AOA_RANGE_DEG, AOA_STEP_DEG, NPTS_RANGE, NPTS_STEP, RHO_STEP, VELOCITY_MIN, VELOCITY_STEP,
};
use aero_core::AirfoilShape;

/// What the user did in the controls panel this frame.
#[derive(Debug, Default)]
pub struct ControlsActions {
    pub shape: Option<AirfoilShape>,
    pub inputs: Option<ControlInputs>,
    pub run: bool,
}

#[derive(Default)]
pub struct ControlsView;

impl ControlsView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        shape: &AirfoilShape,
        current: ControlInputs,
        busy: bool,
    ) -> ControlsActions {
        let mut actions = ControlsActions::default();
        let mut inputs = current;

        ui.heading("Controls");
        ui.separator();

        ui.label("Airfoil");
        let mut selected = shape.clone();
        egui::ComboBox::from_id_salt("shape_selector")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for preset in AirfoilShape::presets() {
                    let label = preset.label();
                    ui.selectable_value(&mut selected, preset, label);
                }
            });
        if selected != *shape {
            actions.shape = Some(selected);
        }

        ui.add_space(8.0);
        ui.label("Angle of attack (°)");
        ui.add(
            egui::Slider::new(&mut inputs.aoa_deg, AOA_RANGE_DEG)
                .step_by(AOA_STEP_DEG)
                .fixed_decimals(1)
                .suffix("°"),
        );

        ui.add_space(8.0);
        egui::Grid::new("flow_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Velocity (m/s)");
                ui.add(
                    egui::DragValue::new(&mut inputs.velocity)
                        .speed(VELOCITY_STEP)
                        .range(VELOCITY_MIN..=f64::INFINITY),
                );
                ui.end_row();

                ui.label("Density ρ (kg/m³)");
                ui.add(
                    egui::DragValue::new(&mut inputs.rho)
                        .speed(RHO_STEP)
                        .fixed_decimals(3),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.label("Resolution (points)");
        ui.add(egui::Slider::new(&mut inputs.npts, NPTS_RANGE).step_by(f64::from(NPTS_STEP)));

        if inputs != current {
            actions.inputs = Some(inputs);
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Run").clicked() {
                actions.run = true;
            }
            if busy {
                ui.spinner();
            }
        });

        actions
    }
}
