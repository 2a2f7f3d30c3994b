pub mod airfoil_view;
pub mod controls_view;
pub mod cp_plot_view;

pub use airfoil_view::AirfoilView;
pub use controls_view::{ControlsActions, ControlsView};
pub use cp_plot_view::CpPlotView;

pub(crate) fn color32(c: aero_app::Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}
