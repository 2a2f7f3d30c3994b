//! Display formatting shared by the UI, the CLI and SVG export.

use aero_core::{SimParams, SimResponse};

/// Lift coefficient, three decimals.
pub fn format_cl(cl: f64) -> String {
    format!("{cl:.3}")
}

/// Circulation, four decimals.
pub fn format_gamma(gamma: f64) -> String {
    format!("{gamma:.4}")
}

/// Angle of attack, one decimal with a degree sign.
pub fn format_aoa(aoa_deg: f64) -> String {
    format!("{aoa_deg:.1}°")
}

/// `Airfoil: NACA0012 | AoA 5.0° | Cl 0.512`
pub fn header_line(params: &SimParams, data: &SimResponse) -> String {
    format!(
        "Airfoil: {} | AoA {} | Cl {}",
        params.shape.as_str().to_uppercase(),
        format_aoa(params.aoa_deg),
        format_cl(data.cl)
    )
}
