//! Airfoil view model.
//!
//! Turns a [`aero_core::SimResponse`] into screen-space geometry and colors.
//! Nothing here depends on a GUI toolkit.

pub mod color;
pub mod scale;
pub mod scene;
pub mod svg;

pub use color::{Rgba, SequentialScale, viridis};
pub use scale::LinearScale;
pub use scene::{AirfoilScene, Anchor, Label, SceneStyle, Segment};
pub use svg::render_svg;

/// Shown in place of the view before the first result arrives.
pub const EMPTY_MESSAGE: &str = "Run a simulation to visualize results.";
