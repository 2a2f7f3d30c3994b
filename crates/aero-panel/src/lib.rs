//! 2D vortex panel solver for NACA 4-digit airfoils.
//!
//! Reference implementation of the `/simulate2d` computation: a closed
//! airfoil contour is split into straight panels, one point vortex sits at
//! each panel midpoint, and the vortex strengths are found by least squares
//! from the no-through-flow condition plus a Kutta condition at the trailing
//! edge.

pub mod error;
pub mod geometry;
pub mod influence;
pub mod solve;

pub use error::{PanelError, PanelResult};
pub use geometry::{Contour, Panels, naca4_contour};
pub use solve::{FlowConditions, PanelSolution, SolverConfig, solve, solve_naca};
