//! aero-core: shared data model for aerosim.
//!
//! Contains:
//! - params (request parameters + partial updates)
//! - response (solver result + boundary validation)
//! - shape (airfoil identifiers and NACA 4-digit codes)
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod params;
pub mod response;
pub mod shape;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use params::{ParamsPatch, SimParams};
pub use response::SimResponse;
pub use shape::{AirfoilShape, NacaCode};
