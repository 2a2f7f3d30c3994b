//! Shared application service layer for aerosim.
//!
//! This crate provides a unified interface for both CLI and GUI frontends:
//! the parameter store, debounced control inputs, background simulation
//! dispatch, the airfoil view model and file export.

pub mod controls;
pub mod debounce;
pub mod error;
pub mod export;
pub mod format;
pub mod local;
pub mod session;
pub mod store;
pub mod view;
pub mod worker;

// Re-export key types for convenience
pub use controls::{ControlInputs, ControlsModel};
pub use debounce::Debounced;
pub use error::{AppError, AppResult};
pub use export::{cp_table_csv, load_params, write_csv, write_svg};
pub use format::{format_aoa, format_cl, format_gamma, header_line};
pub use local::LocalSolver;
pub use session::SimSession;
pub use store::{Completion, SimStatus, SimStore, SimTicket, StoreEvent, SubscriptionId};
pub use view::{AirfoilScene, LinearScale, Rgba, SceneStyle, SequentialScale, render_svg};
pub use worker::{SimWorker, WorkerMessage};
