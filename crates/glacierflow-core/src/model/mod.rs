/// Flux-based evolution model: explicit time-stepping of the glacier
/// mass-continuity equation on a staggered grid.
pub mod diagnostics;
pub mod flux;
pub mod params;
pub mod run;

pub use diagnostics::{Diagnostics, DiagnosticsTimeseries, RunOutput};
pub use params::PhysicsParams;
pub use run::FlowlineModel;
