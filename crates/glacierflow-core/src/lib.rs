/// glacierflow — 1-D flowline glacier evolution in Rust.
///
/// Linear mass-balance forcing plus flux-based surface evolution: the
/// shallow-ice mass-continuity equation solved on a staggered grid with
/// CFL-controlled explicit timestepping.
pub mod constants;
pub mod flowline;
pub mod massbalance;
pub mod model;
pub mod traits;
