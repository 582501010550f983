/// Mass-balance forcing models.
///
/// All models implement the `MassBalance` trait from `crate::traits` and
/// return ice-equivalent rates in m s^-1.
pub mod linear;

pub use linear::{LinearMassBalance, ShiftingMassBalance};
