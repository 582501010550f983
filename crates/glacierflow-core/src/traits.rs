/// Core trait for mass-balance forcing models.
///
/// The evolution model treats mass balance as a pluggable pure function of
/// surface elevation and time. Implementations must be side-effect free:
/// the same (elevation, time) pair always yields the same rate.
use crate::constants::SEC_IN_YEAR;

pub trait MassBalance {
    /// Ice-equivalent mass-balance rate at `elevation_m` and `time_s` [m s^-1].
    ///
    /// Positive is accumulation, negative is ablation. NaN or infinite
    /// elevation propagates NaN; no panics for any f64 input.
    fn mass_balance(&self, elevation_m: f64, time_s: f64) -> f64;

    /// Evaluate over a slice of elevations, returning a same-length vector.
    fn mass_balance_slice(&self, elevations_m: &[f64], time_s: f64) -> Vec<f64> {
        elevations_m
            .iter()
            .map(|&z| self.mass_balance(z, time_s))
            .collect()
    }

    /// Annual-rate convenience [m yr^-1].
    fn annual_mass_balance(&self, elevation_m: f64, time_s: f64) -> f64 {
        self.mass_balance(elevation_m, time_s) * SEC_IN_YEAR
    }
}
