/// Per-interface flux process functions.
///
/// Pure functions implementing the shallow-ice flux formulas on a staggered
/// grid. Interface j sits between nodes j-1 and j; signs follow the
/// downstream coordinate, so ice flowing downglacier has negative slope and
/// positive flux.
use crate::constants::{G, GLEN_N, RHO_ICE};

/// Deformation prefactor fd = 2 A / (n + 2) [Pa^-3 s^-1].
#[inline]
pub fn deformation_prefactor(glen_a: f64) -> f64 {
    2.0 * glen_a / (GLEN_N as f64 + 2.0)
}

/// Ice flux per unit width at an interface [m² s^-1].
///
/// q = -(fd * h^(n+2) + fs * h^(n+1)) * (rho g)^n * |slope|^(n-1) * slope
///
/// The deformation term carries h^(n+2), the sliding term h^(n+1); both
/// vanish where thickness is zero, so no flux ever crosses the ice margin.
#[inline]
pub fn unit_flux(h_stag: f64, slope: f64, glen_a: f64, fs: f64) -> f64 {
    if h_stag <= 0.0 {
        return 0.0;
    }
    let fd = deformation_prefactor(glen_a);
    let rhog_n = (RHO_ICE * G).powi(GLEN_N);
    let slope_n = slope.abs().powi(GLEN_N - 1) * slope;
    -(fd * h_stag.powi(GLEN_N + 2) + fs * h_stag.powi(GLEN_N + 1)) * rhog_n * slope_n
}

/// Depth-averaged ice velocity at an interface [m s^-1]: unit flux / thickness.
#[inline]
pub fn depth_avg_velocity(h_stag: f64, slope: f64, glen_a: f64, fs: f64) -> f64 {
    if h_stag <= 0.0 {
        return 0.0;
    }
    unit_flux(h_stag, slope, glen_a, fs) / h_stag
}

/// Stable explicit timestep from the maximum interface speed [s].
///
/// dt = cfl * dx / max_speed, capped at `max_dt`. A motionless glacier
/// (max_speed = 0) gets the full `max_dt`.
#[inline]
pub fn stable_dt(max_speed: f64, dx: f64, cfl_number: f64, max_dt: f64) -> f64 {
    if max_speed <= 0.0 {
        return max_dt;
    }
    (cfl_number * dx / max_speed).min(max_dt)
}
