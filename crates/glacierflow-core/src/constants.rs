//! Physical constants and unit-conversion factors.
//!
//! Internal units are meters and seconds everywhere. Caller-facing time
//! arguments are years and caller-facing area/volume are km²/km³; the
//! conversions below are the only place the factors live.

/// Seconds in a 365-day model year [s].
pub const SEC_IN_YEAR: f64 = 31_536_000.0;

/// Ice density [kg m^-3].
pub const RHO_ICE: f64 = 900.0;

/// Gravitational acceleration [m s^-2].
pub const G: f64 = 9.81;

/// Glen flow-law exponent [-].
pub const GLEN_N: i32 = 3;

/// Default Glen flow-law (creep) coefficient [Pa^-3 s^-1].
pub const GLEN_A_DEFAULT: f64 = 2.4e-24;

/// Default basal-sliding coefficient [Pa^-3 s^-1 m]. Zero: no sliding.
pub const FS_DEFAULT: f64 = 0.0;

/// Default CFL number for the explicit scheme [-].
pub const CFL_DEFAULT: f64 = 0.02;

/// Minimum surface width used in the mass-balance source term [m].
/// Parabolic sections have zero surface width at zero thickness; the floor
/// lets bare nodes accumulate ice.
pub const MIN_SOURCE_WIDTH_M: f64 = 10.0;

/// m² to km².
pub const M2_TO_KM2: f64 = 1e-6;

/// m³ to km³.
pub const M3_TO_KM3: f64 = 1e-9;

/// mm to m.
pub const MM_TO_M: f64 = 1e-3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sec_in_year_is_365_days() {
        assert_eq!(SEC_IN_YEAR, 365.0 * 24.0 * 3600.0);
    }

    #[test]
    fn unit_factors_are_exact() {
        assert_eq!(1_000_000.0 * M2_TO_KM2, 1.0);
        assert_eq!(1_000_000_000.0 * M3_TO_KM3, 1.0);
    }
}
