/// Linear-gradient mass-balance models.
///
/// `mb(z) = (z - ELA) * gradient`, with the gradient supplied in mm of ice
/// per meter of elevation per year and the output converted to m s^-1.
use crate::constants::{MM_TO_M, SEC_IN_YEAR};
use crate::traits::MassBalance;

/// Convert (elevation, ELA, gradient) to an ice-equivalent rate [m s^-1].
#[inline]
fn linear_rate(elevation_m: f64, ela_m: f64, grad_mm_per_m_yr: f64) -> f64 {
    (elevation_m - ela_m) * grad_mm_per_m_yr * MM_TO_M / SEC_IN_YEAR
}

/// Time-invariant linear mass balance: a fixed equilibrium-line altitude and
/// a fixed vertical gradient.
#[derive(Debug, Clone, Copy)]
pub struct LinearMassBalance {
    /// Equilibrium-line altitude [m].
    pub ela_m: f64,
    /// Vertical mass-balance gradient [mm m^-1 yr^-1].
    pub grad_mm_per_m_yr: f64,
}

impl LinearMassBalance {
    pub fn new(ela_m: f64, grad_mm_per_m_yr: f64) -> Result<Self, String> {
        if !ela_m.is_finite() {
            return Err(format!("ela_m = {} is not finite", ela_m));
        }
        if !grad_mm_per_m_yr.is_finite() {
            return Err(format!("grad_mm_per_m_yr = {} is not finite", grad_mm_per_m_yr));
        }
        Ok(Self {
            ela_m,
            grad_mm_per_m_yr,
        })
    }
}

impl MassBalance for LinearMassBalance {
    fn mass_balance(&self, elevation_m: f64, _time_s: f64) -> f64 {
        linear_rate(elevation_m, self.ela_m, self.grad_mm_per_m_yr)
    }
}

/// Linear mass balance with an ELA that drifts linearly in time, clamped at
/// an optional final value. Models simple warming/cooling climate scenarios.
#[derive(Debug, Clone, Copy)]
pub struct ShiftingMassBalance {
    /// ELA at t = 0 [m].
    pub ela0_m: f64,
    /// Vertical mass-balance gradient [mm m^-1 yr^-1].
    pub grad_mm_per_m_yr: f64,
    /// ELA drift rate [m yr^-1]. Positive raises the ELA over time.
    pub trend_m_per_yr: f64,
    /// ELA value at which the drift stops, if any [m].
    pub final_ela_m: Option<f64>,
}

impl ShiftingMassBalance {
    pub fn new(
        ela0_m: f64,
        grad_mm_per_m_yr: f64,
        trend_m_per_yr: f64,
        final_ela_m: Option<f64>,
    ) -> Result<Self, String> {
        // Reuse the finiteness checks on the shared fields.
        LinearMassBalance::new(ela0_m, grad_mm_per_m_yr)?;
        if !trend_m_per_yr.is_finite() {
            return Err(format!("trend_m_per_yr = {} is not finite", trend_m_per_yr));
        }
        if let Some(f) = final_ela_m {
            if !f.is_finite() {
                return Err(format!("final_ela_m = {} is not finite", f));
            }
            // The drift must actually head toward the final value.
            if trend_m_per_yr > 0.0 && f < ela0_m {
                return Err(format!(
                    "final_ela_m = {} is below ela0_m = {} but the trend is positive",
                    f, ela0_m
                ));
            }
            if trend_m_per_yr < 0.0 && f > ela0_m {
                return Err(format!(
                    "final_ela_m = {} is above ela0_m = {} but the trend is negative",
                    f, ela0_m
                ));
            }
        }
        Ok(Self {
            ela0_m,
            grad_mm_per_m_yr,
            trend_m_per_yr,
            final_ela_m,
        })
    }

    /// ELA at a given model time [m].
    pub fn ela_at(&self, time_s: f64) -> f64 {
        let drifted = self.ela0_m + self.trend_m_per_yr * time_s / SEC_IN_YEAR;
        match self.final_ela_m {
            Some(f) if self.trend_m_per_yr > 0.0 => drifted.min(f),
            Some(f) if self.trend_m_per_yr < 0.0 => drifted.max(f),
            _ => drifted,
        }
    }
}

impl MassBalance for ShiftingMassBalance {
    fn mass_balance(&self, elevation_m: f64, time_s: f64) -> f64 {
        linear_rate(elevation_m, self.ela_at(time_s), self.grad_mm_per_m_yr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEC_IN_YEAR;

    #[test]
    fn zero_at_the_ela() {
        let mb = LinearMassBalance::new(3000.0, 4.0).unwrap();
        assert_eq!(mb.mass_balance(3000.0, 0.0), 0.0);
    }

    #[test]
    fn positive_above_negative_below() {
        let mb = LinearMassBalance::new(3000.0, 4.0).unwrap();
        assert!(mb.mass_balance(3400.0, 0.0) > 0.0);
        assert!(mb.mass_balance(2600.0, 0.0) < 0.0);
    }

    #[test]
    fn annual_rate_units() {
        // 100 m above the ELA at 4 mm/m/yr -> 400 mm/yr = 0.4 m/yr.
        let mb = LinearMassBalance::new(3000.0, 4.0).unwrap();
        assert!((mb.annual_mass_balance(3100.0, 0.0) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn scalar_and_slice_agree() {
        let mb = LinearMassBalance::new(2800.0, 3.0).unwrap();
        let elevs = [2500.0, 2800.0, 3200.0];
        let rates = mb.mass_balance_slice(&elevs, 0.0);
        assert_eq!(rates.len(), 3);
        for (i, &z) in elevs.iter().enumerate() {
            assert_eq!(rates[i], mb.mass_balance(z, 0.0));
        }
    }

    #[test]
    fn nan_elevation_propagates_nan() {
        let mb = LinearMassBalance::new(3000.0, 4.0).unwrap();
        assert!(mb.mass_balance(f64::NAN, 0.0).is_nan());
        assert!(mb.mass_balance(f64::INFINITY, 0.0).is_infinite());
    }

    #[test]
    fn rejects_non_finite_params() {
        assert!(LinearMassBalance::new(f64::NAN, 4.0).is_err());
        assert!(LinearMassBalance::new(3000.0, f64::INFINITY).is_err());
    }

    // -- ShiftingMassBalance --

    #[test]
    fn shifting_ela_drifts_and_clamps() {
        let mb = ShiftingMassBalance::new(3000.0, 4.0, 2.0, Some(3100.0)).unwrap();
        assert_eq!(mb.ela_at(0.0), 3000.0);
        assert!((mb.ela_at(10.0 * SEC_IN_YEAR) - 3020.0).abs() < 1e-9);
        // After 50 years the drift would reach 3100; after 100 it stays there.
        assert_eq!(mb.ela_at(100.0 * SEC_IN_YEAR), 3100.0);
    }

    #[test]
    fn shifting_matches_linear_at_t0() {
        let shifting = ShiftingMassBalance::new(3000.0, 4.0, 1.5, None).unwrap();
        let linear = LinearMassBalance::new(3000.0, 4.0).unwrap();
        assert_eq!(
            shifting.mass_balance(3250.0, 0.0),
            linear.mass_balance(3250.0, 0.0)
        );
    }

    #[test]
    fn shifting_rejects_inconsistent_final_ela() {
        assert!(ShiftingMassBalance::new(3000.0, 4.0, 2.0, Some(2900.0)).is_err());
        assert!(ShiftingMassBalance::new(3000.0, 4.0, -2.0, Some(3100.0)).is_err());
    }
}
