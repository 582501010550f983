/// Physics and timestep-control parameters for the evolution model.
use crate::constants::{CFL_DEFAULT, FS_DEFAULT, GLEN_A_DEFAULT, SEC_IN_YEAR};

#[derive(Debug, Clone, Copy)]
pub struct PhysicsParams {
    /// Glen flow-law (creep) coefficient [Pa^-3 s^-1].
    pub glen_a: f64,
    /// Basal-sliding coefficient [Pa^-3 s^-1 m]. Zero disables sliding.
    pub fs: f64,
    /// CFL number for the explicit scheme [-]. Range (0, 1].
    pub cfl_number: f64,
    /// Maximum substep length [s]. Caps the timestep even when the CFL
    /// criterion would allow more.
    pub max_dt_s: f64,
}

impl PhysicsParams {
    /// Create parameters with validation.
    ///
    /// `glen_a` or `fs` of zero degenerates the corresponding flux term to
    /// zero; that is a legitimate physical regime, not an error.
    pub fn new(glen_a: f64, fs: f64) -> Result<Self, String> {
        let p = Self {
            glen_a,
            fs,
            cfl_number: CFL_DEFAULT,
            max_dt_s: SEC_IN_YEAR,
        };
        p.validate()?;
        Ok(p)
    }

    /// Override the CFL number.
    pub fn with_cfl_number(mut self, cfl_number: f64) -> Result<Self, String> {
        self.cfl_number = cfl_number;
        self.validate()?;
        Ok(self)
    }

    /// Override the maximum substep length [s].
    pub fn with_max_dt_s(mut self, max_dt_s: f64) -> Result<Self, String> {
        self.max_dt_s = max_dt_s;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.glen_a.is_finite() || self.glen_a < 0.0 {
            return Err(format!("glen_a = {} must be finite and >= 0", self.glen_a));
        }
        if !self.fs.is_finite() || self.fs < 0.0 {
            return Err(format!("fs = {} must be finite and >= 0", self.fs));
        }
        if !self.cfl_number.is_finite() || self.cfl_number <= 0.0 || self.cfl_number > 1.0 {
            return Err(format!(
                "cfl_number = {} is out of bounds (0, 1]",
                self.cfl_number
            ));
        }
        if !self.max_dt_s.is_finite() || self.max_dt_s <= 0.0 {
            return Err(format!("max_dt_s = {} must be finite and > 0", self.max_dt_s));
        }
        Ok(())
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            glen_a: GLEN_A_DEFAULT,
            fs: FS_DEFAULT,
            cfl_number: CFL_DEFAULT,
            max_dt_s: SEC_IN_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PhysicsParams::default().validate().is_ok());
    }

    #[test]
    fn zero_flow_parameters_are_legitimate() {
        assert!(PhysicsParams::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_negative_coefficients() {
        assert!(PhysicsParams::new(-1e-24, 0.0).is_err());
        assert!(PhysicsParams::new(GLEN_A_DEFAULT, -1e-20).is_err());
    }

    #[test]
    fn rejects_bad_cfl() {
        let p = PhysicsParams::default();
        assert!(p.with_cfl_number(0.0).is_err());
        assert!(p.with_cfl_number(1.5).is_err());
        assert!(p.with_cfl_number(0.05).is_ok());
    }

    #[test]
    fn rejects_bad_max_dt() {
        let p = PhysicsParams::default();
        assert!(p.with_max_dt_s(0.0).is_err());
        assert!(p.with_max_dt_s(f64::INFINITY).is_err());
        assert!(p.with_max_dt_s(3600.0).is_ok());
    }
}
