/// Glacier cross-section shape families.
///
/// A closed set of tagged variants, each supplying its own width-from-thickness
/// and area-from-thickness formulas. The per-node `width` parameter stored on
/// the flowline means different things per variant:
/// - `Rectangular`: the (constant) surface width [m].
/// - `Trapezoidal`: the bottom width w0 [m]; surface width is w0 + lambda * h.
/// - `Parabolic`: the parabolic shape factor Ps [m^-1]; surface width is
///   sqrt(4 * h / Ps).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BedShape {
    /// Vertical side walls.
    Rectangular,
    /// Side walls opening at a total rate of `lambda` meters of width per
    /// meter of thickness. `lambda = 0` degenerates to rectangular.
    Trapezoidal { lambda: f64 },
    /// Parabolic valley profile.
    Parabolic,
}

impl BedShape {
    /// Validate the variant's own parameters.
    pub fn validate(&self) -> Result<(), String> {
        if let BedShape::Trapezoidal { lambda } = self {
            if !lambda.is_finite() || *lambda < 0.0 {
                return Err(format!("trapezoid lambda = {} must be finite and >= 0", lambda));
            }
        }
        Ok(())
    }

    /// Validate a per-node width parameter for this shape.
    pub fn validate_width(&self, width: f64) -> Result<(), String> {
        if !width.is_finite() {
            return Err(format!("width parameter {} is not finite", width));
        }
        match self {
            BedShape::Rectangular | BedShape::Trapezoidal { .. } => {
                if width <= 0.0 {
                    return Err(format!("width parameter {} must be > 0", width));
                }
            }
            BedShape::Parabolic => {
                if width <= 0.0 {
                    return Err(format!("parabolic shape factor {} must be > 0", width));
                }
            }
        }
        Ok(())
    }

    /// Surface width [m] at ice thickness `h` [m].
    pub fn surface_width(&self, width: f64, h: f64) -> f64 {
        match self {
            BedShape::Rectangular => width,
            BedShape::Trapezoidal { lambda } => width + lambda * h,
            BedShape::Parabolic => (4.0 * h / width).sqrt(),
        }
    }

    /// Cross-section area [m²] at ice thickness `h` [m].
    pub fn section_area(&self, width: f64, h: f64) -> f64 {
        match self {
            BedShape::Rectangular => h * width,
            BedShape::Trapezoidal { lambda } => h * (width + lambda * h / 2.0),
            // A = 2/3 * h * w with w = sqrt(4 h / Ps).
            BedShape::Parabolic => 2.0 / 3.0 * h * (4.0 * h / width).sqrt(),
        }
    }

    /// Ice thickness [m] recovered from a cross-section area [m²].
    ///
    /// Inverse of `section_area`; `area <= 0` maps to zero thickness.
    pub fn thickness_from_area(&self, width: f64, area: f64) -> f64 {
        if area <= 0.0 {
            return 0.0;
        }
        match self {
            BedShape::Rectangular => area / width,
            BedShape::Trapezoidal { lambda } => {
                if *lambda == 0.0 {
                    area / width
                } else {
                    // Solve lambda/2 * h^2 + w0 * h - A = 0 for h >= 0.
                    (-width + (width * width + 2.0 * lambda * area).sqrt()) / lambda
                }
            }
            // h = (3 A sqrt(Ps) / 4)^(2/3).
            BedShape::Parabolic => (0.75 * area * width.sqrt()).powf(2.0 / 3.0),
        }
    }
}
