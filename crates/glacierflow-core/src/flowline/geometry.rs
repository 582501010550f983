/// The 1-D flowline: bed and surface elevation profiles along a glacier.
///
/// Node 0 is the upstream (highest) end. All derived quantities are computed
/// on demand from the current surface; nothing is cached.
use super::shape::BedShape;
use crate::constants::{M2_TO_KM2, M3_TO_KM3};

#[derive(Debug, Clone)]
pub struct Flowline {
    bed_h: Vec<f64>,
    surface_h: Vec<f64>,
    widths: Vec<f64>,
    dx: f64,
    shape: BedShape,
}

impl Flowline {
    /// Create a flowline with validation.
    ///
    /// Validates:
    /// - all three arrays have the same, >= 2, length
    /// - `dx > 0` and finite
    /// - bed, surface and width values are finite
    /// - surface >= bed at every node
    /// - shape and per-node width parameters are valid for the shape family
    pub fn new(
        bed_h: Vec<f64>,
        surface_h: Vec<f64>,
        widths: Vec<f64>,
        dx: f64,
        shape: BedShape,
    ) -> Result<Self, String> {
        let n = bed_h.len();
        if n < 2 {
            return Err(format!("flowline needs at least 2 grid nodes, got {}", n));
        }
        if surface_h.len() != n {
            return Err(format!(
                "surface_h length {} does not match bed_h length {}",
                surface_h.len(),
                n
            ));
        }
        if widths.len() != n {
            return Err(format!(
                "widths length {} does not match bed_h length {}",
                widths.len(),
                n
            ));
        }
        if !dx.is_finite() || dx <= 0.0 {
            return Err(format!("dx = {} must be finite and > 0", dx));
        }
        shape.validate()?;
        for i in 0..n {
            if !bed_h[i].is_finite() {
                return Err(format!("bed_h[{}] = {} is not finite", i, bed_h[i]));
            }
            if !surface_h[i].is_finite() {
                return Err(format!("surface_h[{}] = {} is not finite", i, surface_h[i]));
            }
            if surface_h[i] < bed_h[i] {
                return Err(format!(
                    "surface_h[{}] = {} is below bed_h[{}] = {}",
                    i, surface_h[i], i, bed_h[i]
                ));
            }
            shape
                .validate_width(widths[i])
                .map_err(|e| format!("widths[{}]: {}", i, e))?;
        }
        Ok(Self {
            bed_h,
            surface_h,
            widths,
            dx,
            shape,
        })
    }

    /// Convenience: an ice-free flowline (surface equals bed).
    pub fn ice_free(
        bed_h: Vec<f64>,
        widths: Vec<f64>,
        dx: f64,
        shape: BedShape,
    ) -> Result<Self, String> {
        let surface_h = bed_h.clone();
        Self::new(bed_h, surface_h, widths, dx, shape)
    }

    // -- accessors --

    pub fn n_nodes(&self) -> usize {
        self.bed_h.len()
    }

    pub fn bed_h(&self) -> &[f64] {
        &self.bed_h
    }

    pub fn surface_h(&self) -> &[f64] {
        &self.surface_h
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn shape(&self) -> BedShape {
        self.shape
    }

    // -- derived quantities --

    /// Per-node ice thickness [m]: surface minus bed, floored at zero.
    pub fn thickness(&self) -> Vec<f64> {
        self.surface_h
            .iter()
            .zip(&self.bed_h)
            .map(|(&s, &b)| (s - b).max(0.0))
            .collect()
    }

    /// Ice thickness at a single node [m].
    pub fn thickness_at(&self, node: usize) -> f64 {
        (self.surface_h[node] - self.bed_h[node]).max(0.0)
    }

    /// Per-node surface width [m] (shape-dependent function of thickness).
    pub fn widths_m(&self) -> Vec<f64> {
        (0..self.n_nodes())
            .map(|i| self.shape.surface_width(self.widths[i], self.thickness_at(i)))
            .collect()
    }

    /// Per-node cross-section area [m²].
    pub fn section_areas(&self) -> Vec<f64> {
        (0..self.n_nodes())
            .map(|i| self.shape.section_area(self.widths[i], self.thickness_at(i)))
            .collect()
    }

    /// Glacier length [m]: contiguous ice-covered nodes counted from the
    /// upstream end, times dx. A detached ice patch downstream of an
    /// ice-free gap does not count (glacier-tongue retreat convention).
    pub fn length_m(&self) -> f64 {
        let mut n_ice = 0usize;
        for i in 0..self.n_nodes() {
            if self.thickness_at(i) > 0.0 {
                n_ice += 1;
            } else {
                break;
            }
        }
        n_ice as f64 * self.dx
    }

    /// Map area of the ice-covered nodes [km²]: surface width times dx,
    /// summed where thickness > 0.
    pub fn area_km2(&self) -> f64 {
        let widths_m = self.widths_m();
        let mut total = 0.0;
        for i in 0..self.n_nodes() {
            if self.thickness_at(i) > 0.0 {
                total += widths_m[i] * self.dx;
            }
        }
        total * M2_TO_KM2
    }

    /// Ice volume [km³]: cross-section area times dx, summed over all nodes.
    pub fn volume_km3(&self) -> f64 {
        self.section_areas().iter().sum::<f64>() * self.dx * M3_TO_KM3
    }

    /// Maximum ice thickness [m].
    pub fn max_thickness_m(&self) -> f64 {
        self.thickness().into_iter().fold(0.0, f64::max)
    }

    /// Replace the surface from per-node cross-section areas.
    ///
    /// Negative areas floor to zero thickness (surface lands on the bed).
    /// Used by the integrator after each flux update.
    pub(crate) fn update_from_sections(&mut self, sections: &[f64]) {
        debug_assert_eq!(sections.len(), self.n_nodes());
        for i in 0..self.n_nodes() {
            let h = self.shape.thickness_from_area(self.widths[i], sections[i]);
            self.surface_h[i] = self.bed_h[i] + h;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 200-node linear bed 3400 m -> 1400 m at 100 m spacing, 300 m wide.
    fn test_bed() -> (Vec<f64>, Vec<f64>) {
        let bed: Vec<f64> = (0..200).map(|i| 3400.0 - 10.0 * i as f64).collect();
        let widths = vec![300.0; 200];
        (bed, widths)
    }

    #[test]
    fn ice_free_flowline_has_zero_everything() {
        let (bed, widths) = test_bed();
        let fl = Flowline::ice_free(bed, widths, 100.0, BedShape::Rectangular).unwrap();
        assert_eq!(fl.length_m(), 0.0);
        assert_eq!(fl.area_km2(), 0.0);
        assert_eq!(fl.volume_km3(), 0.0);
        assert_eq!(fl.max_thickness_m(), 0.0);
        assert!(fl.thickness().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn thickness_floors_at_zero() {
        let (bed, widths) = test_bed();
        let mut surface = bed.clone();
        surface[0] += 50.0;
        let fl = Flowline::new(bed, surface, widths, 100.0, BedShape::Rectangular).unwrap();
        assert_eq!(fl.thickness_at(0), 50.0);
        assert_eq!(fl.thickness_at(1), 0.0);
    }

    #[test]
    fn length_counts_contiguous_ice_from_upstream() {
        let (bed, widths) = test_bed();
        let mut surface = bed.clone();
        for i in 0..10 {
            surface[i] += 30.0;
        }
        let fl =
            Flowline::new(bed, surface, widths, 100.0, BedShape::Rectangular).unwrap();
        assert_eq!(fl.length_m(), 1000.0);
    }

    #[test]
    fn detached_ice_patch_does_not_count_toward_length() {
        let (bed, widths) = test_bed();
        let mut surface = bed.clone();
        for i in 0..10 {
            surface[i] += 30.0;
        }
        // Detached patch past an ice-free gap.
        for i in 15..20 {
            surface[i] += 30.0;
        }
        let fl =
            Flowline::new(bed.clone(), surface, widths, 100.0, BedShape::Rectangular).unwrap();
        assert_eq!(fl.length_m(), 1000.0);
        // ...but it does contribute to area and volume.
        let expected_area_km2 = 15.0 * 300.0 * 100.0 * 1e-6;
        assert!((fl.area_km2() - expected_area_km2).abs() < 1e-12);
        let expected_volume_km3 = 15.0 * 30.0 * 300.0 * 100.0 * 1e-9;
        assert!((fl.volume_km3() - expected_volume_km3).abs() < 1e-12);
    }

    #[test]
    fn volume_of_uniform_slab() {
        let (bed, widths) = test_bed();
        let surface: Vec<f64> = bed.iter().map(|b| b + 100.0).collect();
        let fl = Flowline::new(bed, surface, widths, 100.0, BedShape::Rectangular).unwrap();
        // 200 nodes * 100 m thick * 300 m wide * 100 m spacing.
        assert!((fl.volume_km3() - 200.0 * 100.0 * 300.0 * 100.0 * 1e-9).abs() < 1e-12);
    }

    #[test]
    fn update_from_sections_recovers_surface() {
        let (bed, widths) = test_bed();
        let surface: Vec<f64> = bed.iter().map(|b| b + 80.0).collect();
        let mut fl =
            Flowline::new(bed.clone(), surface, widths, 100.0, BedShape::Rectangular).unwrap();
        let sections = fl.section_areas();
        fl.update_from_sections(&sections);
        for i in 0..fl.n_nodes() {
            assert!((fl.surface_h()[i] - (bed[i] + 80.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn update_from_sections_floors_negative_area() {
        let (bed, widths) = test_bed();
        let surface: Vec<f64> = bed.iter().map(|b| b + 10.0).collect();
        let mut fl =
            Flowline::new(bed.clone(), surface, widths, 100.0, BedShape::Rectangular).unwrap();
        let mut sections = fl.section_areas();
        sections[5] = -100.0;
        fl.update_from_sections(&sections);
        assert_eq!(fl.thickness_at(5), 0.0);
        assert_eq!(fl.surface_h()[5], bed[5]);
    }

    // -- construction errors --

    #[test]
    fn rejects_mismatched_lengths() {
        let (bed, widths) = test_bed();
        let surface = bed[..199].to_vec();
        assert!(
            Flowline::new(bed.clone(), surface, widths.clone(), 100.0, BedShape::Rectangular)
                .is_err()
        );
        assert!(Flowline::ice_free(bed, widths[..100].to_vec(), 100.0, BedShape::Rectangular)
            .is_err());
    }

    #[test]
    fn rejects_non_positive_dx() {
        let (bed, widths) = test_bed();
        assert!(Flowline::ice_free(bed.clone(), widths.clone(), 0.0, BedShape::Rectangular)
            .is_err());
        assert!(Flowline::ice_free(bed, widths, -100.0, BedShape::Rectangular).is_err());
    }

    #[test]
    fn rejects_surface_below_bed() {
        let (bed, widths) = test_bed();
        let mut surface = bed.clone();
        surface[3] -= 1.0;
        let err =
            Flowline::new(bed, surface, widths, 100.0, BedShape::Rectangular).unwrap_err();
        assert!(err.contains("below bed_h"));
    }

    #[test]
    fn rejects_nan_bed() {
        let (mut bed, widths) = test_bed();
        bed[0] = f64::NAN;
        assert!(Flowline::ice_free(bed, widths, 100.0, BedShape::Rectangular).is_err());
    }

    #[test]
    fn rejects_single_node() {
        assert!(
            Flowline::ice_free(vec![1000.0], vec![300.0], 100.0, BedShape::Rectangular).is_err()
        );
    }
}
