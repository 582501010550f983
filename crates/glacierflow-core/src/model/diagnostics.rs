/// Scalar diagnostics sampled from the evolution model.
use glacierflow_macros::Diagnostics;

/// One snapshot of glacier-scale diagnostics.
///
/// The derive generates `DiagnosticsTimeseries` (one `Vec<f64>` per field)
/// for collecting snapshots across output times.
#[derive(Debug, Clone, Copy, Diagnostics)]
pub struct Diagnostics {
    /// Model time [yr].
    pub time_yr: f64,
    /// Glacier length [m].
    pub length_m: f64,
    /// Ice-covered map area [km²].
    pub area_km2: f64,
    /// Ice volume [km³].
    pub volume_km3: f64,
    /// Maximum ice thickness [m].
    pub max_thickness_m: f64,
    /// Maximum depth-averaged ice velocity over the last substep [m yr^-1].
    pub max_velocity_myr: f64,
}

/// Output of `run_until_and_store`: scalar diagnostics plus a full surface
/// profile per stored output time.
#[derive(Debug)]
pub struct RunOutput {
    pub diagnostics: DiagnosticsTimeseries,
    /// Surface elevation profile [m] at each stored time, outer index matching
    /// `diagnostics` order.
    pub surfaces: Vec<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeseries_collects_snapshots() {
        let mut ts = DiagnosticsTimeseries::with_capacity(2);
        assert!(ts.is_empty());
        ts.push(&Diagnostics {
            time_yr: 0.0,
            length_m: 0.0,
            area_km2: 0.0,
            volume_km3: 0.0,
            max_thickness_m: 0.0,
            max_velocity_myr: 0.0,
        });
        ts.push(&Diagnostics {
            time_yr: 10.0,
            length_m: 1500.0,
            area_km2: 0.45,
            volume_km3: 0.02,
            max_thickness_m: 80.0,
            max_velocity_myr: 12.0,
        });
        assert_eq!(ts.len(), 2);
        assert_eq!(ts.time_yr, vec![0.0, 10.0]);
        assert_eq!(ts.length_m[1], 1500.0);
    }

    #[test]
    fn field_names_match_declaration_order() {
        assert_eq!(
            Diagnostics::field_names(),
            &[
                "time_yr",
                "length_m",
                "area_km2",
                "volume_km3",
                "max_thickness_m",
                "max_velocity_myr"
            ]
        );
    }
}
