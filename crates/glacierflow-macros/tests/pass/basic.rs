use glacierflow_macros::Diagnostics;

#[derive(Debug, Clone, Copy, Diagnostics)]
pub struct TestDiagnostics {
    pub length_m: f64,
    pub area_km2: f64,
    pub volume_km3: f64,
}

fn main() {
    let d = TestDiagnostics { length_m: 1.0, area_km2: 2.0, volume_km3: 3.0 };
    let mut ts = TestDiagnosticsTimeseries::with_capacity(10);
    ts.push(&d);
    assert_eq!(ts.len(), 1);
    assert!(!ts.is_empty());
    assert_eq!(TestDiagnostics::field_names(), &["length_m", "area_km2", "volume_km3"]);
}
