use glacierflow_macros::Diagnostics;

#[derive(Debug, Clone, Copy, Diagnostics)]
#[diagnostics(timeseries_name = "GlacierTimeseries")]
pub struct GlacierDiagnostics {
    pub length_m: f64,
    pub volume_km3: f64,
}

fn main() {
    let d = GlacierDiagnostics { length_m: 1500.0, volume_km3: 0.2 };
    let mut ts = GlacierTimeseries::with_capacity(5);
    ts.push(&d);
    assert_eq!(ts.len(), 1);
    assert_eq!(GlacierDiagnostics::field_names(), &["length_m", "volume_km3"]);
}
