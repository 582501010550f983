use glacierflow_macros::Diagnostics;

#[derive(Diagnostics)]
pub struct BadDiagnostics {
    pub length_m: f64,
    pub count: u32,
}

fn main() {}
