/// Pure Rust core benchmarks for the glacierflow evolution model.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for bed
/// perturbation, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use glacierflow_core::flowline::{BedShape, Flowline};
use glacierflow_core::massbalance::LinearMassBalance;
use glacierflow_core::model::{FlowlineModel, PhysicsParams};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic bed-roughness generation.
fn make_bed(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let drop_per_node = 2000.0 / n as f64;
    let bed: Vec<f64> = (0..n)
        .map(|i| 3400.0 - drop_per_node * i as f64 + next_f64() * 2.0)
        .collect();
    let widths: Vec<f64> = (0..n).map(|_| 250.0 + next_f64() * 100.0).collect();
    (bed, widths)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn run_scenario(n: usize, years: f64) -> f64 {
    let (bed, widths) = make_bed(n, 42);
    let fl = Flowline::ice_free(bed, widths, 100.0, BedShape::Rectangular)
        .expect("valid benchmark flowline");
    let mb = LinearMassBalance::new(3000.0, 4.0).expect("valid benchmark mass balance");
    let mut model = FlowlineModel::new(fl, Box::new(mb), PhysicsParams::default(), 0.0)
        .expect("valid benchmark model");
    model.run_until(years).expect("benchmark run");
    model.volume_km3()
}

fn main() {
    let sizes = [100usize, 200, 400, 800];
    let years = 100.0;

    println!("glacierflow core benchmarks ({} yr runs, median of {})", years, REPEATS);
    println!("{:>8} {:>14} {:>14}", "nodes", "time", "volume [km³]");
    for &n in &sizes {
        // Warmup
        black_box(run_scenario(n, years));

        let dur = median_time(|| {
            black_box(run_scenario(n, years));
        });
        let volume = run_scenario(n, years);
        println!("{:>8} {:>14?} {:>14.4}", n, dur, volume);
    }
}
