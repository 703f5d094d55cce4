//! Hull a few random clouds and print how much each one shrinks.
//!
//! Usage:
//!   cargo run -p hullscan --example random_cloud -- 4
//!
//! The optional argument is the worker count (default 1).

use hullscan::prelude::*;

fn main() {
    let threads = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_THREADS);
    for (i, &n) in BENCH_SIZES.iter().enumerate() {
        let set = generate_synthetic(SynthCfg::sized(n, Dim::Two), 2025 + i as u64);
        match compute_hull(&set, threads).and_then(|h| Ok((HullMetrics::of(h.points())?, h))) {
            Ok((m, h)) => println!(
                "n={n}: hull={} area={:.2} perimeter={:.2}",
                h.len(),
                m.area,
                m.perimeter
            ),
            Err(err) => eprintln!("n={n}: {err}"),
        }
    }
}
