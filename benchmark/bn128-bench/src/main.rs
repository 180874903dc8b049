//! BN128 Benchmark: precompile operation timing
//!
//! Measures wall-clock time of the add, scalar-mul and pairing-check
//! operations on generator-derived inputs and prints a JSON report.

use alloy_primitives::U256;
use bn128_precompile::codec::{encode_g1, encode_g2};
use bn128_precompile::curve::{CurveParams, G1Params, G2Params};
use bn128_precompile::{CurveOps, OpLimits, CURVE_ORDER};
use clap::Parser;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bn128-bench", about = "BN128 precompile benchmark")]
struct Cli {
    /// Points per add batch
    #[arg(long, default_value = "16")]
    add_points: usize,

    /// Pairs per pairing check (rounded up to an even number)
    #[arg(long, default_value = "2")]
    pairs: usize,

    /// Total iterations (measured, excluding warmup)
    #[arg(long, default_value = "10")]
    iterations: usize,

    /// Warmup iterations (excluded from results)
    #[arg(long, default_value = "2")]
    warmup: usize,
}

struct Timing {
    avg: f64,
    min: f64,
    max: f64,
}

fn time<F: FnMut()>(label: &str, warmup: usize, iterations: usize, mut f: F) -> Timing {
    for _ in 0..warmup {
        f();
    }
    let mut times_ms: Vec<f64> = Vec::with_capacity(iterations);
    for i in 0..iterations {
        let start = Instant::now();
        f();
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        println!("  {label} run {}/{}: {:.2}ms", i + 1, iterations, ms);
        times_ms.push(ms);
    }
    let avg = times_ms.iter().sum::<f64>() / times_ms.len().max(1) as f64;
    let min = times_ms.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = times_ms.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Timing { avg, min, max }
}

fn report(t: &Timing) -> serde_json::Value {
    serde_json::json!({
        "avg": (t.avg * 1000.0).round() / 1000.0,
        "min": (t.min * 1000.0).round() / 1000.0,
        "max": (t.max * 1000.0).round() / 1000.0,
    })
}

fn main() {
    let cli = Cli::parse();
    let pairs = (cli.pairs.max(2) + 1) / 2 * 2;

    let ops = CurveOps::new(OpLimits {
        max_add_points: cli.add_points.max(1),
        max_pairs: pairs,
    });

    let g1 = encode_g1(&G1Params::generator());
    let g2 = encode_g2(&G2Params::generator());
    let g1_neg = encode_g1(&-G1Params::generator());

    let g1_batch = g1.repeat(cli.add_points.max(1));
    let g2_batch = g2.repeat(cli.add_points.max(1));
    // full-width scalar: R - 1
    let scalar = (CURVE_ORDER - U256::from(1u64)).to_be_bytes::<32>();

    // e(G1, G2) * e(-G1, G2) repeated, so every check evaluates to true
    let mut pairing_input = Vec::with_capacity(pairs * 192);
    for i in 0..pairs {
        pairing_input.extend_from_slice(if i % 2 == 0 { &g1 } else { &g1_neg });
        pairing_input.extend_from_slice(&g2);
    }

    println!(
        "=== BN128 Benchmark ({} warmup + {} measured, {} add points, {} pairs) ===",
        cli.warmup, cli.iterations, cli.add_points, pairs
    );

    let g1_add = time("g1_add", cli.warmup, cli.iterations, || {
        if let Err(e) = ops.g1_add(&g1_batch, false) {
            eprintln!("g1_add failed: {e}");
        }
    });
    let g2_add = time("g2_add", cli.warmup, cli.iterations, || {
        if let Err(e) = ops.g2_add(&g2_batch, false) {
            eprintln!("g2_add failed: {e}");
        }
    });
    let g1_mul = time("g1_scalar_mul", cli.warmup, cli.iterations, || {
        if let Err(e) = ops.g1_scalar_mul(&scalar, &g1, false) {
            eprintln!("g1_scalar_mul failed: {e}");
        }
    });
    let g2_mul = time("g2_scalar_mul", cli.warmup, cli.iterations, || {
        if let Err(e) = ops.g2_scalar_mul(&scalar, &g2, false) {
            eprintln!("g2_scalar_mul failed: {e}");
        }
    });
    let pairing = time("pairing_check", cli.warmup, cli.iterations, || {
        match ops.pairing_check(&pairing_input, false) {
            Ok(true) => {}
            Ok(false) => eprintln!("pairing_check returned false"),
            Err(e) => eprintln!("pairing_check failed: {e}"),
        }
    });

    let result = serde_json::json!({
        "system": "bn128",
        "iterations": cli.iterations,
        "add_points": cli.add_points,
        "pairs": pairs,
        "time_ms": {
            "g1_add": report(&g1_add),
            "g2_add": report(&g2_add),
            "g1_scalar_mul": report(&g1_mul),
            "g2_scalar_mul": report(&g2_mul),
            "pairing_check": report(&pairing),
        },
    });

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("\n{json}"),
        Err(e) => eprintln!("warning: could not serialize report: {e}"),
    }
}
