//! BN128 Precompile CLI
//!
//! Runs the precompile operations on hex-encoded input.
//!
//! Usage:
//!   cargo run -- add --curve bn128-g1 <hex>
//!   cargo run -- mul --curve bn128-g2 --scalar 02 <hex>
//!   cargo run -- --format json pairing <hex>

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use bn128_precompile::{ops, CurveOps, OpLimits};

/// BN128 precompile CLI
#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "bn128")]
#[command(about = "Run BN128 add, scalar-mul and pairing-check precompiles on hex input")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Request compressed point decoding (always rejected)
    #[arg(long, global = true)]
    compressed: bool,

    /// Output format: json or hex
    #[arg(long, global = true, default_value = "hex")]
    format: String,

    /// Maximum number of points in one add batch
    #[arg(long, global = true, default_value_t = ops::DEFAULT_MAX_ADD_POINTS)]
    max_add_points: usize,

    /// Maximum number of pairs in one pairing check
    #[arg(long, global = true, default_value_t = ops::DEFAULT_MAX_PAIRS)]
    max_pairs: usize,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Command {
    /// Sum a batch of concatenated points
    Add {
        /// bn128-g1 or bn128-g2
        #[arg(long, default_value = "bn128-g1")]
        curve: String,
        data: String,
    },
    /// Multiply one point by a scalar
    Mul {
        /// bn128-g1 or bn128-g2
        #[arg(long, default_value = "bn128-g1")]
        curve: String,
        /// Big-endian scalar, hex
        #[arg(long)]
        scalar: String,
        data: String,
    },
    /// Check that the pairing product of G1 || G2 records is one
    Pairing { data: String },
}

#[cfg(feature = "cli")]
#[derive(serde::Serialize)]
struct Report {
    op: &'static str,
    curve: String,
    input_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[cfg(feature = "cli")]
fn decode_hex(arg: &str) -> Result<Vec<u8>, String> {
    let trimmed = arg.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| format!("invalid hex input: {e}"))
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn run(args: &Args, ops: &CurveOps) -> Result<Report, String> {
    let report = match &args.command {
        Command::Add { curve, data } => {
            let input = decode_hex(data)?;
            let out = ops.ec_add(curve, &input, args.compressed);
            Report {
                op: "add",
                curve: curve.clone(),
                input_bytes: input.len(),
                output: out.as_ref().ok().map(hex::encode),
                result: None,
                error: out.err().map(|e| e.to_string()),
            }
        }
        Command::Mul { curve, scalar, data } => {
            let input = decode_hex(data)?;
            let k = decode_hex(scalar)?;
            let out = ops.ec_scalar_mul(curve, &k, &input, args.compressed);
            Report {
                op: "mul",
                curve: curve.clone(),
                input_bytes: input.len(),
                output: out.as_ref().ok().map(hex::encode),
                result: None,
                error: out.err().map(|e| e.to_string()),
            }
        }
        Command::Pairing { data } => {
            let input = decode_hex(data)?;
            let out = ops.ec_pairing_check("bn128", &input, args.compressed);
            Report {
                op: "pairing",
                curve: "bn128".to_string(),
                input_bytes: input.len(),
                output: None,
                result: out.as_ref().ok().copied(),
                error: out.err().map(|e| e.to_string()),
            }
        }
    };
    Ok(report)
}

fn main() {
    #[cfg(feature = "cli")]
    {
        let args = Args::parse();
        init_logging(args.verbose);

        let ops = CurveOps::new(OpLimits {
            max_add_points: args.max_add_points,
            max_pairs: args.max_pairs,
        });

        let report = match run(&args, &ops) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        };

        match args.format.as_str() {
            "json" => match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Failed to serialize report: {e}"),
            },
            "hex" => {
                if let Some(out) = &report.output {
                    println!("0x{out}");
                }
                if let Some(ok) = report.result {
                    println!("{ok}");
                }
                if let Some(err) = &report.error {
                    eprintln!("BN128: {err}");
                }
            }
            _ => {
                eprintln!("Unknown format: {}", args.format);
            }
        }

        if report.error.is_some() {
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("CLI feature not enabled. Build with: cargo run --features cli");
    }
}
