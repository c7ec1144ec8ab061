//! # bignum-cmp
//!
//! Compare two big unsigned integers given as lists of limbs.
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bignum_cmp::{compare, Bignum, ComparisonResult};
use bignum_cmp::error::Capacity;

/// Compare two big unsigned integers.
///
/// Limbs are 64-bit unsigned decimal numbers, least significant first. Leave out an operand to
/// compare against an absent value.
#[derive(Parser, Debug)]
#[clap(name = "bignum-cmp", version, about)]
struct Args {
    /// Limbs of the left operand.
    #[clap(long, value_name = "LIMB", multiple_values = true, min_values = 0)]
    left: Option<Vec<u64>>,
    /// Limbs of the right operand.
    #[clap(long, value_name = "LIMB", multiple_values = true, min_values = 0)]
    right: Option<Vec<u64>>,
    /// Print the integer encoding (1, 0, -1 or i32::MIN) instead of the name.
    #[clap(long)]
    raw: bool,
    /// Log more; repeat for more detail.
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

/// Build an operand from the limbs given on the command line, if any.
fn operand(limbs: Option<&[u64]>) -> Result<Option<Bignum>, Capacity> {
    limbs.map(Bignum::from_limbs).transpose()
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ComparisonResult, Capacity> {
    let left = operand(args.left.as_deref())?;
    let right = operand(args.right.as_deref())?;
    tracing::debug!(
        left = ?left.as_ref().map(Bignum::limbs),
        right = ?right.as_ref().map(Bignum::limbs),
        "comparing"
    );

    Ok(compare(left.as_ref(), right.as_ref()))
}

/// Process exit status: `0` for an ordering, `2` for an absent operand and `1` for invalid input.
fn exit_code(result: &Result<ComparisonResult, Capacity>) -> i32 {
    match result {
        Ok(ComparisonResult::NullInputError) => 2,
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = run(&args);
    match &result {
        Ok(comparison) if args.raw => println!("{}", comparison.to_raw()),
        Ok(comparison) => println!("{}", comparison),
        Err(error) => eprintln!("error: {}", error),
    }

    process::exit(exit_code(&result));
}
