use clap::Parser;
use log::info;
use rand::rngs::OsRng;
use std::process;

use rsafun::encryption::rsa;

/// Generate toy RSA keypairs and run encrypt/decrypt round-trip tests.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Size of the generated keys in bits
    #[arg(short, long, default_value_t = 512)]
    bits: usize,

    /// Number of round-trip tests to run
    #[arg(short, long, default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = OsRng;

    for run in 1..=args.count {
        if !rsa::cipher_test(args.bits, &mut rng) {
            println!("FAILED!");
            process::exit(1);
        }

        info!("round trip {}/{} passed", run, args.count);
    }
}
