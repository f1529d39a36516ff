//! price-fee CLI - Command-line interface
//!
//! Commands:
//!   eval      - Evaluate a subtotal against a settings file
//!   validate  - Check a settings file for likely mistakes
//!   schema    - Print JSON schema for settings, results or config

mod cli;

use price_fee::{Result, VERSION};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result: Result<()> = match args[1].as_str() {
        "eval" => cli::cmd_eval(&args[2..]),
        "validate" => cli::cmd_validate(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("price-fee {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("price_fee=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!(
        r#"
price-fee - Tiered cart fees and discounts

USAGE:
    price-fee <COMMAND> [OPTIONS]

COMMANDS:
    eval <settings> <subtotal>        Evaluate a cart subtotal
    validate <settings> [--strict]    Check settings for likely mistakes
    schema [name]                     Print JSON schema (settings, result, config, validate)
    version                           Print version

OPTIONS:
    --json                            JSON output format (eval, validate)
    --config <dir>                    Directory containing price_fee.yaml (default: .)
    --strict                          Strict mode: treat warnings as errors (validate)

ENVIRONMENT:
    RUST_LOG                          Log filter (default: price_fee=info)

EXAMPLES:
    price-fee eval spf_settings.json 49.90
    price-fee validate spf_settings.yaml --strict
    price-fee schema settings > settings.schema.json
"#
    );
}
