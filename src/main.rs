//! nestkit CLI entry point

use anyhow::{Context, Result};
use nestkit::config::{cli::Cli, validator, Options};

fn main() -> Result<()> {
    // Unknown flags, missing values and -h/-V all land here; clap prints
    // the message and exits with the matching status.
    let cli = Cli::try_parse_env().unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let resolution = Options::resolve(cli);
    let options = resolution.options;

    validator::validate_options(&options).context("Configuration validation failed")?;

    print_configuration(&options)
}

/// Print the resolved configuration with seed and compression evaluated
fn print_configuration(options: &Options) -> Result<()> {
    let seed = options.seed()?;
    let compression = options.compression()?;

    println!("nestkit v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration:");
    for line in options.to_string().lines() {
        println!("  {}", line);
    }
    println!("  Resolved seed: {}", seed);
    println!("  Resolved compression: {}", compression);
    Ok(())
}
