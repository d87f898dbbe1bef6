//! geohash — Command-line interface for geohash-core
//!
//! Usage examples
//! --------------
//!
//! - Encode a position (default precision 12)
//!   $ geohash encode 57.64911 10.40744
//!   $ geohash encode -33.8688 151.2093 -p 7
//!
//! - Decode, rounded to the precision the hash carries
//!   $ geohash decode u4pruy
//!
//! - Decode without rounding, with error margins
//!   $ geohash decode ezs42 --exact
//!
//! - Cell bounds and distances
//!   $ geohash bounds ezs42
//!   $ geohash distance u33dc0 u09tvw
//!
//! - Check a badge claim (exits non-zero when rejected)
//!   $ geohash claim u33dc0 52.5163 13.3777 --max-km 50
//!
//! Add `--json` to any command for machine-readable output, and `-v`/`-vv`
//! for log output on stderr (`RUST_LOG` is honored as well).
use clap::Parser;
use geohash_cli::args::CliArgs;
use geohash_cli::commands;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let output = commands::run(&args.command)?;
    println!("{}", output.render(args.json));

    Ok(())
}
