use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use fft_tables::{BitrevGate, GeneratorConfig, TableKind, TableSet, render};
use log::LevelFilter;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Generate radix-2 FFT lookup tables as Rust source.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Max FFT size (a power of two)
    #[arg(value_name = "N")]
    max_size: usize,

    /// Table families to emit
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = vec![TableKind::Twiddle, TableKind::Sine, TableKind::BitReversal]
    )]
    tables: Vec<TableKind>,

    /// Guard the bit-reversal table with `#[cfg(feature = "<NAME>")]`
    #[arg(long, value_name = "NAME")]
    bitrev_feature: Option<String>,

    /// Write the tables to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log more (repeat for debug output)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GeneratorConfig::new(cli.max_size).with_kinds(&cli.tables);
    let set = TableSet::generate(&config)
        .with_context(|| format!("cannot generate tables for N = {}", cli.max_size))?;

    let gate = match cli.bitrev_feature {
        Some(name) => BitrevGate::Feature(name),
        None => BitrevGate::Always,
    };
    let text = render(&set, &gate).context("failed to render tables")?;

    // Nothing is written until the whole text is ready.
    match &cli.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}
