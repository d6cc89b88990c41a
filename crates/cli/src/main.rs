// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod sample;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use orcast_domain::ActivityType;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// orcast - build, inspect and validate ORCAST trip documents
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the San Juan Islands demo trip and print or save its document
    Demo {
        /// Write the document here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print counts and headline numbers for a trip document
    Summary {
        /// Trip document to read
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List viewing zones, best first
    Zones {
        /// Trip document to read
        file: PathBuf,

        /// Only list zones with at least this probability
        #[arg(short, long, default_value_t = 0.0)]
        min_probability: f64,
    },

    /// List activities of one type
    Activities {
        /// Trip document to read
        file: PathBuf,

        /// Activity type (viewing, photography, education, kayaking, hiking,
        /// dining, transport, other)
        #[arg(short = 't', long = "type")]
        activity_type: ActivityType,
    },

    /// Check a trip document's structure and stored aggregates
    Validate {
        /// Trip document to read
        file: PathBuf,
    },

    /// Recompute every aggregate in a trip document
    Recalculate {
        /// Trip document to read
        file: PathBuf,

        /// Write the document here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Demo { output } => emit(&commands::demo()?, output.as_deref()),
            Self::Summary { file, json } => emit(&commands::summary(&read(&file)?, json)?, None),
            Self::Zones {
                file,
                min_probability,
            } => emit(&commands::zones(&read(&file)?, min_probability)?, None),
            Self::Activities {
                file,
                activity_type,
            } => emit(&commands::activities(&read(&file)?, activity_type)?, None),
            Self::Validate { file } => emit(&commands::validate(&read(&file)?)?, None),
            Self::Recalculate { file, output } => emit(
                &commands::recalculate_document(&read(&file)?)?,
                output.as_deref(),
            ),
        }
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", text.trim_end()),
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::default().add_directive(args.verbosity.log_level_filter().as_trace().into())
        }))
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = args.command.run() {
        error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}
