//! primkit CLI - run the is / has / to helpers from a shell.
//!
//! ```text
//! primkit is email someone@example.com            -> true
//! primkit --json has array '["a","b"]' --part string  -> true
//! primkit to int 42px                             -> 42
//! primkit to boolean maybe                        -> null  (error logged to stderr)
//! ```
//!
//! Predicates print `true` / `false` and exit 0 either way. Conversions
//! print their result; failed parses print `null`. Conversion settings come
//! from `--config` or `~/.primkit/config.toml`.

mod commands;
mod config;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use primkit_utils::Converter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::commands::{ToOptions, parse_input, run_has, run_is, run_to};
use crate::config::PrimkitConfig;

#[derive(Parser)]
#[command(name = "primkit")]
#[command(about = "Type checks, containment checks and safe conversions for primitive values")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Parse INPUT as JSON instead of taking it as a string
    #[arg(long, global = true)]
    json: bool,
    /// Conversion settings file (default: ~/.primkit/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a predicate: email, url, uuid, slug, odd, array, plain-object, ...
    Is {
        check: String,
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Run a containment check: string, array, length, digit, emoji, fraction, ...
    Has {
        check: String,
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Substring, element, type name or length to look for
        #[arg(long)]
        part: Option<String>,
    },
    /// Run a conversion: upper, slug, boolean, date, int, fixed, join, map, ...
    To {
        conversion: String,
        #[arg(allow_hyphen_values = true)]
        input: String,
        /// Result for unparsable input to `int` / `float`
        #[arg(long, allow_hyphen_values = true)]
        fallback: Option<f64>,
        /// Fraction digits for `fixed` / `percent`
        #[arg(long)]
        digits: Option<usize>,
        /// Separator for `join`, delimiter for `array`
        #[arg(long, allow_hyphen_values = true)]
        separator: Option<String>,
        /// Key field for `map`
        #[arg(long)]
        key: Option<String>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = PrimkitConfig::load(cli.config.as_deref())
        .unwrap_or_default()
        .into_settings();
    let converter = Converter::new(settings);

    let output = match cli.command {
        Commands::Is { check, input } => {
            run_is(&check, &parse_input(&input, cli.json)?)?.to_string()
        }
        Commands::Has { check, input, part } => {
            run_has(&check, &parse_input(&input, cli.json)?, part.as_deref())?.to_string()
        }
        Commands::To {
            conversion,
            input,
            fallback,
            digits,
            separator,
            key,
        } => {
            let options = ToOptions {
                fallback,
                digits,
                separator,
                key,
            };
            run_to(
                &conversion,
                &parse_input(&input, cli.json)?,
                &options,
                &converter,
            )?
        }
    };

    println!("{output}");
    Ok(())
}
