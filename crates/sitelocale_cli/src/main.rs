//! sitelocale - resolve legacy site codes to supported locales
//!
//! Runs the two-stage pipeline from `sitelocale_core` over the builtin
//! tables, or over YAML tables named in `sitelocale.toml`.

mod config;
mod report;
mod tables;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use sitelocale_core::{AnomalyKind, LanguageTag, LocaleResolver};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, SiteLocaleConfig};
use crate::tables::Tables;

/// Resolve legacy site codes to supported locales
#[derive(Parser, Debug)]
#[command(name = "sitelocale")]
#[command(about = "Resolve legacy site codes to supported locales")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./sitelocale.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve site codes to supported locales
    Resolve {
        #[arg(required = true)]
        codes: Vec<String>,

        /// Show the substitution and every lookup attempt
        #[arg(long)]
        explain: bool,
    },

    /// Show the anomaly substitution for a code
    Anomaly { code: String },

    /// List the anomaly table
    Anomalies {
        /// Only entries of this kind (e.g. inherited, redundant)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<AnomalyKind>,
    },

    /// Show how a tag is split into subtags
    Inspect { tag: String },

    /// Map a site code to its project code
    Project { code: String },
}

fn parse_kind(s: &str) -> Result<AnomalyKind, String> {
    AnomalyKind::from_id(s).ok_or_else(|| {
        let known: Vec<&str> = AnomalyKind::ALL.iter().map(|k| k.id()).collect();
        format!("unknown kind `{s}` (expected one of: {})", known.join(", "))
    })
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SiteLocaleConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);
    let tables = Tables::load(&config.data)?;
    let resolver = LocaleResolver::new(&tables.anomalies, &tables.catalog);

    match cli.command {
        Command::Resolve { codes, explain } => report::resolve(&resolver, &codes, explain, format),
        Command::Anomaly { code } => report::anomaly(&resolver, &code, format),
        Command::Anomalies { kind } => report::anomalies(&resolver, kind, format),
        Command::Inspect { tag } => report::inspect(&LanguageTag::parse(&tag), format),
        Command::Project { code } => {
            println!("{}", project(&resolver, &code)?);
            Ok(())
        }
    }
}

fn project(resolver: &LocaleResolver<'_>, code: &str) -> Result<String> {
    let locale = resolver.resolve_locale(code);
    resolver
        .project_code(locale)
        .with_context(|| format!("Cannot map `{code}` (locale `{locale}`) to a project"))
}
