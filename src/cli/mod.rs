use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use srvguard::models::DEFAULT_TIMEOUT;
use srvguard::{CheckKind, CheckReport, GuardError, RunOptions, RunReport, ValidationConfig};

mod maps;
mod plugins;
mod validate;

/// Exit status for a config that failed validation.
const EXIT_INVALID: i32 = 1;
/// Exit status for a run that could not reach a verdict.
const EXIT_FAULT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "srvguard",
    version,
    about = "Game server deployment config validator"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Only log errors (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable summary on stderr (default)
    #[default]
    Text,
    /// JSON report on stdout
    Json,
}

/// Arguments shared by every check command.
#[derive(Args)]
struct CheckArgs {
    /// Deployment config file (YAML)
    config: PathBuf,
    /// Settings file providing data_src_path [default: $SRVGUARD_SETTINGS or /etc/srvguard/main.cfg]
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Plugin repository root (skips the settings file)
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Check every declared item instead of stopping at the first miss
    #[arg(long)]
    all: bool,
    /// Timeout in seconds for the map listing request
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl CheckArgs {
    fn options(&self) -> RunOptions {
        RunOptions {
            stop_on_first_failure: !self.all,
            timeout: std::time::Duration::from_secs(self.timeout),
        }
    }

    /// Plugin repository root: `--data-dir`, else `data_src_path` from the
    /// settings file.
    fn data_root(&self) -> srvguard::Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let settings = self
            .settings
            .clone()
            .unwrap_or_else(srvguard::config::settings_path);
        srvguard::config::load_data_root(&settings)
    }

    fn load(&self, data_root: PathBuf) -> ValidationConfig {
        ValidationConfig::load(&self.config, data_root).unwrap_or_else(|e| fault(&e))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check declared maps and plugins (maps first)
    Validate(CheckArgs),
    /// Check declared maps against the download server only
    Maps(CheckArgs),
    /// Check declared plugins against the repository only
    Plugins(CheckArgs),
}

/// Install the stderr log subscriber.
pub fn init_logging(quiet: bool) {
    let default = if quiet { "srvguard=error" } else { "srvguard=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Validate(args)) => validate::run(args),
        Some(Commands::Maps(args)) => maps::run(args),
        Some(Commands::Plugins(args)) => plugins::run(args),
        None => {
            eprintln!("Usage: srvguard <command> [args]");
            eprintln!("Run `srvguard --help` for details.");
            std::process::exit(EXIT_INVALID);
        }
    }
}

fn print_about() {
    println!(
        "srvguard: game server deployment config validator\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_LICENSE"),
    );
}

/// Report a fault and exit.
fn fault(e: &GuardError) -> ! {
    eprintln!("error: {e}");
    std::process::exit(EXIT_FAULT);
}

/// One summary block per check.
fn print_text(report: &RunReport, expected: &[CheckKind]) {
    for kind in expected {
        match report.get(*kind) {
            Some(check) => print_check(check),
            None => eprintln!("{kind}: skipped"),
        }
    }
}

fn print_check(check: &CheckReport) {
    if check.passed() {
        eprintln!("{}: ok", check.kind);
        return;
    }
    let missing = check.missing();
    if missing.is_empty() {
        eprintln!("{}:", check.kind);
    } else {
        eprintln!("{}: missing {}", check.kind, missing.join(", "));
    }
    for d in check.diagnostics.iter().filter(|d| d.is_error()) {
        eprintln!("  {d}");
    }
}

/// Print the report in the requested format and exit non-zero on failure.
fn finish(report: &RunReport, expected: &[CheckKind], format: Format) {
    match format {
        Format::Text => print_text(report, expected),
        Format::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot serialize report: {e}");
                std::process::exit(EXIT_FAULT);
            }
        },
    }

    if !report.passed() {
        std::process::exit(EXIT_INVALID);
    }
}
