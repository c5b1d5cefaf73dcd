use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fse_core::airport::{AirportDirectory, AIRPORT_DATA_FILE};
use fse_core::config::{OutputStyle, SearchConfig, CONFIG_FILE};
use fse_core::feed::{FseDataClient, DEFAULT_BASE_URL};
use fse_core::search::JobSearch;

mod output;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "fse_jobs",
    version,
    about = "List the best-paying FSEconomy assignments for your aircraft type"
)]
struct Args {
    /// Search configuration file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Airport reference data (datahub airport-codes JSON)
    #[arg(long, default_value = AIRPORT_DATA_FILE)]
    airports: PathBuf,
    /// Override `searchlimit` from the config file
    #[arg(long)]
    limit: Option<usize>,
    /// Force uncoloured output
    #[arg(long, conflicts_with = "decorated")]
    plain: bool,
    /// Force coloured output
    #[arg(long)]
    decorated: bool,
    /// FSEconomy data feed host
    #[arg(long, env = "FSE_FEED_URL", default_value = DEFAULT_BASE_URL)]
    feed_url: String,
    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── helpers ────────────────────────────────────────────────────────

/// A fatal error plus an optional hint for the user.
#[derive(Debug)]
struct Fatal {
    error: Box<dyn Error>,
    hint: Option<String>,
}

impl Fatal {
    fn with_hint(error: impl Error + 'static, hint: String) -> Self {
        Self {
            error: Box::new(error),
            hint: Some(hint),
        }
    }
}

impl<E: Error + 'static> From<E> for Fatal {
    fn from(error: E) -> Self {
        Self {
            error: Box::new(error),
            hint: None,
        }
    }
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n{hint}")?;
        }
        Ok(())
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn next_to_binary_hint(path: &std::path::Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("Please put the {name} in the same folder as the binary")
}

fn wait_for_enter() {
    print!("Press 'Enter' to continue...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

// ── main ───────────────────────────────────────────────────────────

fn run(args: &Args) -> Result<(), Fatal> {
    let mut config = SearchConfig::from_path(&args.config)
        .map_err(|err| Fatal::with_hint(err, next_to_binary_hint(&args.config)))?;
    if let Some(limit) = args.limit {
        config = config.with_search_limit(limit);
    }
    if args.plain {
        config = config.with_output_style(OutputStyle::Plain);
    } else if args.decorated {
        config = config.with_output_style(OutputStyle::Decorated);
    }
    tracing::debug!(
        config = %args.config.display(),
        limit = config.search_limit,
        style = ?config.output_style,
        "Loaded configuration"
    );

    let directory = AirportDirectory::from_path(&args.airports)
        .map_err(|err| Fatal::with_hint(err, next_to_binary_hint(&args.airports)))?;
    let feed = FseDataClient::with_base_url(&args.feed_url, &config.user_key)?;

    let report = JobSearch::new(&config, &feed, &directory).run()?;

    let stdout = io::stdout();
    output::print_report(&report, config.output_style, &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let status = match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(fatal) => {
            eprintln!("{fatal}");
            ExitCode::FAILURE
        }
    };

    if args.pause {
        wait_for_enter();
    }
    status
}
