mod api;
mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod logging;
mod output;
mod utils;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, warn};

use api::HttpApi;
use app::CommandContext;
use cli::Cli;
use config::Config;
use error::AppError;
use output::ViewOptions;
use utils::{Timezone, parse_date};

/// `--today` wins; otherwise the configured timezone decides the date.
///
/// Without a timezone the machine's local date is used. The web front end of
/// the habit API uses the UTC date instead; `--timezone UTC` reproduces that.
fn resolve_today(cli: &Cli) -> Result<NaiveDate, AppError> {
    match cli.today.as_deref() {
        Some(raw) => parse_date(raw),
        None => Ok(Timezone::parse(cli.timezone.as_deref())?.today()),
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let today = resolve_today(cli)?;
    let api = HttpApi::new(cli.api_url(), cli.request_timeout());
    debug!(api_url = cli.api_url(), %today, "starting");

    let ctx = CommandContext {
        cli,
        api: &api,
        today,
        options: ViewOptions {
            use_color: cli.use_color(),
        },
    };
    app::run(&ctx)
}

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    logging::init(cli.debug);
    for warning in &config.warnings {
        warn!("{warning}");
    }
    if let Some(path) = &config.source {
        debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        if e.is_retryable() {
            eprintln!("Is the habit API running at {}? Try again once it is up.", cli.api_url());
        }
        std::process::exit(1);
    }
}
