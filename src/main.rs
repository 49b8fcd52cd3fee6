use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trello_stats::client::TrelloClient;
use trello_stats::config::settings::{
    API_KEY_VAR, API_TOKEN_VAR, DEFAULT_API_URL, DEFAULT_LIST_NAME, DEFAULT_ORG_NAME,
};
use trello_stats::config::{window, Settings, SettingsInput};
use trello_stats::reports;

#[derive(Parser)]
#[command(
    name = "trello-stats",
    version,
    about = "Gather Trello Statistics.",
    long_about = "Reports, per team member, the cards sitting in a Done list that \
                  were edited since the start date. Without --start-date the \
                  window opens on the most recent March 1."
)]
struct Cli {
    /// The start date to query from (YYYY-MM-DD)
    #[arg(short, long, value_parser = window::parse_date)]
    start_date: Option<NaiveDate>,

    /// Organization short name
    #[arg(short, long, env = "TRELLO_ORG", default_value = DEFAULT_ORG_NAME)]
    org: String,

    /// Name of the list holding finished cards
    #[arg(long, default_value = DEFAULT_LIST_NAME)]
    list: String,

    /// Trello API key
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Trello API token
    #[arg(long, env = API_TOKEN_VAR, hide_env_values = true)]
    api_token: Option<String>,

    /// Trello API root
    #[arg(long, env = "TRELLO_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    api_url: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let today = chrono::Local::now().date_naive();
    let input = SettingsInput {
        api_key: cli.api_key,
        api_token: cli.api_token,
        start_date: cli.start_date,
        org_name: Some(cli.org),
        list_name: Some(cli.list),
        api_url: Some(cli.api_url),
    };

    let settings = match Settings::resolve(input, today) {
        Ok(settings) => settings,
        Err(e) if e.is_config() => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(
        start = %settings.start_date,
        days = settings.days,
        org = %settings.org_name,
        "resolved query window"
    );

    let client = TrelloClient::new(&settings.api_url, settings.credentials.clone())?;
    let report = reports::run(&settings, &client)?;
    tracing::info!(
        cards = report.total_cards,
        members = report.members.len(),
        "report built"
    );

    print!("{}", report.format_terminal());

    Ok(())
}
