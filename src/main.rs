use std::env;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

use notify_teams::cli::{Cli, read_long_message};
use notify_teams::configuration::{Settings, WEBHOOK_URL_ENV};
use notify_teams::run;
use notify_teams::telemetry::{get_subscriber, init_subscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env();

    // stdout is reserved for the success/failure indicator
    let subscriber = get_subscriber(
        "notify_teams".into(),
        settings.log_filter.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber)?;
    debug!(?settings, "loaded settings");

    let long_message = read_long_message();
    let outcome = run(cli, &settings, env::var(WEBHOOK_URL_ENV).ok(), long_message).await;

    Ok(ExitCode::from(outcome.exit_code() as u8))
}
