pub mod card;
pub mod cli;
pub mod configuration;
pub mod model;
pub mod telemetry;
pub mod util;

use reqwest::Client;
use tracing::{error, info, instrument};

use card::build_card;
use cli::Cli;
use configuration::{Settings, resolve_webhook_url};
use model::{AlertEvent, AppError, ErrorCode};
use util::webhook::{deliver, serialize_card};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoUrl,
    Delivered,
    Failed,
}

impl Outcome {
    /// Delivery failures still exit 0; see `ErrorCode::exit_code`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::NoUrl => ErrorCode::MissingWebhookUrl.exit_code(),
            Outcome::Delivered => 0,
            Outcome::Failed => ErrorCode::UnexpectedStatus.exit_code(),
        }
    }
}

/// One alert, start to finish: resolve the webhook, build the card, post it.
pub async fn run(
    cli: Cli,
    settings: &Settings,
    webhook_env: Option<String>,
    long_message: Option<String>,
) -> Outcome {
    let (event, url_flag) = cli.into_event(long_message);

    let Some(webhook_url) = resolve_webhook_url(url_flag, webhook_env) else {
        let err = AppError::new(ErrorCode::MissingWebhookUrl);
        error!("{}", err);
        println!("{}", err);
        return Outcome::NoUrl;
    };

    notify(&Client::new(), &webhook_url, &event, &settings.ack_host()).await
}

#[instrument(skip_all, fields(host = %event.host, kind = %event.notification_type))]
pub async fn notify(client: &Client, webhook_url: &str, event: &AlertEvent, ack_host: &str) -> Outcome {
    let card = build_card(event, ack_host);
    info!(title = %card.title, "built notification card");

    let body = match serialize_card(&card) {
        Ok(body) => body,
        Err(e) => {
            error!(detail = e.detail().unwrap_or_default(), "{}", e);
            println!("failure");
            return Outcome::Failed;
        }
    };

    if deliver(client, webhook_url, body).await {
        Outcome::Delivered
    } else {
        Outcome::Failed
    }
}
