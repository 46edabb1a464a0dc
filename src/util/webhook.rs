use reqwest::{Client, StatusCode, header};
use tracing::{info, warn};

use crate::model::{AppError, ErrorCode, NotificationCard};

pub fn serialize_card(card: &NotificationCard) -> Result<String, AppError> {
    serde_json::to_string(card)
        .map_err(|e| AppError::with_detail(ErrorCode::SerializationFailed, e.to_string()))
}

/// POSTs an already serialized card. Only a plain 200 counts as delivered.
pub async fn post_card(client: &Client, webhook_url: &str, body: String) -> Result<(), AppError> {
    let res = client
        .post(webhook_url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| AppError::with_detail(ErrorCode::TransportFailed, e.to_string()))?;

    match res.status() {
        StatusCode::OK => Ok(()),
        status => Err(AppError::with_detail(
            ErrorCode::UnexpectedStatus,
            status.to_string(),
        )),
    }
}

/// Delivers the card and prints `success` or `failure` on stdout.
pub async fn deliver(client: &Client, webhook_url: &str, body: String) -> bool {
    match post_card(client, webhook_url, body).await {
        Ok(()) => {
            info!("notification delivered");
            println!("success");
            true
        }
        Err(e) => {
            warn!(detail = e.detail().unwrap_or_default(), "{}", e);
            println!("failure");
            false
        }
    }
}
