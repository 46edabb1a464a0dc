use crate::model::card::{CARD_CONTEXT, CARD_TYPE};
use crate::model::{AlertEvent, NotificationCard, PotentialAction};

pub const ACK_CGI_PATH: &str = "/nagios/cgi-bin/cmd.cgi";

// Nagios CGI command types
const CMD_ACKNOWLEDGE_HOST_PROBLEM: u8 = 33;
const CMD_ACKNOWLEDGE_SVC_PROBLEM: u8 = 34;

/// Builds the card for one alert. `ack_host` is the monitoring server the
/// "Acknowledge" button points back to.
pub fn build_card(event: &AlertEvent, ack_host: &str) -> NotificationCard {
    let title = format_title(event);

    let potential_action = if event.notification_type.wants_acknowledge() {
        vec![PotentialAction::open_uri(
            "Acknowledge",
            format_link(ack_host, &event.host, event.service()),
        )]
    } else {
        Vec::new()
    };

    NotificationCard {
        card_type: CARD_TYPE,
        context: CARD_CONTEXT,
        summary: title.clone(),
        title,
        text: format_text(
            event.check_output.as_deref(),
            event.long_message.as_deref(),
        ),
        theme_color: event.severity.theme_color(),
        potential_action,
    }
}

pub fn format_title(event: &AlertEvent) -> String {
    match event.service() {
        Some(service) => format!(
            "{}: {}/{} is {}",
            event.notification_type, event.host, service, event.severity
        ),
        None => format!(
            "{}: {} is {}",
            event.notification_type, event.host, event.severity
        ),
    }
}

pub fn format_text(check_output: Option<&str>, long_message: Option<&str>) -> String {
    let mut text = check_output.unwrap_or_default().to_string();
    if let Some(long) = long_message.filter(|m| !m.is_empty()) {
        text.push_str("\n\n");
        text.push_str(long);
    }
    text
}

/// Only spaces are escaped (as `+`); the CGI accepts everything else raw.
pub fn format_link(ack_host: &str, host: &str, service: Option<&str>) -> String {
    let host = host.replace(' ', "+");
    match service {
        Some(service) => format!(
            "http://{}{}?cmd_typ={}&host={}&service={}",
            ack_host,
            ACK_CGI_PATH,
            CMD_ACKNOWLEDGE_SVC_PROBLEM,
            host,
            service.replace(' ', "+")
        ),
        None => format!(
            "http://{}{}?cmd_typ={}&host={}",
            ack_host, ACK_CGI_PATH, CMD_ACKNOWLEDGE_HOST_PROBLEM, host
        ),
    }
}
