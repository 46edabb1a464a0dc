use serde::Serialize;

pub const CARD_TYPE: &str = "MessageCard";
pub const CARD_CONTEXT: &str = "https://schema.org/extensions";

/// Legacy Office 365 connector card, as accepted by Teams incoming webhooks.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCard {
    #[serde(rename = "@type")]
    pub card_type: &'static str,
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub summary: String,
    pub title: String,
    pub text: String,
    pub theme_color: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub potential_action: Vec<PotentialAction>,
}

impl NotificationCard {
    pub fn action_link(&self) -> Option<&str> {
        self.potential_action
            .first()
            .and_then(|a| a.targets.first())
            .map(|t| t.uri.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PotentialAction {
    #[serde(rename = "@type")]
    pub action_type: &'static str,
    pub name: String,
    pub targets: Vec<ActionTarget>,
}

impl PotentialAction {
    pub fn open_uri(name: &str, uri: String) -> Self {
        Self {
            action_type: "OpenUri",
            name: name.to_string(),
            targets: vec![ActionTarget {
                os: "default",
                uri,
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionTarget {
    pub os: &'static str,
    pub uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(actions: Vec<PotentialAction>) -> NotificationCard {
        NotificationCard {
            card_type: CARD_TYPE,
            context: CARD_CONTEXT,
            summary: "t".into(),
            title: "t".into(),
            text: "body".into(),
            theme_color: "00FF00",
            potential_action: actions,
        }
    }

    #[test]
    fn serializes_connector_card_keys() {
        let value = serde_json::to_value(card(vec![PotentialAction::open_uri(
            "Acknowledge",
            "http://nagios/x".into(),
        )]))
        .unwrap();

        assert_eq!(
            value,
            json!({
                "@type": "MessageCard",
                "@context": "https://schema.org/extensions",
                "summary": "t",
                "title": "t",
                "text": "body",
                "themeColor": "00FF00",
                "potentialAction": [{
                    "@type": "OpenUri",
                    "name": "Acknowledge",
                    "targets": [{ "os": "default", "uri": "http://nagios/x" }]
                }]
            })
        );
    }

    #[test]
    fn omits_empty_actions() {
        let value = serde_json::to_value(card(Vec::new())).unwrap();
        assert!(value.get("potentialAction").is_none());
        assert_eq!(card(Vec::new()).action_link(), None);
    }
}
