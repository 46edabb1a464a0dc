use std::env;

use tracing::{debug, warn};

pub const WEBHOOK_URL_ENV: &str = "NOTIFY_TEAMS_WEBHOOK_URL";
pub const NAGIOS_FQDN_ENV: &str = "NAGIOS_FQDN";
pub const LOG_FILTER_ENV: &str = "NOTIFY_TEAMS_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";
const FALLBACK_ACK_HOST: &str = "localhost";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Overrides the host written into the "Acknowledge" link.
    pub nagios_fqdn: Option<String>,
    pub log_filter: String,
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenv()` first
    /// if a `.env` file should be honored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let nagios_fqdn = lookup(NAGIOS_FQDN_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_filter = lookup(LOG_FILTER_ENV)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            nagios_fqdn,
            log_filter,
        }
    }

    pub fn ack_host(&self) -> String {
        self.nagios_fqdn.clone().unwrap_or_else(local_fqdn)
    }
}

/// Fully-qualified name of the machine running the monitoring daemon.
pub fn local_fqdn() -> String {
    fqdn_from(raw_hostname(), canonical_name)
}

/// Canonical name first, then the raw host name, then `localhost`.
pub fn fqdn_from<R>(raw: Option<String>, resolve: R) -> String
where
    R: Fn(&str) -> Option<String>,
{
    let Some(raw) = raw.filter(|name| !name.is_empty()) else {
        warn!("local hostname is unavailable, using {}", FALLBACK_ACK_HOST);
        return FALLBACK_ACK_HOST.to_string();
    };

    match resolve(&raw).filter(|name| !name.is_empty()) {
        Some(fqdn) => {
            debug!(host = %raw, fqdn = %fqdn, "resolved local hostname");
            fqdn
        }
        None => {
            warn!(host = %raw, "could not resolve canonical name, using raw hostname");
            raw
        }
    }
}

fn raw_hostname() -> Option<String> {
    match hostname::get().map(|h| h.into_string()) {
        Ok(Ok(name)) => Some(name),
        Ok(Err(_)) => {
            warn!("local hostname is not valid UTF-8");
            None
        }
        Err(e) => {
            warn!("failed to read local hostname: {}", e);
            None
        }
    }
}

/// Forward lookup of `name`, then reverse lookup of its first address.
fn canonical_name(name: &str) -> Option<String> {
    let addr = dns_lookup::lookup_host(name).ok()?.into_iter().next()?;
    dns_lookup::lookup_addr(&addr).ok()
}

/// Picks the webhook: explicit flag first, then environment. Blank values
/// count as missing.
pub fn resolve_webhook_url(flag: Option<String>, env_value: Option<String>) -> Option<String> {
    flag.filter(|u| !u.trim().is_empty())
        .or_else(|| env_value.filter(|u| !u.trim().is_empty()))
}
