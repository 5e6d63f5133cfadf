use std::env;

use anyhow::{Context, Result};

use crate::dashboard::DashboardConfig;
use crate::records::Resource;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub guests_url: String,
    pub guest_requests_url: String,
    pub entourage_url: String,
    pub principal_sponsor_url: String,
    pub static_dir: String,
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load the configuration from `WEDDING_*` environment variables.
    /// Each resource's Apps Script URL is required.
    pub fn from_env() -> Result<Self> {
        let guests_url = required("WEDDING_GUESTS_URL")?;
        let guest_requests_url = required("WEDDING_GUEST_REQUESTS_URL")?;
        let entourage_url = required("WEDDING_ENTOURAGE_URL")?;
        let principal_sponsor_url = required("WEDDING_PRINCIPAL_SPONSOR_URL")?;
        let static_dir = env::var("WEDDING_STATIC_DIR").unwrap_or_else(|_| "./public".to_string());
        let password = env::var("WEDDING_DASHBOARD_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("WEDDING_DASHBOARD_PASSWORD not set, dashboard login is disabled");
            String::new()
        });

        Ok(Self {
            guests_url,
            guest_requests_url,
            entourage_url,
            principal_sponsor_url,
            static_dir,
            dashboard: DashboardConfig::new(password),
        })
    }

    /// Upstream script URL for a resource
    pub fn endpoint(&self, resource: Resource) -> &str {
        match resource {
            Resource::Guests => &self.guests_url,
            Resource::GuestRequests => &self.guest_requests_url,
            Resource::Entourage => &self.entourage_url,
            Resource::PrincipalSponsor => &self.principal_sponsor_url,
        }
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("Missing env var {}", key))
}
