use std::fmt;

/// Dashboard settings handed to each session. The password is a
/// convenience gate for a personal site, not access control.
#[derive(Clone, Default)]
pub struct DashboardConfig {
    password: String,
}

impl DashboardConfig {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// An unset password never matches
    pub fn accepts(&self, attempt: &str) -> bool {
        !self.password.is_empty() && self.password == attempt
    }
}

impl fmt::Debug for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardConfig")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-visitor login state for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    config: DashboardConfig,
    authenticated: bool,
}

impl DashboardSession {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            authenticated: false,
        }
    }

    /// Returns whether the session is authenticated after the attempt.
    /// A failed attempt does not log out an authenticated session.
    pub fn login(&mut self, attempt: &str) -> bool {
        if self.config.accepts(attempt) {
            self.authenticated = true;
        }
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
