//! Client for the Apps Script endpoints fronting each spreadsheet.
//!
//! Every script accepts GET to list rows and POST to write. A POST
//! without an `action` field appends a row; `"update"` and `"delete"`
//! select the other operations.

use std::fmt;

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::records::fields::{DETAILS_LIMIT, normalize, truncate};

/// Ways a write to the spreadsheet can fail.
#[derive(Debug)]
pub enum UpstreamFailure {
    /// Could not reach the script or read its reply
    Transport(reqwest::Error),
    /// The script answered with a non-2xx status
    Status { status: u16, body: String },
    /// The script answered 2xx with something that is not JSON
    Malformed { body: String },
    /// The script answered with an `error` field
    Rejected { message: String },
}

impl UpstreamFailure {
    /// Diagnostic text safe to hand back to the caller
    pub fn details(&self) -> String {
        match self {
            Self::Transport(err) => format!("Request to upstream failed: {}", err),
            Self::Status { status, body } => format!(
                "Upstream responded with status {}: {}",
                status,
                truncate(body, DETAILS_LIMIT)
            ),
            Self::Malformed { body } => format!(
                "Upstream returned invalid JSON: {}",
                truncate(body, DETAILS_LIMIT)
            ),
            Self::Rejected { message } => message.clone(),
        }
    }
}

impl fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details())
    }
}

#[derive(Clone, Debug, Default)]
pub struct SheetsClient {
    http: Client,
}

impl SheetsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the rows behind `url`.
    ///
    /// Transport errors and non-2xx statuses are errors. A 2xx body that
    /// is not JSON (Apps Script serves an HTML page when the script
    /// throws) comes back as `Value::Null` so the caller can treat it as
    /// an empty sheet.
    pub async fn fetch(&self, url: &str) -> Result<Value> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(anyhow!(
                "Upstream responded with status {}: {}",
                status.as_u16(),
                truncate(&body, DETAILS_LIMIT)
            ));
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(
                    "Upstream GET {} returned non-JSON body ({}): {}",
                    url,
                    err,
                    truncate(&body, DETAILS_LIMIT)
                );
                Ok(Value::Null)
            }
        }
    }

    /// POST `payload` to `url` and return the parsed reply.
    pub async fn submit<T>(&self, url: &str, payload: &T) -> Result<Value, UpstreamFailure>
    where
        T: Serialize + ?Sized,
    {
        let resp = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(UpstreamFailure::Transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(UpstreamFailure::Transport)?;

        if !status.is_success() {
            return Err(UpstreamFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|_| UpstreamFailure::Malformed { body: body.clone() })?;

        if let Some(err) = value.get("error").filter(|e| !e.is_null()) {
            return Err(UpstreamFailure::Rejected {
                message: normalize(err),
            });
        }

        Ok(value)
    }
}
