//! Requests to join the guest list, pending approval from the dashboard

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::fields::{Field, Fields, ValidationError};
use super::guest::{EMAIL, GUEST, MESSAGE, NAME, RSVP};
use super::{Record, Resource};

pub const PHONE: Field = Field::new("Phone").aliases(&["phone"]);

static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRequestRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "RSVP")]
    pub rsvp: String,
    #[serde(rename = "Guest")]
    pub guest: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl Record for GuestRequestRecord {
    const RESOURCE: Resource = Resource::GuestRequests;
    const KEY: Field = NAME;

    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            name: fields.get(&NAME),
            email: fields.get(&EMAIL),
            phone: fields.get(&PHONE),
            rsvp: fields.get(&RSVP),
            guest: fields.get(&GUEST),
            message: fields.get(&MESSAGE),
        }
    }

    fn key(&self) -> &str {
        &self.name
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    // "Pending" is what a blank email defaults to, so a literal
    // "Pending" from the caller is accepted too
    fn check_new(&self) -> Result<(), ValidationError> {
        if self.email != "Pending" && !EMAIL_FORMAT.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}
