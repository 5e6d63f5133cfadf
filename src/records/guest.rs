//! Invited guests and their RSVP answers

use serde::{Deserialize, Serialize};

use super::fields::{Fallback, Field, Fields};
use super::{Record, Resource};

pub const NAME: Field = Field::new("Name").aliases(&["name"]);
pub const EMAIL: Field = Field::new("Email")
    .aliases(&["email"])
    .fallback(Fallback::Text("Pending"));
pub const RSVP: Field = Field::new("RSVP")
    .aliases(&["rsvp", "Rsvp"])
    .fallback(Fallback::Rsvp);
pub const GUEST: Field = Field::new("Guest")
    .aliases(&["guest", "GuestCount", "guestCount"])
    .fallback(Fallback::Count);
pub const MESSAGE: Field = Field::new("Message").aliases(&["message"]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "RSVP")]
    pub rsvp: String,
    #[serde(rename = "Guest")]
    pub guest: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl Record for GuestRecord {
    const RESOURCE: Resource = Resource::Guests;
    const KEY: Field = NAME;

    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            name: fields.get(&NAME),
            email: fields.get(&EMAIL),
            rsvp: fields.get(&RSVP),
            guest: fields.get(&GUEST),
            message: fields.get(&MESSAGE),
        }
    }

    fn key(&self) -> &str {
        &self.name
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}
