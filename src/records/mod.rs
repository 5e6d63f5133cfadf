//! Record shapes for each spreadsheet-backed resource and the payloads
//! forwarded upstream for them.

pub mod entourage;
pub mod fields;
pub mod guest;
pub mod guest_request;
mod payload;
pub mod principal_sponsor;

pub use entourage::EntourageRecord;
pub use fields::{Field, Fields, ValidationError, normalize};
pub use guest::GuestRecord;
pub use guest_request::GuestRequestRecord;
pub use payload::{Outbound, create_payload, delete_payload, read_rows, update_payload};
pub use principal_sponsor::PrincipalSponsorRecord;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// The four spreadsheets this site proxies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Guests,
    GuestRequests,
    Entourage,
    PrincipalSponsor,
}

impl Resource {
    /// Singular noun used in error messages
    pub fn noun(self) -> &'static str {
        match self {
            Self::Guests => "guest",
            Self::GuestRequests => "guest request",
            Self::Entourage => "entourage member",
            Self::PrincipalSponsor => "principal sponsor",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::Guests => "guests",
            Self::GuestRequests => "guest requests",
            Self::Entourage => "entourage",
            Self::PrincipalSponsor => "principal sponsors",
        }
    }
}

/// A flat spreadsheet row keyed by a single natural key.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const RESOURCE: Resource;

    /// The natural key used for lookup, update and delete
    const KEY: Field;

    /// Field holding the previous key value on a rename
    const RENAME: Field = fields::ORIGINAL_NAME;

    /// Build a record from a JSON object, normalizing every field and
    /// applying defaults. Never fails.
    fn from_fields(fields: &Fields<'_>) -> Self;

    fn key(&self) -> &str;

    /// Text fields matched by the dashboard search box
    fn search_text(&self) -> Vec<&str>;

    /// Extra checks run only when a record is created.
    fn check_new(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
