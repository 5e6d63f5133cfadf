//! Members of the wedding party, grouped by role category for display

use serde::{Deserialize, Serialize};

use super::fields::{Field, Fields};
use super::{Record, Resource};

pub const NAME: Field = Field::new("Name").aliases(&["name"]);
pub const ROLE_CATEGORY: Field = Field::new("RoleCategory").aliases(&["roleCategory"]);
pub const ROLE_TITLE: Field = Field::new("RoleTitle").aliases(&["roleTitle"]);
pub const EMAIL: Field = Field::new("Email").aliases(&["email"]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntourageRecord {
    pub name: String,
    pub role_category: String,
    pub role_title: String,
    pub email: String,
}

impl Record for EntourageRecord {
    const RESOURCE: Resource = Resource::Entourage;
    const KEY: Field = NAME;

    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            name: fields.get(&NAME),
            role_category: fields.get(&ROLE_CATEGORY),
            role_title: fields.get(&ROLE_TITLE),
            email: fields.get(&EMAIL),
        }
    }

    fn key(&self) -> &str {
        &self.name
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.role_category.as_str(), self.role_title.as_str()]
    }
}
