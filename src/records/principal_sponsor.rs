//! Principal sponsors, stored upstream as one row per couple

use serde::{Deserialize, Serialize};

use super::fields::{Field, Fields};
use super::{Record, Resource};

pub const MALE: Field = Field::new("MalePrincipalSponsor").aliases(&["malePrincipalSponsor"]);
pub const FEMALE: Field = Field::new("FemalePrincipalSponsor").aliases(&["femalePrincipalSponsor"]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrincipalSponsorRecord {
    pub male_principal_sponsor: String,
    pub female_principal_sponsor: String,
}

impl Record for PrincipalSponsorRecord {
    const RESOURCE: Resource = Resource::PrincipalSponsor;
    const KEY: Field = MALE;
    const RENAME: Field = Field::new("originalName")
        .aliases(&["OriginalName", "originalMalePrincipalSponsor"]);

    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            male_principal_sponsor: fields.get(&MALE),
            female_principal_sponsor: fields.get(&FEMALE),
        }
    }

    fn key(&self) -> &str {
        &self.male_principal_sponsor
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.male_principal_sponsor.as_str(), self.female_principal_sponsor.as_str()]
    }
}
