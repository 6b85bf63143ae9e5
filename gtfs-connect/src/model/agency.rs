use serde::{Deserialize, Serialize};

use super::{GroupField, GtfsFile, GtfsRecord};

/// a row of agency.txt, the operator of a set of routes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Agency {
    pub agency_id: String,
    pub agency_name: String,
    pub agency_url: String,
    pub agency_timezone: String,
    pub agency_lang: String,
    pub agency_phone: String,
}

impl GtfsRecord for Agency {
    const FILE: GtfsFile = GtfsFile::Agency;

    fn field(&self, field: GroupField) -> Option<&str> {
        match field {
            GroupField::AgencyId => Some(&self.agency_id),
            _ => None,
        }
    }
}
