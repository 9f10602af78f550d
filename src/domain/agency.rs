use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AgencyKind {
    Government,
    #[serde(rename = "PSU")]
    Psu,
    #[serde(rename = "NGO")]
    Ngo,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    pub name: String,
    pub kind: AgencyKind,
}
