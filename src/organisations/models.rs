use chrono::NaiveDateTime;

/// represents a row in the Organisations table, e.g. a hospital that posts listings
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OrganisationRecord {
    /// will only be populated when pulled from the database
    pub id: Option<u32>,
    pub name: String,
    /// 18 character uniform social credit code, unique per organisation
    pub credit_code: String,
    pub contactor_name: String,
    pub contactor_phone: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}
