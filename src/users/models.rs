/// represents a row in the Users table of the database
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UserRecord {
    /// will only be populated when pulled from the database
    pub id: Option<u32>,
    pub username: String,
    /// sha256 of `username:password`, see [`crate::guard::hash_credentials`]
    pub password_hash: String,
    pub organisation_id: Option<u32>,
    /// verified users' listings skip moderation
    pub verified: bool,
    /// admins can moderate listings and verify other users
    pub admin: bool,
}
