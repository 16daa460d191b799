use std::backtrace::Backtrace;

#[derive(PartialEq, Debug)]
pub enum RegisterOrganisationError {
    /// an error with the database
    DbError,
    /// another organisation is already registered with that credit code
    CreditCodeTaken,
}

#[derive(PartialEq, Debug)]
pub enum GetOrganisationError {
    /// an error with the database
    DbError,
    /// no organisation with that id exists
    NotFound,
}

impl From<rusqlite::Error> for RegisterOrganisationError {
    fn from(e: rusqlite::Error) -> Self {
        log::error!(
            "Database error while registering an organisation: {e:?}\n{}",
            Backtrace::force_capture()
        );
        RegisterOrganisationError::DbError
    }
}
