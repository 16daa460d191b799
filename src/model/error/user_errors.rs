use std::backtrace::Backtrace;

#[derive(PartialEq, Debug)]
pub enum RegisterUserError {
    /// an error with the database
    DbError,
    /// another user already has that username
    UsernameTaken,
    /// username or password was blank
    MissingCredentials,
    /// the organisation the user says they belong to isn't registered
    OrganisationNotFound,
}

#[derive(PartialEq, Debug)]
pub enum CreateAdminError {
    /// an administrator already exists, further ones can't be bootstrapped
    AlreadyExists,
    /// username or password was blank
    MissingCredentials,
    /// an error with the database
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum VerifyUserError {
    /// an error with the database
    DbError,
    /// no user with that id exists
    UserNotFound,
}

impl From<rusqlite::Error> for RegisterUserError {
    fn from(e: rusqlite::Error) -> Self {
        log::error!(
            "Database error while registering a user: {e:?}\n{}",
            Backtrace::force_capture()
        );
        RegisterUserError::DbError
    }
}
