use std::backtrace::Backtrace;

use crate::users::lookup::UserLookupError;

#[derive(PartialEq, Debug)]
pub enum ListingError {
    /// an error with the database
    DbError,
    /// no listing of that kind with the passed id exists
    NotFound,
    /// the listing belongs to somebody else
    PermissionDenied,
    /// the user creating listings could not be found
    UserNotFound,
    /// the request is missing something the operation needs, e.g. an update without any material
    InvalidRequest,
}

impl From<rusqlite::Error> for ListingError {
    fn from(e: rusqlite::Error) -> Self {
        log::error!(
            "Database error while handling listings: {e:?}\n{}",
            Backtrace::force_capture()
        );
        ListingError::DbError
    }
}

impl From<UserLookupError> for ListingError {
    fn from(e: UserLookupError) -> Self {
        match e {
            UserLookupError::NotFound => ListingError::UserNotFound,
            UserLookupError::DbError => ListingError::DbError,
        }
    }
}
