use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::users::models::UserRecord;
use crate::users::repository as user_repository;

#[derive(PartialEq, Debug)]
pub enum UserLookupError {
    /// no user with that id exists
    NotFound,
    /// an error with the database
    DbError,
}

/// resolves users for services that need to know who they're acting for, e.g. whether a listing's creator is verified
pub trait UserLookup {
    fn get_user(&self, user_id: u32) -> Result<UserRecord, UserLookupError>;
}

/// looks users up on whatever connection (or transaction) it was built with
pub struct SqliteUserLookup<'a> {
    con: &'a Connection,
}

impl<'a> SqliteUserLookup<'a> {
    pub fn new(con: &'a Connection) -> Self {
        Self { con }
    }
}

impl UserLookup for SqliteUserLookup<'_> {
    fn get_user(&self, user_id: u32) -> Result<UserRecord, UserLookupError> {
        match user_repository::get_user(user_id, self.con) {
            Ok(user) => Ok(user),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                log::warn!("No user with id {user_id} exists");
                Err(UserLookupError::NotFound)
            }
            Err(e) => {
                log::error!(
                    "Failed to look up user {user_id}! Error is {e:?}\n{}",
                    Backtrace::force_capture()
                );
                Err(UserLookupError::DbError)
            }
        }
    }
}
