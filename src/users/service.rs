use std::backtrace::Backtrace;

use rusqlite::{Connection, ErrorCode, TransactionBehavior};

use crate::guard::hash_credentials;
use crate::model::api::UserApi;
use crate::model::error::user_errors::{CreateAdminError, RegisterUserError, VerifyUserError};
use crate::model::request::{NewAuth, RegisterUserRequest};
use crate::organisations::repository as organisation_repository;
use crate::repository::{close_connection, open_connection};
use crate::users::models::UserRecord;
use crate::users::repository as user_repository;

/// the result of checking a set of basic auth credentials against the Users table
#[derive(Debug, PartialEq)]
pub enum CheckAuthResult {
    Valid(UserRecord),
    Invalid,
    DbError,
}

/// registers a new, unverified, non-admin user
pub fn register(request: RegisterUserRequest) -> Result<UserApi, RegisterUserError> {
    let username = request.username.trim().to_string();
    if username.is_empty() || request.password.trim().is_empty() {
        return Err(RegisterUserError::MissingCredentials);
    }
    let user = UserRecord {
        id: None,
        password_hash: hash_credentials(&username, &request.password),
        username,
        organisation_id: request.organisation_id,
        verified: false,
        admin: false,
    };
    let mut con = open_connection();
    let result = insert_new_user(&user, &mut con);
    close_connection(con);
    let created = result?;
    log::info!("Registered user {}", created.username);
    Ok(UserApi::from(created))
}

/// checks the username and organisation and saves the user inside one immediate transaction,
/// so concurrent registrations of the same name queue up behind each other
fn insert_new_user(
    user: &UserRecord,
    con: &mut Connection,
) -> Result<UserRecord, RegisterUserError> {
    let tx = con.transaction_with_behavior(TransactionBehavior::Immediate)?;
    if user_repository::get_user_by_username(&user.username, &tx)?.is_some() {
        log::warn!(
            "Could not register {}, because that username is already taken",
            user.username
        );
        return Err(RegisterUserError::UsernameTaken);
    }
    if let Some(organisation_id) = user.organisation_id {
        if organisation_repository::get_organisation(organisation_id, &tx)?.is_none() {
            log::warn!(
                "Could not register {}, because organisation {organisation_id} does not exist",
                user.username
            );
            return Err(RegisterUserError::OrganisationNotFound);
        }
    }
    let created = user_repository::create_user(user, &tx).map_err(unique_username_error)?;
    tx.commit()?;
    Ok(created)
}

/// the Users table rejecting a duplicate username still means the name is taken
fn unique_username_error(e: rusqlite::Error) -> RegisterUserError {
    if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
        RegisterUserError::UsernameTaken
    } else {
        RegisterUserError::from(e)
    }
}

/// creates the first administrator. Only works while nobody else is an administrator,
/// after that admins are the ones running the board
pub fn create_admin(auth: NewAuth) -> Result<UserApi, CreateAdminError> {
    let username = auth.username.trim().to_string();
    if username.is_empty() || auth.password.trim().is_empty() {
        return Err(CreateAdminError::MissingCredentials);
    }
    let mut con = open_connection();
    let result = insert_first_admin(&username, &auth.password, &mut con);
    close_connection(con);
    match result {
        Ok(Some(admin)) => {
            log::info!("Created administrator {username}");
            Ok(UserApi::from(admin))
        }
        Ok(None) => Err(CreateAdminError::AlreadyExists),
        Err(e) => {
            log::error!(
                "Failed to create administrator {username}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(CreateAdminError::DbError)
        }
    }
}

/// checks for an existing admin and inserts the new one in the same transaction.
/// `Ok(None)` means an admin was already there
fn insert_first_admin(
    username: &str,
    password: &str,
    con: &mut Connection,
) -> Result<Option<UserRecord>, rusqlite::Error> {
    let tx = con.transaction_with_behavior(TransactionBehavior::Immediate)?;
    if user_repository::count_admins(&tx)? > 0 {
        return Ok(None);
    }
    let admin = user_repository::create_user(
        &UserRecord {
            id: None,
            username: username.to_string(),
            password_hash: hash_credentials(username, password),
            organisation_id: None,
            verified: true,
            admin: true,
        },
        &tx,
    )?;
    tx.commit()?;
    Ok(Some(admin))
}

/// marks the user with the passed id as verified, so their future listings skip moderation
pub fn verify_user(id: u32) -> Result<(), VerifyUserError> {
    let con = open_connection();
    let result = user_repository::set_verified(id, true, &con);
    close_connection(con);
    match result {
        Ok(0) => {
            log::warn!("Could not verify user {id}, because they do not exist");
            Err(VerifyUserError::UserNotFound)
        }
        Ok(_) => {
            log::info!("User {id} is now verified");
            Ok(())
        }
        Err(e) => {
            log::error!(
                "Failed to verify user {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(VerifyUserError::DbError)
        }
    }
}

/// Checks if the passed credentials match a user in the database
pub fn check_auth(username: &str, password: &str) -> CheckAuthResult {
    let con = open_connection();
    let result = user_repository::get_user_by_username(username.trim(), &con);
    close_connection(con);
    match result {
        Ok(Some(user)) if user.password_hash == hash_credentials(&user.username, password) => {
            CheckAuthResult::Valid(user)
        }
        Ok(_) => CheckAuthResult::Invalid,
        Err(e) => {
            log::error!(
                "Failed to check auth in database: {e:?}\n{}",
                Backtrace::force_capture()
            );
            CheckAuthResult::DbError
        }
    }
}
