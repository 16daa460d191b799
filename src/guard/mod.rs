use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use sha2::{Digest, Sha256};

use crate::users::models::UserRecord;
use crate::users::service::{check_auth, CheckAuthResult};

/// used to represent the result of calling `HeaderAuth::validate`
pub enum ValidateResult {
    Ok(UserRecord),
    Invalid,
    DbError,
}

/// basic auth credentials pulled off of the `Authorization` header
#[derive(Debug)]
pub struct HeaderAuth {
    pub username: String,
    pub password: String,
}

impl HeaderAuth {
    /// creates a `HeaderAuth` object from the passed header value.
    /// The value of header must be base64-encoded basic auth.
    pub fn from(header: &str) -> Result<HeaderAuth, &str> {
        // remove the "Basic " from the header, leaving only the base64 part
        let stripped_header = header.replace("Basic ", "");
        let decoded = match STANDARD.decode(stripped_header.trim()) {
            Ok(value) => value,
            Err(_) => return Err("Invalid basic auth format: not base64"),
        };
        let combined = match String::from_utf8(decoded) {
            Ok(value) => value,
            Err(_) => return Err("Invalid basic auth format: not utf-8"),
        };
        let split = combined.split(':').collect::<Vec<&str>>();
        // if there aren't exactly 2 parts, then something is wrong here
        if split.len() != 2 || split.iter().any(|part| part.trim().is_empty()) {
            return Err("Invalid basic auth format: missing username or password");
        }
        Ok(HeaderAuth {
            username: String::from(split[0].trim()),
            password: String::from(split[1].trim()),
        })
    }

    /// resolves these credentials to the user they belong to.
    ///
    /// _this is a convenience method to be used only in handlers_
    pub fn validate(self) -> ValidateResult {
        match check_auth(&self.username, &self.password) {
            CheckAuthResult::Valid(user) => ValidateResult::Ok(user),
            CheckAuthResult::Invalid => ValidateResult::Invalid,
            CheckAuthResult::DbError => ValidateResult::DbError,
        }
    }
}

/// the value stored in `Users.passwordHash`: a hex sha256 of `username:password`
pub fn hash_credentials(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    let combined = format!("{}:{}", username.trim(), password.trim());
    hasher.update(combined.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[rocket::async_trait]
impl<'a> FromRequest<'a> for HeaderAuth {
    type Error = AuthError;

    async fn from_request(request: &'a Request<'_>) -> Outcome<Self, Self::Error> {
        // just check if it's basic auth
        fn check_basic_auth(value: &str) -> bool {
            value.starts_with("Basic")
        }
        match request.headers().get_one("Authorization") {
            None => Outcome::Error((Status::Unauthorized, AuthError::Missing)),
            Some(value) if check_basic_auth(value) => match HeaderAuth::from(value) {
                Ok(auth) => Outcome::Success(auth),
                Err(_) => Outcome::Error((Status::Unauthorized, AuthError::Invalid)),
            },
            Some(_) => Outcome::Error((Status::Unauthorized, AuthError::Invalid)),
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    Missing,
    Invalid,
}
