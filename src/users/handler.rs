use rocket::serde::json::Json;

use crate::guard::{HeaderAuth, ValidateResult};
use crate::model::api::UserApi;
use crate::model::error::user_errors::{RegisterUserError, VerifyUserError};
use crate::model::request::RegisterUserRequest;
use crate::model::response::user_responses::{
    GetCurrentUserResponse, RegisterUserResponse, VerifyUserResponse,
};
use crate::model::response::BasicMessage;
use crate::users::service;

#[post("/", data = "<request>")]
pub fn register_user(request: Json<RegisterUserRequest>) -> RegisterUserResponse {
    match service::register(request.into_inner()) {
        Ok(user) => RegisterUserResponse::Created(Json::from(user)),
        Err(RegisterUserError::UsernameTaken) => RegisterUserResponse::BadRequest(
            BasicMessage::new("A user with that username already exists."),
        ),
        Err(RegisterUserError::MissingCredentials) => RegisterUserResponse::BadRequest(
            BasicMessage::new("username and password must not be blank."),
        ),
        Err(RegisterUserError::OrganisationNotFound) => RegisterUserResponse::BadRequest(
            BasicMessage::new("The organisation with the passed id does not exist."),
        ),
        Err(RegisterUserError::DbError) => RegisterUserResponse::UserDbError(BasicMessage::new(
            "Failed to save user to the database. Check server logs for details",
        )),
    }
}

#[get("/me")]
pub fn get_current_user(auth: HeaderAuth) -> GetCurrentUserResponse {
    match auth.validate() {
        ValidateResult::Ok(user) => {
            GetCurrentUserResponse::Success(Json::from(UserApi::from(user)))
        }
        ValidateResult::Invalid => {
            GetCurrentUserResponse::Unauthorized("Bad Credentials".to_string())
        }
        ValidateResult::DbError => GetCurrentUserResponse::UserDbError(BasicMessage::new(
            "Failed to check credentials. Check server logs for details",
        )),
    }
}

#[put("/<id>/verify")]
pub fn verify_user(id: u32, auth: HeaderAuth) -> VerifyUserResponse {
    match auth.validate() {
        ValidateResult::Ok(user) if user.admin => { /* no op */ }
        ValidateResult::Ok(_) => {
            return VerifyUserResponse::Forbidden(BasicMessage::new(
                "Only administrators can verify users.",
            ))
        }
        ValidateResult::Invalid => {
            return VerifyUserResponse::Unauthorized("Bad Credentials".to_string())
        }
        ValidateResult::DbError => {
            return VerifyUserResponse::UserDbError(BasicMessage::new(
                "Failed to check credentials. Check server logs for details",
            ))
        }
    };
    match service::verify_user(id) {
        Ok(()) => VerifyUserResponse::Success(()),
        Err(VerifyUserError::UserNotFound) => VerifyUserResponse::UserNotFound(BasicMessage::new(
            "The user with the passed id could not be found.",
        )),
        Err(VerifyUserError::DbError) => VerifyUserResponse::UserDbError(BasicMessage::new(
            "Failed to update user in database. Check server logs for details",
        )),
    }
}
