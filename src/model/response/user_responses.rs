use rocket::serde::json::Json;

use crate::model::api::UserApi;
use crate::model::response::{BasicMessage, NoContent};

#[derive(Responder)]
pub enum RegisterUserResponse {
    #[response(status = 201, content_type = "json")]
    Created(Json<UserApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetCurrentUserResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<UserApi>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum VerifyUserResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    UserNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
}
