use rocket::serde::json::Json;

use crate::model::api::UserApi;
use crate::model::response::BasicMessage;

#[derive(Responder)]
pub enum CreateAdminResponse {
    #[response(status = 201, content_type = "json")]
    Created(Json<UserApi>),
    #[response(status = 400, content_type = "json")]
    AlreadyExists(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    MissingCredentials(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}
