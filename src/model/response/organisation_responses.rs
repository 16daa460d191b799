use rocket::serde::json::Json;

use crate::model::api::OrganisationApi;
use crate::model::response::BasicMessage;

#[derive(Responder)]
pub enum RegisterOrganisationResponse {
    #[response(status = 201, content_type = "json")]
    Created(Json<OrganisationApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    OrganisationDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetOrganisationResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<OrganisationApi>),
    #[response(status = 404, content_type = "json")]
    OrganisationNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    OrganisationDbError(Json<BasicMessage>),
}
