use rocket::serde::json::Json;

use crate::model::api::{ListingApi, PageApi};
use crate::model::response::{BasicMessage, NoContent};

#[derive(Responder)]
pub enum ListListingsResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<PageApi<ListingApi>>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ListingDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetListingResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<ListingApi>),
    #[response(status = 404, content_type = "json")]
    ListingNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ListingDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateListingResponse {
    #[response(status = 201, content_type = "json")]
    Success(Json<Vec<ListingApi>>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 404, content_type = "json")]
    UserNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ListingDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum UpdateListingResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<ListingApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    ListingNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ListingDbError(Json<BasicMessage>),
}

/// used by both approve and reject
#[derive(Responder)]
pub enum ModerateListingResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 403, content_type = "json")]
    Forbidden(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    ListingNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ListingDbError(Json<BasicMessage>),
}
