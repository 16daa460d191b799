use rocket::serde::json::Json;

use crate::model::error::organisation_errors::{GetOrganisationError, RegisterOrganisationError};
use crate::model::request::organisation_requests::OrganisationRequest;
use crate::model::response::organisation_responses::{
    GetOrganisationResponse, RegisterOrganisationResponse,
};
use crate::model::response::BasicMessage;
use crate::organisations::service;

#[post("/", data = "<request>")]
pub fn register_organisation(request: Json<OrganisationRequest>) -> RegisterOrganisationResponse {
    let request = request.into_inner();
    if let Err(message) = request.validate() {
        return RegisterOrganisationResponse::BadRequest(BasicMessage::new(&message));
    }
    match service::register_organisation(request) {
        Ok(organisation) => RegisterOrganisationResponse::Created(Json::from(organisation)),
        Err(RegisterOrganisationError::CreditCodeTaken) => {
            RegisterOrganisationResponse::BadRequest(BasicMessage::new(
                "An organisation with that uniform social credit code already exists.",
            ))
        }
        Err(RegisterOrganisationError::DbError) => {
            RegisterOrganisationResponse::OrganisationDbError(BasicMessage::new(
                "Failed to save organisation to the database. Check server logs for details",
            ))
        }
    }
}

#[get("/<id>")]
pub fn get_organisation(id: u32) -> GetOrganisationResponse {
    match service::get_organisation(id) {
        Ok(organisation) => GetOrganisationResponse::Success(Json::from(organisation)),
        Err(GetOrganisationError::NotFound) => GetOrganisationResponse::OrganisationNotFound(
            BasicMessage::new("The organisation with the passed id could not be found."),
        ),
        Err(GetOrganisationError::DbError) => {
            GetOrganisationResponse::OrganisationDbError(BasicMessage::new(
                "Failed to pull organisation from the database. Check server logs for details",
            ))
        }
    }
}
