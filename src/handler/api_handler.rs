use rocket::serde::{json::Json, Serialize};

use crate::model::error::user_errors::CreateAdminError;
use crate::model::request::NewAuth;
use crate::model::response::api_responses::CreateAdminResponse;
use crate::model::response::BasicMessage;
use crate::users::service;

static API_VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiVersion {
    version: &'static str,
}

impl ApiVersion {
    fn new() -> ApiVersion {
        ApiVersion {
            version: API_VERSION_NUMBER,
        }
    }
}

#[get("/version")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion::new())
}

/// bootstraps the first administrator. Once there is one, this always fails with a 400
#[post("/admin", data = "<auth>")]
pub fn create_admin(auth: Json<NewAuth>) -> CreateAdminResponse {
    match service::create_admin(auth.into_inner()) {
        Ok(admin) => CreateAdminResponse::Created(Json::from(admin)),
        Err(CreateAdminError::AlreadyExists) => CreateAdminResponse::AlreadyExists(
            BasicMessage::new("An administrator already exists."),
        ),
        Err(CreateAdminError::MissingCredentials) => CreateAdminResponse::MissingCredentials(
            BasicMessage::new("username and password must not be blank."),
        ),
        Err(CreateAdminError::DbError) => CreateAdminResponse::Failure(BasicMessage::new(
            "Failed to create the administrator. Check server logs for details",
        )),
    }
}
