pub mod listing_requests;
pub mod organisation_requests;

use rocket::serde::Deserialize;

/// Because `HeaderAuth` is used as a request guard, we can't use it for creating login credentials.
/// This allows us to accept one in a post body.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewAuth {
    pub username: String,
    pub password: String,
}

/// body for `POST /users`
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "organisationId", default)]
    pub organisation_id: Option<u32>,
}
