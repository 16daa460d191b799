use once_cell::sync::Lazy;
use regex::Regex;
use rocket::serde::{Deserialize, Serialize};

use crate::model::api::{AddressApi, MaterialApi};

//language=RegExp
pub(crate) static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\- ]{4,19}$").unwrap());

/// body for creating and updating listings. Creating turns every entry of `materials` into its own listing;
/// updating only looks at the first one
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ListingRequest {
    pub address: AddressApi,
    pub contactor_name: String,
    pub contactor_phone: String,
    pub organisation_name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub materials: Vec<MaterialApi>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct RejectRequest {
    pub message: String,
}

impl ListingRequest {
    /// checks the parts of the request that json parsing can't. Returns a message meant for the client on failure
    pub fn validate(&self) -> Result<(), String> {
        if self.materials.is_empty() {
            return Err("At least one material is required.".to_string());
        }
        if self.contactor_name.trim().is_empty() {
            return Err("contactorName must not be blank.".to_string());
        }
        if !PHONE_REGEX.is_match(self.contactor_phone.trim()) {
            return Err(format!(
                "{} is not a valid phone number.",
                self.contactor_phone
            ));
        }
        for material in &self.materials {
            if material.name.trim().is_empty() || material.category.trim().is_empty() {
                return Err("Every material needs a name and a category.".to_string());
            }
            if material.quantity == 0 {
                return Err(format!("Quantity for {} must be above 0.", material.name));
            }
        }
        Ok(())
    }
}
