use once_cell::sync::Lazy;
use regex::Regex;
use rocket::serde::{Deserialize, Serialize};

use crate::model::request::listing_requests::PHONE_REGEX;

//language=RegExp
static CREDIT_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Z]{18}$").unwrap());

/// body for `POST /organisations`
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct OrganisationRequest {
    pub name: String,
    pub uniform_social_credit_code: String,
    pub contactor_name: String,
    pub contactor_phone: String,
}

impl OrganisationRequest {
    /// credit codes are stored trimmed and upper case
    pub fn normalized_credit_code(&self) -> String {
        self.uniform_social_credit_code.trim().to_uppercase()
    }

    /// returns a message meant for the client on failure
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be blank.".to_string());
        }
        if !CREDIT_CODE_REGEX.is_match(&self.normalized_credit_code()) {
            return Err(format!(
                "{} is not a valid uniform social credit code.",
                self.uniform_social_credit_code
            ));
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
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> OrganisationRequest {
        OrganisationRequest {
            name: "Union Hospital".to_string(),
            uniform_social_credit_code: " 91420100ma4k2b3c4d ".to_string(),
            contactor_name: "Li".to_string(),
            contactor_phone: "13800000000".to_string(),
        }
    }

    #[test]
    fn validate_accepts_lower_case_credit_code() {
        assert_eq!(Ok(()), request().validate());
        assert_eq!("91420100MA4K2B3C4D", request().normalized_credit_code());
    }

    #[test]
    fn validate_rejects_short_credit_code() {
        let mut request = request();
        request.uniform_social_credit_code = "9142010".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut request = request();
        request.name = "  ".to_string();
        assert_eq!(
            Err("name must not be blank.".to_string()),
            request.validate()
        );
    }

    #[test]
    fn validate_rejects_bad_phone() {
        let mut request = request();
        request.contactor_phone = "call me".to_string();
        assert!(request.validate().is_err());
    }
}
