use chrono::NaiveDateTime;
use rocket::serde::{Deserialize, Serialize};

use crate::listings::models::{ListingRecord, ListingStatus};
use crate::organisations::models::OrganisationRecord;
use crate::users::models::UserRecord;
use crate::util::split_image_urls;

/// the location block of a listing. Same shape whether it's coming in on a request or going out on a response
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct AddressApi {
    pub country: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub street_address: String,
}

/// a single material entry. A create request can carry several of these, each becoming its own listing
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct MaterialApi {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub standard: String,
    pub quantity: u32,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ListingApi {
    /// sent as a string so clients don't have to care how big ids get
    pub id: String,
    pub address: AddressApi,
    pub contactor_name: String,
    pub contactor_phone: String,
    pub organisation_name: String,
    pub comment: Option<String>,
    pub material: MaterialApi,
    pub status: ListingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_message: Option<String>,
    pub gmt_created: NaiveDateTime,
    pub gmt_modified: NaiveDateTime,
}

/// one page of results, `page` is 1-based
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct PageApi<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

/// a user as shown to api consumers. The password hash never leaves the server
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct UserApi {
    pub id: u32,
    pub username: String,
    #[serde(rename = "organisationId")]
    pub organisation_id: Option<u32>,
    pub verified: bool,
    pub admin: bool,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct OrganisationApi {
    pub id: String,
    pub name: String,
    pub uniform_social_credit_code: String,
    pub contactor_name: String,
    pub contactor_phone: String,
    pub gmt_created: NaiveDateTime,
    pub gmt_modified: NaiveDateTime,
}

impl From<&ListingRecord> for ListingApi {
    fn from(value: &ListingRecord) -> Self {
        ListingApi {
            id: value.id.map(|id| id.to_string()).unwrap_or_default(),
            address: AddressApi {
                country: value.country.clone(),
                province: value.province.clone(),
                city: value.city.clone(),
                district: value.district.clone(),
                street_address: value.street_address.clone(),
            },
            contactor_name: value.contactor_name.clone(),
            contactor_phone: value.contactor_phone.clone(),
            organisation_name: value.organisation_name.clone(),
            comment: value.comment.clone(),
            material: MaterialApi {
                name: value.material_name.clone(),
                category: value.material_category.clone(),
                standard: value.material_standard.clone(),
                quantity: value.material_quantity,
                image_urls: split_image_urls(&value.image_urls),
            },
            status: value.status,
            review_message: value.review_message.clone(),
            gmt_created: value.created_at,
            gmt_modified: value.modified_at,
        }
    }
}

impl From<UserRecord> for UserApi {
    fn from(value: UserRecord) -> Self {
        UserApi {
            id: value.id.unwrap_or_default(),
            username: value.username,
            organisation_id: value.organisation_id,
            verified: value.verified,
            admin: value.admin,
        }
    }
}

impl From<OrganisationRecord> for OrganisationApi {
    fn from(value: OrganisationRecord) -> Self {
        OrganisationApi {
            id: value.id.map(|id| id.to_string()).unwrap_or_default(),
            name: value.name,
            uniform_social_credit_code: value.credit_code,
            contactor_name: value.contactor_name,
            contactor_phone: value.contactor_phone,
            gmt_created: value.created_at,
            gmt_modified: value.modified_at,
        }
    }
}
