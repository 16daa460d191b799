use std::fs::remove_file;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

use crate::guard::hash_credentials;
use crate::listings::models::{ListingKind, ListingRecord, ListingStatus};
use crate::listings::repository::{ListingStore, SqliteListingStore};
use crate::model::api::{AddressApi, MaterialApi};
use crate::model::request::listing_requests::ListingRequest;
use crate::organisations::models::OrganisationRecord;
use crate::organisations::repository as organisation_repository;
use crate::repository::{initialize_db, open_connection};
use crate::users::models::UserRecord;
use crate::users::repository as user_repository;

/// admin:password
pub static ADMIN_AUTH: &str = "Basic YWRtaW46cGFzc3dvcmQ=";
/// owner:password
pub static OWNER_AUTH: &str = "Basic b3duZXI6cGFzc3dvcmQ=";
/// other:password
pub static OTHER_AUTH: &str = "Basic b3RoZXI6cGFzc3dvcmQ=";

pub fn refresh_db() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    initialize_db().unwrap();
}

pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
}

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// saves a user with `password` as their password, returning the new id
pub fn create_user_db_entry(
    username: &str,
    organisation_id: Option<u32>,
    verified: bool,
    admin: bool,
) -> u32 {
    let con = open_connection();
    let user = user_repository::create_user(
        &UserRecord {
            id: None,
            username: username.to_string(),
            password_hash: hash_credentials(username, "password"),
            organisation_id,
            verified,
            admin,
        },
        &con,
    )
    .unwrap();
    con.close().unwrap();
    user.id.unwrap()
}

/// saves an organisation and returns its id
pub fn create_organisation_db_entry(name: &str, credit_code: &str) -> u32 {
    let con = open_connection();
    let organisation = organisation_repository::create_organisation(
        &OrganisationRecord {
            id: None,
            name: name.to_string(),
            credit_code: credit_code.to_string(),
            contactor_name: "Li".to_string(),
            contactor_phone: "13800000000".to_string(),
            created_at: date(1),
            modified_at: date(1),
        },
        &con,
    )
    .unwrap();
    con.close().unwrap();
    organisation.id.unwrap()
}

/// the accounts behind [`ADMIN_AUTH`], [`OWNER_AUTH`] and [`OTHER_AUTH`], in that order.
/// The owner belongs to "Union Hospital", which is always organisation 1
pub fn create_default_users() -> (u32, u32, u32) {
    let hospital = create_organisation_db_entry("Union Hospital", "91420100MA4K2B3C4D");
    let admin = create_user_db_entry("admin", None, true, true);
    let owner = create_user_db_entry("owner", Some(hospital), false, false);
    let other = create_user_db_entry("other", None, false, false);
    (admin, owner, other)
}

pub fn date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 2, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// a listing of `kind` owned by `user_id`, created on Feb `day` 2020
pub fn listing(
    kind: ListingKind,
    user_id: u32,
    status: ListingStatus,
    category: &str,
    day: u32,
) -> ListingRecord {
    let mut listing = ListingRecord::new(kind, user_id, None, date(day));
    listing.organisation_name = "Union Hospital".to_string();
    listing.contactor_name = "Li".to_string();
    listing.contactor_phone = "13800000000".to_string();
    listing.country = "China".to_string();
    listing.province = "Hubei".to_string();
    listing.city = "Wuhan".to_string();
    listing.district = "Jiangan".to_string();
    listing.street_address = "1 Jiefang Ave".to_string();
    listing.material_name = format!("{category} item");
    listing.material_category = category.to_string();
    listing.material_quantity = 10;
    listing.status = status;
    listing
}

/// makes sure a user with exactly `id` exists, so listings can reference it. Existing users are left alone
pub fn create_owner(id: u32) {
    let con = open_connection();
    insert_owner(id, &con);
    con.close().unwrap();
}

fn insert_owner(id: u32, con: &Connection) {
    let username = format!("user{id}");
    con.execute(
        "insert or ignore into Users (id, username, passwordHash, isVerified, isAdmin) \
         values (?1, ?2, ?3, false, false)",
        rusqlite::params![id, username, hash_credentials(&username, "password")],
    )
    .unwrap();
}

/// saves the passed listings in one transaction and returns their ids. Owners that don't exist yet are created
pub fn save_listings(kind: ListingKind, mut listings: Vec<ListingRecord>) -> Vec<u32> {
    let mut con = open_connection();
    let tx = con.transaction().unwrap();
    for listing in &listings {
        insert_owner(listing.user_id, &tx);
    }
    SqliteListingStore::new(kind, &tx)
        .insert_batch(&mut listings)
        .unwrap();
    tx.commit().unwrap();
    con.close().unwrap();
    listings.iter().map(|l| l.id.unwrap()).collect()
}

pub fn material(name: &str, category: &str, quantity: u32) -> MaterialApi {
    MaterialApi {
        name: name.to_string(),
        category: category.to_string(),
        standard: "GB2626".to_string(),
        quantity,
        image_urls: vec![
            "https://img.example/1.png".to_string(),
            "https://img.example/2.png".to_string(),
        ],
    }
}

pub fn listing_request(materials: Vec<MaterialApi>) -> ListingRequest {
    ListingRequest {
        address: AddressApi {
            country: "China".to_string(),
            province: "Hubei".to_string(),
            city: "Wuhan".to_string(),
            district: "Jiangan".to_string(),
            street_address: "1 Jiefang Ave".to_string(),
        },
        contactor_name: "Li".to_string(),
        contactor_phone: "13800000000".to_string(),
        organisation_name: "Union Hospital".to_string(),
        comment: Some("deliver to the east gate".to_string()),
        materials,
    }
}
