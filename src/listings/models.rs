use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use rocket::request::FromParam;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};

/// which side of the board a listing sits on. Both kinds share one table and one service
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Hash, Copy, Clone)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingKind {
    /// material someone needs
    Required,
    /// material someone can hand out
    Supplied,
}

/// moderation state of a listing. Only [`ListingStatus::Pending`] listings are hidden from the public pages
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Hash, Copy, Clone)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
}

/// represents a row in the Listings table of the database
#[derive(Debug, PartialEq, Clone)]
pub struct ListingRecord {
    /// will only be populated once the record has been saved
    pub id: Option<u32>,
    pub kind: ListingKind,
    /// the user that created (and owns) this listing
    pub user_id: u32,
    /// the organisation the owning user belonged to when the listing was created, if any
    pub organisation_id: Option<u32>,
    pub organisation_name: String,
    pub contactor_name: String,
    pub contactor_phone: String,
    pub country: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub street_address: String,
    pub comment: Option<String>,
    pub material_name: String,
    pub material_category: String,
    pub material_standard: String,
    pub material_quantity: u32,
    /// comma-joined, see [`crate::util::join_image_urls`]
    pub image_urls: String,
    pub status: ListingStatus,
    /// only present while the listing is [`ListingStatus::Rejected`]
    pub review_message: Option<String>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

impl ListingRecord {
    /// a pending listing with no content yet, created and last modified at `created_at`
    pub fn new(
        kind: ListingKind,
        user_id: u32,
        organisation_id: Option<u32>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            kind,
            user_id,
            organisation_id,
            organisation_name: String::new(),
            contactor_name: String::new(),
            contactor_phone: String::new(),
            country: String::new(),
            province: String::new(),
            city: String::new(),
            district: String::new(),
            street_address: String::new(),
            comment: None,
            material_name: String::new(),
            material_category: String::new(),
            material_standard: String::new(),
            material_quantity: 0,
            image_urls: String::new(),
            status: ListingStatus::Pending,
            review_message: None,
            created_at,
            modified_at: created_at,
        }
    }

    /// moves the listing to approved. Any message from an earlier rejection is dropped
    pub fn approve(&mut self) {
        self.status = ListingStatus::Approved;
        self.review_message = None;
    }

    /// moves the listing to rejected, keeping `message` so the owner knows why
    pub fn reject(&mut self, message: &str) {
        self.status = ListingStatus::Rejected;
        self.review_message = Some(message.to_string());
    }
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::Supplied => "SUPPLIED",
        }
    }
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl Display for ListingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for ListingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    /// case-insensitive, so `rejected` from a query string works as well as `REJECTED`
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(format!("{value} is not a valid listing status")),
        }
    }
}

impl FromStr for ListingKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "REQUIRED" => Ok(Self::Required),
            "SUPPLIED" => Ok(Self::Supplied),
            _ => Err(format!("{value} is not a valid listing kind")),
        }
    }
}

/// lets routes take the kind as a path segment: `/materials/required`, `/materials/supplied`.
/// Anything else forwards, which ends in a 404
impl<'a> FromParam<'a> for ListingKind {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse().map_err(|_| param)
    }
}

impl ToSql for ListingKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl ToSql for ListingStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for ListingKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

impl FromSql for ListingStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}
