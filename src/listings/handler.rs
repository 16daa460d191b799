use rocket::serde::json::Json;

use crate::config::RELIEF_BOARD_CONFIG;
use crate::guard::{HeaderAuth, ValidateResult};
use crate::listings::criteria::ListingFilters;
use crate::listings::models::{ListingKind, ListingStatus};
use crate::listings::repository::Pagination;
use crate::listings::service;
use crate::model::error::listing_errors::ListingError;
use crate::model::request::listing_requests::{ListingRequest, RejectRequest};
use crate::model::response::listing_responses::{
    CreateListingResponse, GetListingResponse, ListListingsResponse, ModerateListingResponse,
    UpdateListingResponse,
};
use crate::model::response::BasicMessage;

#[derive(FromForm)]
pub struct ListQuery {
    page: Option<u32>,
    #[field(name = "pageSize")]
    page_size: Option<u32>,
    category: Option<String>,
}

#[derive(FromForm)]
pub struct AdminListQuery {
    page: Option<u32>,
    #[field(name = "pageSize")]
    page_size: Option<u32>,
    category: Option<String>,
    status: Option<String>,
    #[field(name = "contactPhone")]
    contact_phone: Option<String>,
    #[field(name = "ownerId")]
    owner_id: Option<u32>,
}

#[get("/<kind>?<query..>")]
pub fn list_listings(kind: ListingKind, query: ListQuery) -> ListListingsResponse {
    let pagination = match resolve_pagination(query.page, query.page_size) {
        Ok(p) => p,
        Err(message) => return ListListingsResponse::BadRequest(BasicMessage::new(&message)),
    };
    match service::in_transaction(kind, |service| {
        service.list(pagination, query.category.as_deref())
    }) {
        Ok(page) => ListListingsResponse::Success(Json::from(page)),
        Err(_) => ListListingsResponse::ListingDbError(BasicMessage::new(
            "Failed to pull listings from the database. Check server logs for details",
        )),
    }
}

#[get("/<kind>/<id>")]
pub fn get_listing(kind: ListingKind, id: u32) -> GetListingResponse {
    match service::in_transaction(kind, |service| service.get_detail(id)) {
        Ok(listing) => GetListingResponse::Success(Json::from(listing)),
        Err(ListingError::NotFound) => GetListingResponse::ListingNotFound(BasicMessage::new(
            "The listing with the passed id could not be found.",
        )),
        Err(_) => GetListingResponse::ListingDbError(BasicMessage::new(
            "Failed to pull listing info from database. Check server logs for details",
        )),
    }
}

#[post("/<kind>", data = "<request>")]
pub fn create_listing(
    kind: ListingKind,
    request: Json<ListingRequest>,
    auth: HeaderAuth,
) -> CreateListingResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return CreateListingResponse::Unauthorized("Bad Credentials".to_string())
        }
        ValidateResult::DbError => {
            return CreateListingResponse::ListingDbError(BasicMessage::new(
                "Failed to check credentials. Check server logs for details",
            ))
        }
    };
    let request = request.into_inner();
    if let Err(message) = request.validate() {
        return CreateListingResponse::BadRequest(BasicMessage::new(&message));
    }
    let user_id = user.id.unwrap_or_default();
    match service::in_transaction(kind, |service| {
        service.create(&request, user.organisation_id, user_id)
    }) {
        Ok(listings) => CreateListingResponse::Success(Json::from(listings)),
        Err(ListingError::UserNotFound) => CreateListingResponse::UserNotFound(BasicMessage::new(
            "The user creating these listings could not be found.",
        )),
        Err(_) => CreateListingResponse::ListingDbError(BasicMessage::new(
            "Failed to save listings to the database. Check server logs for details",
        )),
    }
}

#[put("/<kind>/<id>", data = "<request>")]
pub fn update_listing(
    kind: ListingKind,
    id: u32,
    request: Json<ListingRequest>,
    auth: HeaderAuth,
) -> UpdateListingResponse {
    let user = match auth.validate() {
        ValidateResult::Ok(user) => user,
        ValidateResult::Invalid => {
            return UpdateListingResponse::Unauthorized("Bad Credentials".to_string())
        }
        ValidateResult::DbError => {
            return UpdateListingResponse::ListingDbError(BasicMessage::new(
                "Failed to check credentials. Check server logs for details",
            ))
        }
    };
    let request = request.into_inner();
    if let Err(message) = request.validate() {
        return UpdateListingResponse::BadRequest(BasicMessage::new(&message));
    }
    let user_id = user.id.unwrap_or_default();
    match service::in_transaction(kind, |service| service.update(id, &request, user_id)) {
        Ok(listing) => UpdateListingResponse::Success(Json::from(listing)),
        Err(ListingError::NotFound) => UpdateListingResponse::ListingNotFound(BasicMessage::new(
            "The listing with the passed id could not be found.",
        )),
        Err(ListingError::PermissionDenied) => UpdateListingResponse::Forbidden(
            BasicMessage::new("Only the user that created a listing can update it."),
        ),
        Err(ListingError::InvalidRequest) => UpdateListingResponse::BadRequest(
            BasicMessage::new("At least one material is required."),
        ),
        Err(_) => UpdateListingResponse::ListingDbError(BasicMessage::new(
            "Failed to update listing in database. Check server logs for details",
        )),
    }
}

#[get("/<kind>?<query..>")]
pub fn admin_list_listings(
    kind: ListingKind,
    query: AdminListQuery,
    auth: HeaderAuth,
) -> ListListingsResponse {
    match auth.validate() {
        ValidateResult::Ok(user) if user.admin => { /* no op */ }
        ValidateResult::Ok(_) => {
            return ListListingsResponse::Forbidden(BasicMessage::new(
                "Only administrators can see every listing.",
            ))
        }
        ValidateResult::Invalid => {
            return ListListingsResponse::Unauthorized("Bad Credentials".to_string())
        }
        ValidateResult::DbError => {
            return ListListingsResponse::ListingDbError(BasicMessage::new(
                "Failed to check credentials. Check server logs for details",
            ))
        }
    };
    let pagination = match resolve_pagination(query.page, query.page_size) {
        Ok(p) => p,
        Err(message) => return ListListingsResponse::BadRequest(BasicMessage::new(&message)),
    };
    let status = match query.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<ListingStatus>() {
            Ok(status) => Some(status),
            Err(message) => {
                return ListListingsResponse::BadRequest(BasicMessage::new(&message))
            }
        },
    };
    let filters = ListingFilters {
        category: query.category,
        status,
        contact_phone: query.contact_phone,
        owner_id: query.owner_id,
    };
    match service::in_transaction(kind, |service| service.admin_list(pagination, &filters)) {
        Ok(page) => ListListingsResponse::Success(Json::from(page)),
        Err(_) => ListListingsResponse::ListingDbError(BasicMessage::new(
            "Failed to pull listings from the database. Check server logs for details",
        )),
    }
}

#[put("/<kind>/<id>/approve")]
pub fn approve_listing(kind: ListingKind, id: u32, auth: HeaderAuth) -> ModerateListingResponse {
    if let Some(rejection) = check_moderator(auth) {
        return rejection;
    }
    moderation_response(service::in_transaction(kind, |service| service.approve(id)))
}

#[put("/<kind>/<id>/reject", data = "<request>")]
pub fn reject_listing(
    kind: ListingKind,
    id: u32,
    request: Json<RejectRequest>,
    auth: HeaderAuth,
) -> ModerateListingResponse {
    if let Some(rejection) = check_moderator(auth) {
        return rejection;
    }
    let message = request.message.trim();
    if message.is_empty() {
        return ModerateListingResponse::BadRequest(BasicMessage::new(
            "A message explaining the rejection is required.",
        ));
    }
    moderation_response(service::in_transaction(kind, |service| {
        service.reject(id, message)
    }))
}

/// `None` if the caller is an admin, otherwise the response to send back
fn check_moderator(auth: HeaderAuth) -> Option<ModerateListingResponse> {
    match auth.validate() {
        ValidateResult::Ok(user) if user.admin => None,
        ValidateResult::Ok(_) => Some(ModerateListingResponse::Forbidden(BasicMessage::new(
            "Only administrators can moderate listings.",
        ))),
        ValidateResult::Invalid => Some(ModerateListingResponse::Unauthorized(
            "Bad Credentials".to_string(),
        )),
        ValidateResult::DbError => Some(ModerateListingResponse::ListingDbError(
            BasicMessage::new("Failed to check credentials. Check server logs for details"),
        )),
    }
}

fn moderation_response(result: Result<(), ListingError>) -> ModerateListingResponse {
    match result {
        Ok(()) => ModerateListingResponse::Success(()),
        Err(ListingError::NotFound) => ModerateListingResponse::ListingNotFound(BasicMessage::new(
            "The listing with the passed id could not be found.",
        )),
        Err(_) => ModerateListingResponse::ListingDbError(BasicMessage::new(
            "Failed to update listing in database. Check server logs for details",
        )),
    }
}

/// fills in defaults from the config file. Page sizes above the configured max are clamped rather than refused
fn resolve_pagination(page: Option<u32>, page_size: Option<u32>) -> Result<Pagination, String> {
    let config = &RELIEF_BOARD_CONFIG.pagination;
    let page = page.unwrap_or(1);
    let page_size = page_size.unwrap_or(config.default_page_size);
    if page == 0 {
        return Err("page starts at 1.".to_string());
    }
    if page_size == 0 {
        return Err("pageSize must be above 0.".to_string());
    }
    Ok(Pagination {
        page,
        page_size: page_size.min(config.max_page_size),
    })
}
