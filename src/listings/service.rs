use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::listings::criteria::{filter_criteria, public_criteria, ListingFilters};
use crate::listings::models::{ListingKind, ListingRecord};
use crate::listings::repository::{ListingStore, Pagination, SqliteListingStore};
use crate::model::api::{ListingApi, MaterialApi, PageApi};
use crate::model::error::listing_errors::ListingError;
use crate::model::request::listing_requests::ListingRequest;
use crate::repository::{close_connection, open_connection};
use crate::users::lookup::{SqliteUserLookup, UserLookup};
use crate::util::{join_image_urls, now};

/// create/update/moderate/page through the listings of one kind. Which kind is decided by the store it's built with
pub struct ListingService<S: ListingStore, U: UserLookup> {
    store: S,
    users: U,
}

/// the service as the http layer uses it: both dependencies on the same transaction
pub type SqliteListingService<'a> = ListingService<SqliteListingStore<'a>, SqliteUserLookup<'a>>;

impl<S: ListingStore, U: UserLookup> ListingService<S, U> {
    pub fn new(store: S, users: U) -> Self {
        Self { store, users }
    }

    /// the public page. Pending listings are never part of it
    pub fn list(
        &self,
        pagination: Pagination,
        category: Option<&str>,
    ) -> Result<PageApi<ListingApi>, ListingError> {
        let results = self
            .store
            .select_page(pagination, &public_criteria(category))?;
        Ok(to_page(pagination, results.records, results.total))
    }

    /// turns every material in `request` into its own listing, all sharing the request's address and contact info.
    /// Listings from verified users are approved straight away, everyone else's wait for moderation
    pub fn create(
        &self,
        request: &ListingRequest,
        organisation_id: Option<u32>,
        user_id: u32,
    ) -> Result<Vec<ListingApi>, ListingError> {
        let user = self.users.get_user(user_id)?;
        let now = now();
        let mut listings: Vec<ListingRecord> = request
            .materials
            .iter()
            .map(|material| {
                let mut listing =
                    ListingRecord::new(self.store.kind(), user_id, organisation_id, now);
                apply_request(&mut listing, request, material);
                if user.verified {
                    listing.approve();
                }
                listing
            })
            .collect();
        self.store.insert_batch(&mut listings)?;
        log::info!(
            "User {user_id} created {} {} listing(s)",
            listings.len(),
            self.store.kind()
        );
        Ok(listings.iter().map(ListingApi::from).collect())
    }

    /// replaces the address, contact, and material of a listing with what's in `request`. Only the first material
    /// is used. Moderation status is left alone
    pub fn update(
        &self,
        id: u32,
        request: &ListingRequest,
        user_id: u32,
    ) -> Result<ListingApi, ListingError> {
        let mut listing = self.get_by_id(id)?;
        if listing.user_id != user_id {
            log::warn!(
                "User {user_id} tried to update {} listing {id}, which belongs to user {}",
                self.store.kind(),
                listing.user_id
            );
            return Err(ListingError::PermissionDenied);
        }
        let Some(material) = request.materials.first() else {
            return Err(ListingError::InvalidRequest);
        };
        apply_request(&mut listing, request, material);
        listing.modified_at = now();
        self.store.update_by_id(&listing)?;
        Ok(ListingApi::from(&listing))
    }

    pub fn approve(&self, id: u32) -> Result<(), ListingError> {
        let mut listing = self.get_by_id(id)?;
        listing.approve();
        listing.modified_at = now();
        self.store.update_by_id(&listing)?;
        log::info!("{} listing {id} approved", self.store.kind());
        Ok(())
    }

    pub fn reject(&self, id: u32, message: &str) -> Result<(), ListingError> {
        let mut listing = self.get_by_id(id)?;
        listing.reject(message);
        listing.modified_at = now();
        self.store.update_by_id(&listing)?;
        log::info!("{} listing {id} rejected: {message}", self.store.kind());
        Ok(())
    }

    /// the moderation page. Every filter that's set is and-ed together; pending listings are included
    pub fn admin_list(
        &self,
        pagination: Pagination,
        filters: &ListingFilters,
    ) -> Result<PageApi<ListingApi>, ListingError> {
        let results = self
            .store
            .select_page(pagination, &filter_criteria(filters))?;
        Ok(to_page(pagination, results.records, results.total))
    }

    pub fn get_detail(&self, id: u32) -> Result<ListingApi, ListingError> {
        self.get_by_id(id).map(|listing| ListingApi::from(&listing))
    }

    fn get_by_id(&self, id: u32) -> Result<ListingRecord, ListingError> {
        match self.store.select_by_id(id)? {
            Some(listing) => Ok(listing),
            None => {
                log::warn!("No {} listing with id {id} exists", self.store.kind());
                Err(ListingError::NotFound)
            }
        }
    }
}

/// runs `op` against a [`ListingService`] for `kind` inside a single transaction. The transaction is committed
/// if `op` succeeds and rolled back otherwise
pub fn in_transaction<T, F>(kind: ListingKind, op: F) -> Result<T, ListingError>
where
    F: for<'a> FnOnce(&SqliteListingService<'a>) -> Result<T, ListingError>,
{
    let mut con = open_connection();
    let result = run_in_transaction(kind, &mut con, op);
    close_connection(con);
    result
}

fn run_in_transaction<T, F>(
    kind: ListingKind,
    con: &mut Connection,
    op: F,
) -> Result<T, ListingError>
where
    F: for<'a> FnOnce(&SqliteListingService<'a>) -> Result<T, ListingError>,
{
    let tx = con.transaction()?;
    let value = {
        let service = ListingService::new(
            SqliteListingStore::new(kind, &tx),
            SqliteUserLookup::new(&tx),
        );
        op(&service)?
    };
    if let Err(e) = tx.commit() {
        log::error!(
            "Failed to commit {kind} listing changes! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(ListingError::DbError);
    }
    Ok(value)
}

/// copies the shared address/contact block and one material from `request` onto `listing`
fn apply_request(listing: &mut ListingRecord, request: &ListingRequest, material: &MaterialApi) {
    listing.organisation_name = request.organisation_name.clone();
    listing.contactor_name = request.contactor_name.clone();
    listing.contactor_phone = request.contactor_phone.clone();
    listing.country = request.address.country.clone();
    listing.province = request.address.province.clone();
    listing.city = request.address.city.clone();
    listing.district = request.address.district.clone();
    listing.street_address = request.address.street_address.clone();
    listing.comment = request.comment.clone();
    listing.material_name = material.name.clone();
    listing.material_category = material.category.clone();
    listing.material_standard = material.standard.clone();
    listing.material_quantity = material.quantity;
    listing.image_urls = join_image_urls(&material.image_urls);
}

fn to_page(pagination: Pagination, records: Vec<ListingRecord>, total: u64) -> PageApi<ListingApi> {
    PageApi {
        data: records.iter().map(ListingApi::from).collect(),
        page: pagination.page,
        page_size: pagination.page_size,
        total,
    }
}
