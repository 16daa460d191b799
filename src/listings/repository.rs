use rusqlite::{params_from_iter, OptionalExtension, Transaction};

use crate::listings::criteria::Criteria;
use crate::listings::models::{ListingKind, ListingRecord};

/// a 1-based page request
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

/// the rows of one page along with how many rows matched in total
#[derive(Debug, PartialEq)]
pub struct PageRecords {
    pub records: Vec<ListingRecord>,
    pub total: u64,
}

impl Pagination {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// typed access to the listings of a single kind
pub trait ListingStore {
    /// the kind every query made through this store is scoped to
    fn kind(&self) -> ListingKind;

    /// `None` if no listing of this store's kind has that id
    fn select_by_id(&self, id: u32) -> Result<Option<ListingRecord>, rusqlite::Error>;

    fn select_page(
        &self,
        pagination: Pagination,
        criteria: &Criteria,
    ) -> Result<PageRecords, rusqlite::Error>;

    /// saves every listing and fills in its id
    fn insert_batch(&self, listings: &mut [ListingRecord]) -> Result<(), rusqlite::Error>;

    /// overwrites the mutable columns of the listing with the same id. Returns the number of rows changed
    fn update_by_id(&self, listing: &ListingRecord) -> Result<usize, rusqlite::Error>;
}

/// [`ListingStore`] over the Listings table. It can only be built on a transaction,
/// so a batch insert is either fully committed by the caller or not at all
pub struct SqliteListingStore<'a> {
    kind: ListingKind,
    tx: &'a Transaction<'a>,
}

impl<'a> SqliteListingStore<'a> {
    pub fn new(kind: ListingKind, tx: &'a Transaction<'a>) -> Self {
        Self { kind, tx }
    }
}

impl ListingStore for SqliteListingStore<'_> {
    fn kind(&self) -> ListingKind {
        self.kind
    }

    fn select_by_id(&self, id: u32) -> Result<Option<ListingRecord>, rusqlite::Error> {
        let mut pst = self
            .tx
            .prepare(include_str!("../assets/queries/listings/get_by_id.sql"))?;
        pst.query_row(rusqlite::params![id, self.kind], listing_mapper)
            .optional()
    }

    fn select_page(
        &self,
        pagination: Pagination,
        criteria: &Criteria,
    ) -> Result<PageRecords, rusqlite::Error> {
        let criteria = criteria.clone().for_kind(self.kind);
        let (where_clause, params) = criteria.compile_where();
        let count_query = format!(
            "{}{where_clause}",
            include_str!("../assets/queries/listings/count.sql").trim_end()
        );
        let total: i64 = self
            .tx
            .query_row(&count_query, params_from_iter(params.iter()), |row| row.get(0))?;

        let page_query = format!(
            "{}{where_clause}{} limit {} offset {}",
            include_str!("../assets/queries/listings/select_page.sql").trim_end(),
            criteria.compile_order(),
            pagination.page_size,
            pagination.offset()
        );
        let mut pst = self.tx.prepare(&page_query)?;
        let records = pst
            .query_map(params_from_iter(params.iter()), listing_mapper)?
            .collect::<Result<Vec<ListingRecord>, rusqlite::Error>>()?;
        Ok(PageRecords {
            records,
            total: total as u64,
        })
    }

    fn insert_batch(&self, listings: &mut [ListingRecord]) -> Result<(), rusqlite::Error> {
        let mut pst = self
            .tx
            .prepare(include_str!("../assets/queries/listings/create_listing.sql"))?;
        for listing in listings.iter_mut() {
            let id = pst.insert(rusqlite::params![
                self.kind,
                listing.user_id,
                listing.organisation_id,
                listing.organisation_name,
                listing.contactor_name,
                listing.contactor_phone,
                listing.country,
                listing.province,
                listing.city,
                listing.district,
                listing.street_address,
                listing.comment,
                listing.material_name,
                listing.material_category,
                listing.material_standard,
                listing.material_quantity,
                listing.image_urls,
                listing.status,
                listing.review_message,
                listing.created_at,
                listing.modified_at,
            ])?;
            listing.id = Some(
                u32::try_from(id).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, id))?,
            );
            listing.kind = self.kind;
        }
        Ok(())
    }

    fn update_by_id(&self, listing: &ListingRecord) -> Result<usize, rusqlite::Error> {
        let mut pst = self
            .tx
            .prepare(include_str!("../assets/queries/listings/update_listing.sql"))?;
        pst.execute(rusqlite::params![
            listing.organisation_name,
            listing.contactor_name,
            listing.contactor_phone,
            listing.country,
            listing.province,
            listing.city,
            listing.district,
            listing.street_address,
            listing.comment,
            listing.material_name,
            listing.material_category,
            listing.material_standard,
            listing.material_quantity,
            listing.image_urls,
            listing.status,
            listing.review_message,
            listing.modified_at,
            listing.id,
            self.kind,
        ])
    }
}

/// 1. id
/// 2. kind
/// 3. userId
/// 4. organisationId
/// 5. organisationName
/// 6. contactorName
/// 7. contactorPhone
/// 8. country
/// 9. province
/// 10. city
/// 11. district
/// 12. streetAddress
/// 13. comment
/// 14. materialName
/// 15. materialCategory
/// 16. materialStandard
/// 17. materialQuantity
/// 18. imageUrls
/// 19. status
/// 20. reviewMessage
/// 21. createdAt
/// 22. modifiedAt
fn listing_mapper(row: &rusqlite::Row) -> Result<ListingRecord, rusqlite::Error> {
    Ok(ListingRecord {
        id: Some(row.get(0)?),
        kind: row.get(1)?,
        user_id: row.get(2)?,
        organisation_id: row.get(3)?,
        organisation_name: row.get(4)?,
        contactor_name: row.get(5)?,
        contactor_phone: row.get(6)?,
        country: row.get(7)?,
        province: row.get(8)?,
        city: row.get(9)?,
        district: row.get(10)?,
        street_address: row.get(11)?,
        comment: row.get(12)?,
        material_name: row.get(13)?,
        material_category: row.get(14)?,
        material_standard: row.get(15)?,
        material_quantity: row.get(16)?,
        image_urls: row.get(17)?,
        status: row.get(18)?,
        review_message: row.get(19)?,
        created_at: row.get(20)?,
        modified_at: row.get(21)?,
    })
}
