mod insert_batch_tests {
    use crate::listings::models::{ListingKind, ListingStatus};
    use crate::listings::repository::{ListingStore, SqliteListingStore};
    use crate::repository::open_connection;
    use crate::test::*;

    #[test]
    fn insert_batch_sets_ids_and_kind() {
        refresh_db();
        create_owner(1);
        let mut con = open_connection();
        let tx = con.transaction().unwrap();
        let store = SqliteListingStore::new(ListingKind::Supplied, &tx);
        let mut listings = vec![
            listing(ListingKind::Required, 1, ListingStatus::Pending, "masks", 1),
            listing(ListingKind::Required, 1, ListingStatus::Pending, "gloves", 1),
        ];
        store.insert_batch(&mut listings).unwrap();
        assert_eq!(Some(1), listings[0].id);
        assert_eq!(Some(2), listings[1].id);
        // the store's kind always wins
        assert!(listings.iter().all(|l| l.kind == ListingKind::Supplied));
        let saved = store.select_by_id(2).unwrap().unwrap();
        assert_eq!(listings[1], saved);
        tx.commit().unwrap();
        con.close().unwrap();
        cleanup();
    }

    #[test]
    fn insert_batch_rolls_back_with_transaction() {
        refresh_db();
        create_owner(1);
        let mut con = open_connection();
        {
            let tx = con.transaction().unwrap();
            SqliteListingStore::new(ListingKind::Required, &tx)
                .insert_batch(&mut [listing(
                    ListingKind::Required,
                    1,
                    ListingStatus::Pending,
                    "masks",
                    1,
                )])
                .unwrap();
            // dropped without commit
        }
        let tx = con.transaction().unwrap();
        let found = SqliteListingStore::new(ListingKind::Required, &tx)
            .select_by_id(1)
            .unwrap();
        assert_eq!(None, found);
        drop(tx);
        con.close().unwrap();
        cleanup();
    }

    #[test]
    fn insert_batch_id_out_of_range() {
        refresh_db();
        let ids = save_listings(
            ListingKind::Required,
            vec![listing(ListingKind::Required, 1, ListingStatus::Pending, "masks", 1)],
        );
        let mut con = open_connection();
        // push the rowid past what a u32 id can hold
        con.execute(
            "update Listings set id = ?1 where id = ?2",
            rusqlite::params![i64::from(u32::MAX), ids[0]],
        )
        .unwrap();
        let tx = con.transaction().unwrap();
        let res = SqliteListingStore::new(ListingKind::Required, &tx).insert_batch(&mut [listing(
            ListingKind::Required,
            1,
            ListingStatus::Pending,
            "masks",
            2,
        )]);
        assert!(matches!(
            res,
            Err(rusqlite::Error::IntegralValueOutOfRange(_, _))
        ));
        drop(tx);
        con.close().unwrap();
        cleanup();
    }
}

mod select_tests {
    use crate::listings::criteria::{public_criteria, Criteria};
    use crate::listings::models::{ListingKind, ListingStatus};
    use crate::listings::repository::{ListingStore, Pagination, SqliteListingStore};
    use crate::repository::open_connection;
    use crate::test::*;

    #[test]
    fn select_by_id_is_scoped_to_kind() {
        refresh_db();
        let ids = save_listings(
            ListingKind::Required,
            vec![listing(ListingKind::Required, 1, ListingStatus::Approved, "masks", 1)],
        );
        let mut con = open_connection();
        let tx = con.transaction().unwrap();
        let required = SqliteListingStore::new(ListingKind::Required, &tx);
        let supplied = SqliteListingStore::new(ListingKind::Supplied, &tx);
        assert!(required.select_by_id(ids[0]).unwrap().is_some());
        assert_eq!(None, supplied.select_by_id(ids[0]).unwrap());
        drop(tx);
        con.close().unwrap();
        cleanup();
    }

    #[test]
    fn select_page_newest_first_with_total() {
        refresh_db();
        let ids = save_listings(
            ListingKind::Supplied,
            vec![
                listing(ListingKind::Supplied, 1, ListingStatus::Approved, "masks", 1),
                listing(ListingKind::Supplied, 1, ListingStatus::Approved, "masks", 3),
                listing(ListingKind::Supplied, 1, ListingStatus::Approved, "masks", 2),
            ],
        );
        // a listing of the other kind never shows up
        save_listings(
            ListingKind::Required,
            vec![listing(ListingKind::Required, 1, ListingStatus::Approved, "masks", 9)],
        );
        let mut con = open_connection();
        let tx = con.transaction().unwrap();
        let store = SqliteListingStore::new(ListingKind::Supplied, &tx);
        let first = store
            .select_page(
                Pagination {
                    page: 1,
                    page_size: 2,
                },
                &Criteria::newest_first(),
            )
            .unwrap();
        let second = store
            .select_page(
                Pagination {
                    page: 2,
                    page_size: 2,
                },
                &Criteria::newest_first(),
            )
            .unwrap();
        assert_eq!(3, first.total);
        assert_eq!(
            vec![Some(ids[1]), Some(ids[2])],
            first.records.iter().map(|l| l.id).collect::<Vec<_>>()
        );
        assert_eq!(3, second.total);
        assert_eq!(
            vec![Some(ids[0])],
            second.records.iter().map(|l| l.id).collect::<Vec<_>>()
        );
        drop(tx);
        con.close().unwrap();
        cleanup();
    }

    #[test]
    fn select_page_applies_criteria() {
        refresh_db();
        save_listings(
            ListingKind::Required,
            vec![
                listing(ListingKind::Required, 1, ListingStatus::Pending, "masks", 1),
                listing(ListingKind::Required, 1, ListingStatus::Approved, "masks", 2),
                listing(ListingKind::Required, 1, ListingStatus::Rejected, "gloves", 3),
            ],
        );
        let mut con = open_connection();
        let tx = con.transaction().unwrap();
        let store = SqliteListingStore::new(ListingKind::Required, &tx);
        let page = store
            .select_page(
                Pagination {
                    page: 1,
                    page_size: 10,
                },
                &public_criteria(Some("masks")),
            )
            .unwrap();
        assert_eq!(1, page.total);
        assert_eq!(ListingStatus::Approved, page.records[0].status);
        drop(tx);
        con.close().unwrap();
        cleanup();
    }

    #[test]
    fn select_page_past_the_end() {
        refresh_db();
        save_listings(
            ListingKind::Required,
            vec![listing(ListingKind::Required, 1, ListingStatus::Approved, "masks", 1)],
        );
        let mut con = open_connection();
        let tx = con.transaction().unwrap();
        let page = SqliteListingStore::new(ListingKind::Required, &tx)
            .select_page(
                Pagination {
                    page: 5,
                    page_size: 10,
                },
                &Criteria::newest_first(),
            )
            .unwrap();
        assert!(page.records.is_empty());
        assert_eq!(1, page.total);
        drop(tx);
        con.close().unwrap();
        cleanup();
    }
}

mod update_tests {
    use crate::listings::models::{ListingKind, ListingStatus};
    use crate::listings::repository::{ListingStore, SqliteListingStore};
    use crate::repository::open_connection;
    use crate::test::*;

    #[test]
    fn update_by_id() {
        refresh_db();
        let ids = save_listings(
            ListingKind::Required,
            vec![listing(ListingKind::Required, 1, ListingStatus::Pending, "masks", 1)],
        );
        let mut con = open_connection();
        let tx = con.transaction().unwrap();
        let store = SqliteListingStore::new(ListingKind::Required, &tx);
        let mut saved = store.select_by_id(ids[0]).unwrap().unwrap();
        saved.reject("insufficient proof");
        saved.material_quantity = 99;
        saved.modified_at = date(5);
        assert_eq!(1, store.update_by_id(&saved).unwrap());
        let updated = store.select_by_id(ids[0]).unwrap().unwrap();
        assert_eq!(saved, updated);
        assert_eq!(date(1), updated.created_at);
        drop(tx);
        con.close().unwrap();
        cleanup();
    }

    #[test]
    fn update_by_id_wrong_kind() {
        refresh_db();
        let ids = save_listings(
            ListingKind::Required,
            vec![listing(ListingKind::Required, 1, ListingStatus::Pending, "masks", 1)],
        );
        let mut con = open_connection();
        let tx = con.transaction().unwrap();
        let store = SqliteListingStore::new(ListingKind::Supplied, &tx);
        let mut record = listing(ListingKind::Supplied, 1, ListingStatus::Approved, "masks", 1);
        record.id = Some(ids[0]);
        assert_eq!(0, store.update_by_id(&record).unwrap());
        drop(tx);
        con.close().unwrap();
        cleanup();
    }
}
