//! Query criteria for listing pages.
//!
//! A [`Criteria`] is a list of column comparisons joined with `and`, plus an ordering. It knows nothing about
//! connections; [`Criteria::compile`] turns it into sql text and the parameters to bind, in the same order as
//! the `?` placeholders it emits.

use rusqlite::types::Value;

use crate::listings::models::{ListingKind, ListingStatus};

/// the columns a listing page can be filtered or ordered by
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Field {
    Id,
    Kind,
    Category,
    Status,
    ContactorPhone,
    OwnerId,
    CreatedAt,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Comparison {
    Eq(Value),
    Ne(Value),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Criteria {
    predicates: Vec<(Field, Comparison)>,
    /// sorted descending, first column first
    order: Vec<Field>,
}

/// the optional filters accepted by the admin listing page. `None` and empty strings mean "don't filter"
#[derive(Debug, Default, Clone)]
pub struct ListingFilters {
    pub category: Option<String>,
    pub status: Option<ListingStatus>,
    pub contact_phone: Option<String>,
    pub owner_id: Option<u32>,
}

impl Field {
    fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Kind => "kind",
            Self::Category => "materialCategory",
            Self::Status => "status",
            Self::ContactorPhone => "contactorPhone",
            Self::OwnerId => "userId",
            Self::CreatedAt => "createdAt",
        }
    }
}

impl Criteria {
    /// no predicates, newest listings first. Ties on the created date fall back to the id so pages are stable
    pub fn newest_first() -> Self {
        Self {
            predicates: Vec::new(),
            order: vec![Field::CreatedAt, Field::Id],
        }
    }

    pub fn eq(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.predicates.push((field, Comparison::Eq(value.into())));
        self
    }

    pub fn ne(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.predicates.push((field, Comparison::Ne(value.into())));
        self
    }

    /// adds an equality predicate only when `value` is present and not blank
    pub fn eq_if_present(self, field: Field, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.eq(field, v.to_string()),
            _ => self,
        }
    }

    /// restricts the criteria to a single listing kind. Stores call this so every query stays inside its kind
    pub fn for_kind(mut self, kind: ListingKind) -> Self {
        self.predicates
            .insert(0, (Field::Kind, Comparison::Eq(kind.as_str().to_string().into())));
        self
    }

    #[cfg(test)]
    pub fn predicates(&self) -> &[(Field, Comparison)] {
        &self.predicates
    }

    /// renders the `where` clause (empty if there are no predicates) and the bind values for it
    pub fn compile_where(&self) -> (String, Vec<Value>) {
        if self.predicates.is_empty() {
            return (String::new(), Vec::new());
        }
        let mut params = Vec::with_capacity(self.predicates.len());
        let clauses: Vec<String> = self
            .predicates
            .iter()
            .map(|(field, comparison)| match comparison {
                Comparison::Eq(value) => {
                    params.push(value.clone());
                    format!("{} = ?", field.column())
                }
                Comparison::Ne(value) => {
                    params.push(value.clone());
                    format!("{} <> ?", field.column())
                }
            })
            .collect();
        (format!(" where {}", clauses.join(" and ")), params)
    }

    /// renders the `order by` clause, or an empty string if there's no ordering
    pub fn compile_order(&self) -> String {
        if self.order.is_empty() {
            return String::new();
        }
        let terms: Vec<String> = self
            .order
            .iter()
            .map(|field| format!("{} desc", field.column()))
            .collect();
        format!(" order by {}", terms.join(", "))
    }

    /// `where` + `order by` together, with the bind values for the `where` part
    pub fn compile(&self) -> (String, Vec<Value>) {
        let (where_clause, params) = self.compile_where();
        (format!("{where_clause}{}", self.compile_order()), params)
    }
}

/// criteria for the public page: never shows pending listings, optionally narrowed to one category
pub fn public_criteria(category: Option<&str>) -> Criteria {
    Criteria::newest_first()
        .ne(Field::Status, ListingStatus::Pending.as_str().to_string())
        .eq_if_present(Field::Category, category)
}

/// criteria for the admin page: every supplied filter is and-ed together, nothing is excluded by default
pub fn filter_criteria(filters: &ListingFilters) -> Criteria {
    let mut criteria =
        Criteria::newest_first().eq_if_present(Field::Category, filters.category.as_deref());
    if let Some(status) = filters.status {
        criteria = criteria.eq(Field::Status, status.as_str().to_string());
    }
    criteria = criteria.eq_if_present(Field::ContactorPhone, filters.contact_phone.as_deref());
    if let Some(owner_id) = filters.owner_id {
        criteria = criteria.eq(Field::OwnerId, i64::from(owner_id));
    }
    criteria
}
