use std::backtrace::Backtrace;

use rusqlite::{Connection, TransactionBehavior};

use crate::model::api::OrganisationApi;
use crate::model::error::organisation_errors::{GetOrganisationError, RegisterOrganisationError};
use crate::model::request::organisation_requests::OrganisationRequest;
use crate::organisations::models::OrganisationRecord;
use crate::organisations::repository as organisation_repository;
use crate::repository::{close_connection, open_connection};
use crate::util::now;

/// registers a new organisation. The request is expected to have been validated already
pub fn register_organisation(
    request: OrganisationRequest,
) -> Result<OrganisationApi, RegisterOrganisationError> {
    let created_at = now();
    let organisation = OrganisationRecord {
        id: None,
        name: request.name.trim().to_string(),
        credit_code: request.normalized_credit_code(),
        contactor_name: request.contactor_name.trim().to_string(),
        contactor_phone: request.contactor_phone.trim().to_string(),
        created_at,
        modified_at: created_at,
    };
    let mut con = open_connection();
    let result = insert_new_organisation(&organisation, &mut con);
    close_connection(con);
    let created = result?;
    log::info!(
        "Registered organisation {} with id {:?}",
        created.name,
        created.id
    );
    Ok(OrganisationApi::from(created))
}

fn insert_new_organisation(
    organisation: &OrganisationRecord,
    con: &mut Connection,
) -> Result<OrganisationRecord, RegisterOrganisationError> {
    let tx = con.transaction_with_behavior(TransactionBehavior::Immediate)?;
    if organisation_repository::get_organisation_by_credit_code(&organisation.credit_code, &tx)?
        .is_some()
    {
        log::warn!(
            "Could not register organisation {}, because credit code {} is already registered",
            organisation.name,
            organisation.credit_code
        );
        return Err(RegisterOrganisationError::CreditCodeTaken);
    }
    let created = organisation_repository::create_organisation(organisation, &tx)?;
    tx.commit()?;
    Ok(created)
}

pub fn get_organisation(id: u32) -> Result<OrganisationApi, GetOrganisationError> {
    let con = open_connection();
    let result = organisation_repository::get_organisation(id, &con);
    close_connection(con);
    match result {
        Ok(Some(organisation)) => Ok(OrganisationApi::from(organisation)),
        Ok(None) => Err(GetOrganisationError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to retrieve organisation {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetOrganisationError::DbError)
        }
    }
}
