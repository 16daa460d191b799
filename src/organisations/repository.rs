use rusqlite::{Connection, OptionalExtension};

use crate::organisations::models::OrganisationRecord;

/// saves the passed organisation and returns it with its new id. Credit codes are unique in the table,
/// so callers should check [`get_organisation_by_credit_code`] first if they want a nicer error
pub fn create_organisation(
    organisation: &OrganisationRecord,
    con: &Connection,
) -> Result<OrganisationRecord, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/organisations/create_organisation.sql"
    ))?;
    let id = pst.insert(rusqlite::params![
        organisation.name,
        organisation.credit_code,
        organisation.contactor_name,
        organisation.contactor_phone,
        organisation.created_at,
        organisation.modified_at
    ])?;
    Ok(OrganisationRecord {
        id: Some(
            u32::try_from(id).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, id))?,
        ),
        ..organisation.clone()
    })
}

pub fn get_organisation(
    id: u32,
    con: &Connection,
) -> Result<Option<OrganisationRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/organisations/get_by_id.sql"))?;
    pst.query_row(rusqlite::params![id], organisation_mapper)
        .optional()
}

/// case-insensitive
pub fn get_organisation_by_credit_code(
    credit_code: &str,
    con: &Connection,
) -> Result<Option<OrganisationRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/organisations/get_by_credit_code.sql"
    ))?;
    pst.query_row(rusqlite::params![credit_code], organisation_mapper)
        .optional()
}

/// 1. id
/// 2. name
/// 3. uniformSocialCreditCode
/// 4. contactorName
/// 5. contactorPhone
/// 6. createdAt
/// 7. modifiedAt
fn organisation_mapper(row: &rusqlite::Row) -> Result<OrganisationRecord, rusqlite::Error> {
    Ok(OrganisationRecord {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        credit_code: row.get(2)?,
        contactor_name: row.get(3)?,
        contactor_phone: row.get(4)?,
        created_at: row.get(5)?,
        modified_at: row.get(6)?,
    })
}
