use rusqlite::{Connection, OptionalExtension};

use crate::users::models::UserRecord;

/// saves the passed user and returns it with its new id. Username uniqueness is enforced by the table,
/// so callers should check [`get_user_by_username`] first if they want a nicer error
pub fn create_user(user: &UserRecord, con: &Connection) -> Result<UserRecord, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/create_user.sql"))?;
    let id = pst.insert(rusqlite::params![
        user.username,
        user.password_hash,
        user.organisation_id,
        user.verified,
        user.admin
    ])?;
    Ok(UserRecord {
        id: Some(
            u32::try_from(id).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, id))?,
        ),
        ..user.clone()
    })
}

/// retrieves the user with the passed `id`. Returns `Err(rusqlite::Error::QueryReturnedNoRows)` if there is none
pub fn get_user(id: u32, con: &Connection) -> Result<UserRecord, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/get_by_id.sql"))?;
    pst.query_row(rusqlite::params![id], user_mapper)
}

/// case-insensitive search by username. `None` means no match
pub fn get_user_by_username(
    username: &str,
    con: &Connection,
) -> Result<Option<UserRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/get_by_username.sql"))?;
    pst.query_row(rusqlite::params![username], user_mapper)
        .optional()
}

/// returns the number of rows updated, so 0 means the user doesn't exist
pub fn set_verified(id: u32, verified: bool, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/users/set_verified.sql"))?;
    pst.execute(rusqlite::params![verified, id])
}

pub fn count_admins(con: &Connection) -> Result<u32, rusqlite::Error> {
    con.query_row(
        include_str!("../assets/queries/users/count_admins.sql"),
        [],
        |row| row.get(0),
    )
}

/// 1. id
/// 2. username
/// 3. passwordHash
/// 4. organisationId
/// 5. isVerified
/// 6. isAdmin
fn user_mapper(row: &rusqlite::Row) -> Result<UserRecord, rusqlite::Error> {
    Ok(UserRecord {
        id: Some(row.get(0)?),
        username: row.get(1)?,
        password_hash: row.get(2)?,
        organisation_id: row.get(3)?,
        verified: row.get(4)?,
        admin: row.get(5)?,
    })
}
