use std::backtrace::Backtrace;
use std::path::Path;

use rusqlite::{Connection, OpenFlags, Result};

use crate::db_migrations::migrate_db;

pub mod metadata_repository;

/// creates a new connection and returns it, but panics if the connection could not be created
#[cfg(not(test))]
pub fn open_connection() -> Connection {
    use crate::config::RELIEF_BOARD_CONFIG;

    match Connection::open_with_flags(
        Path::new(RELIEF_BOARD_CONFIG.database.location.as_str()),
        OpenFlags::default(),
    ) {
        Ok(con) => con,
        Err(error) => panic!("Failed to get a connection to the database!: {error}"),
    }
}

#[cfg(test)]
pub fn open_connection() -> Connection {
    let db_name = format!("{}.sqlite", crate::test::current_thread_name());
    match Connection::open_with_flags(Path::new(db_name.as_str()), OpenFlags::default()) {
        Ok(con) => con,
        Err(error) => panic!("Failed to get a connection to the database!: {error}"),
    }
}

/// closes the passed connection, logging instead of panicking if sqlite refuses
pub fn close_connection(con: Connection) {
    if let Err((_, e)) = con.close() {
        log::error!(
            "Failed to close database connection: {e:?}\n{}",
            Backtrace::force_capture()
        );
    }
}

/// runs init.sql on the database
fn create_db(con: &Connection) -> Result<()> {
    con.execute_batch(include_str!("../assets/init.sql"))
}

/// handles checking if the database exists and is up to the correct version.
/// If not, it either creates or upgrades the database accordingly
pub fn initialize_db() -> Result<()> {
    let con = open_connection();
    let table_version = match metadata_repository::get_version(&con) {
        Ok(value) => value.parse::<u64>().unwrap_or(1),
        Err(_) => {
            // tables haven't been created yet
            create_db(&con)?;
            1
        }
    };
    migrate_db(&con, table_version)?;
    close_connection(con);
    Ok(())
}
