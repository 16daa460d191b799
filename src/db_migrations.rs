use rusqlite::{Connection, Result};

/// incrementally upgrades the database for each version the database is behind
pub fn migrate_db(con: &Connection, table_version: u64) -> Result<()> {
    if table_version < 2 {
        log_migration_version(2);
        migrate_v2(con)?;
    }
    if table_version < 3 {
        log_migration_version(3);
        migrate_v3(con)?;
    }
    Ok(())
}

fn log_migration_version(_version: u64) {
    #[cfg(not(test))]
    log::info!("Migrating database to v{_version}...");
}

fn migrate_v2(con: &Connection) -> Result<()> {
    let migration_script = include_str!("./assets/migration/v2.sql");
    con.execute_batch(migration_script)
}

fn migrate_v3(con: &Connection) -> Result<()> {
    let migration_script = include_str!("./assets/migration/v3.sql");
    con.execute_batch(migration_script)
}
