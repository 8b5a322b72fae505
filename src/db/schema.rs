use rusqlite::Connection;

use crate::error::ExportResult;

/// Initialize the contact store schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> ExportResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY NOT NULL,
            position INTEGER NOT NULL,
            name TEXT NOT NULL,
            first_name TEXT,
            last_name TEXT,
            company TEXT,
            job_title TEXT,
            birthday_day INTEGER,
            birthday_month INTEGER,
            birthday_year INTEGER,
            note TEXT
        );

        CREATE TABLE IF NOT EXISTS contact_phones (
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            number TEXT NOT NULL,
            label TEXT,
            PRIMARY KEY (contact_id, position)
        );

        CREATE TABLE IF NOT EXISTS contact_emails (
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            email TEXT NOT NULL,
            label TEXT,
            PRIMARY KEY (contact_id, position)
        );

        CREATE TABLE IF NOT EXISTS contact_addresses (
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            street TEXT,
            city TEXT,
            region TEXT,
            postal_code TEXT,
            country TEXT,
            label TEXT,
            PRIMARY KEY (contact_id, position)
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
