use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            username        TEXT NOT NULL UNIQUE,
            email           TEXT NOT NULL UNIQUE,
            password        TEXT NOT NULL,
            role            TEXT NOT NULL DEFAULT 'Student',
            name            TEXT NOT NULL,
            roll_number     TEXT NOT NULL,
            room_number     TEXT NOT NULL,
            studying_year   TEXT NOT NULL,
            branch          TEXT NOT NULL,
            profile_pic_url TEXT,
            created_at      TEXT NOT NULL
        );

        -- Pre-approved resident emails, keyed by normalized address.
        CREATE TABLE IF NOT EXISTS allowed_students (
            email       TEXT PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS announcements (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            content     TEXT NOT NULL,
            date_posted TEXT NOT NULL,
            user_id     INTEGER NOT NULL REFERENCES users(id)
        );

        CREATE TABLE IF NOT EXISTS complaints (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            category        TEXT NOT NULL,
            details         TEXT NOT NULL,
            status          TEXT NOT NULL DEFAULT 'Submitted',
            submission_date TEXT NOT NULL,
            user_id         INTEGER REFERENCES users(id),
            anonymous       INTEGER NOT NULL DEFAULT 0,
            comments        TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_complaints_owner
            ON complaints(user_id, submission_date);

        CREATE TABLE IF NOT EXISTS facilities (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            description  TEXT NOT NULL,
            location     TEXT NOT NULL,
            availability TEXT NOT NULL,
            image_url    TEXT,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS achievements (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL,
            year        TEXT NOT NULL,
            category    TEXT NOT NULL,
            image_url   TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notices (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            message     TEXT NOT NULL,
            priority    TEXT NOT NULL DEFAULT 'Normal',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS alumni (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            name             TEXT NOT NULL,
            batch_year       TEXT NOT NULL,
            current_position TEXT NOT NULL,
            company          TEXT,
            linkedin         TEXT,
            email            TEXT,
            achievements     TEXT,
            image_url        TEXT,
            created_at       TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS events (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            title          TEXT NOT NULL,
            description    TEXT NOT NULL,
            location       TEXT NOT NULL,
            start_datetime TEXT NOT NULL,
            end_datetime   TEXT NOT NULL,
            image_url      TEXT,
            created_at     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS event_registrations (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id          INTEGER NOT NULL REFERENCES events(id),
            user_id           INTEGER NOT NULL REFERENCES users(id),
            registration_date TEXT NOT NULL,
            UNIQUE(event_id, user_id)
        );

        CREATE INDEX IF NOT EXISTS idx_registrations_event
            ON event_registrations(event_id);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
