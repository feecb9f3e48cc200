use chrono::{DateTime, Utc};
use rusqlite::Connection;

use anyhow::Result;

use crate::Database;
use crate::models::{
    AdminProfileFields, NewComplaint, NewUser, ProfileFields, UserRow, parse_status, parse_ts,
};
use hostelhub_types::api::{
    AchievementRequest, AlumniRequest, FacilityRequest, NoticeRequest,
};
use hostelhub_types::models::{
    Account, Achievement, Alumni, Announcement, Complaint, DashboardStats, Event,
    EventRegistration, Facility, Notice,
};

impl Database {
    // -- Users --

    pub fn create_user(&self, user: &NewUser) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO users (username, email, password, role, name, roll_number,
                                    room_number, studying_year, branch, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                rusqlite::params![
                    user.username,
                    user.email,
                    user.password_hash,
                    user.role,
                    user.name,
                    user.roll_number,
                    user.room_number,
                    user.studying_year,
                    user.branch,
                    user.created_at.to_rfc3339(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "email", email))
    }

    pub fn user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "username", username))
    }

    pub fn user_by_id(&self, id: i64) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {USER_COLS} FROM users WHERE id = ?1"))?;
            let row = stmt.query_row([id], map_user_row).optional()?;
            Ok(row)
        })
    }

    pub fn list_users(&self) -> Result<Vec<Account>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {USER_COLS} FROM users ORDER BY id"))?;
            let rows = stmt
                .query_map([], map_user_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows.into_iter().map(UserRow::into_account).collect())
        })
    }

    pub fn update_profile(&self, user_id: i64, fields: &ProfileFields) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE users SET name = ?1, roll_number = ?2, room_number = ?3,
                                  studying_year = ?4, branch = ?5,
                                  profile_pic_url = COALESCE(?6, profile_pic_url)
                 WHERE id = ?7",
                rusqlite::params![
                    fields.name,
                    fields.roll_number,
                    fields.room_number,
                    fields.studying_year,
                    fields.branch,
                    fields.profile_pic_url,
                    user_id,
                ],
            )?;
            Ok(n)
        })
    }

    pub fn admin_update_user(&self, user_id: i64, fields: &AdminProfileFields) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE users SET roll_number = ?1, room_number = ?2, studying_year = ?3,
                                  branch = ?4, role = ?5, profile_pic_url = ?6
                 WHERE id = ?7",
                rusqlite::params![
                    fields.roll_number,
                    fields.room_number,
                    fields.studying_year,
                    fields.branch,
                    fields.role,
                    fields.profile_pic_url,
                    user_id,
                ],
            )?;
            Ok(n)
        })
    }

    // -- Allow-list --

    pub fn allow_list_contains(&self, email: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let found: Option<String> = conn
                .query_row(
                    "SELECT email FROM allowed_students WHERE email = ?1",
                    [email],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(found.is_some())
        })
    }

    pub fn allow_list_add(&self, email: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute("INSERT INTO allowed_students (email) VALUES (?1)", [email])?;
            Ok(())
        })
    }

    // -- Complaints --

    pub fn insert_complaint(&self, complaint: &NewComplaint) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO complaints (category, details, status, submission_date, user_id, anonymous)
                 VALUES (?1, ?2, 'Submitted', ?3, ?4, ?5)",
                rusqlite::params![
                    complaint.category,
                    complaint.details,
                    complaint.submission_date.to_rfc3339(),
                    complaint.user_id,
                    complaint.anonymous,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn complaint_by_id(&self, id: i64) -> Result<Option<Complaint>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COMPLAINT_COLS} FROM complaints WHERE id = ?1"
            ))?;
            let row = stmt.query_row([id], map_complaint_row).optional()?;
            Ok(row)
        })
    }

    pub fn complaints_by_owner(&self, user_id: i64) -> Result<Vec<Complaint>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COMPLAINT_COLS} FROM complaints
                 WHERE user_id = ?1
                 ORDER BY submission_date DESC"
            ))?;
            let rows = stmt
                .query_map([user_id], map_complaint_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn list_complaints(&self) -> Result<Vec<Complaint>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COMPLAINT_COLS} FROM complaints ORDER BY submission_date DESC"
            ))?;
            let rows = stmt
                .query_map([], map_complaint_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn set_complaint_status(&self, id: i64, status: &str) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE complaints SET status = ?1 WHERE id = ?2",
                rusqlite::params![status, id],
            )?;
            Ok(n)
        })
    }

    pub fn set_complaint_comment(&self, id: i64, comment: &str) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE complaints SET comments = ?1 WHERE id = ?2",
                rusqlite::params![comment, id],
            )?;
            Ok(n)
        })
    }

    // -- Announcements --

    pub fn insert_announcement(
        &self,
        title: &str,
        content: &str,
        user_id: i64,
        date_posted: DateTime<Utc>,
    ) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO announcements (title, content, date_posted, user_id)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![title, content, date_posted.to_rfc3339(), user_id],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn update_announcement(&self, id: i64, title: &str, content: &str) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE announcements SET title = ?1, content = ?2 WHERE id = ?3",
                rusqlite::params![title, content, id],
            )?;
            Ok(n)
        })
    }

    pub fn delete_announcement(&self, id: i64) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute("DELETE FROM announcements WHERE id = ?1", [id])?;
            Ok(n)
        })
    }

    pub fn recent_announcements(&self, limit: u32) -> Result<Vec<Announcement>> {
        self.with_conn(|conn| {
            // JOIN users for the author name in a single query
            let mut stmt = conn.prepare(
                "SELECT a.id, a.title, a.content, a.date_posted, a.user_id, u.username
                 FROM announcements a
                 LEFT JOIN users u ON a.user_id = u.id
                 ORDER BY a.date_posted DESC
                 LIMIT ?1",
            )?;
            let rows = stmt
                .query_map([limit], |row| {
                    Ok(Announcement {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        content: row.get(2)?,
                        date_posted: parse_ts(&row.get::<_, String>(3)?),
                        user_id: row.get(4)?,
                        author_username: row
                            .get::<_, Option<String>>(5)?
                            .unwrap_or_else(|| "unknown".to_string()),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Notices --

    pub fn insert_notice(&self, notice: &NoticeRequest, created_at: DateTime<Utc>) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO notices (message, priority, created_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![notice.message, notice.priority, created_at.to_rfc3339()],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn update_notice(&self, id: i64, notice: &NoticeRequest) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE notices SET message = ?1, priority = ?2 WHERE id = ?3",
                rusqlite::params![notice.message, notice.priority, id],
            )?;
            Ok(n)
        })
    }

    pub fn delete_notice(&self, id: i64) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute("DELETE FROM notices WHERE id = ?1", [id])?;
            Ok(n)
        })
    }

    pub fn latest_notices(&self, limit: u32) -> Result<Vec<Notice>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, message, priority, created_at FROM notices
                 ORDER BY created_at DESC LIMIT ?1",
            )?;
            let rows = stmt
                .query_map([limit], |row| {
                    Ok(Notice {
                        id: row.get(0)?,
                        message: row.get(1)?,
                        priority: row.get(2)?,
                        created_at: parse_ts(&row.get::<_, String>(3)?),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Facilities --

    pub fn insert_facility(
        &self,
        facility: &FacilityRequest,
        created_at: DateTime<Utc>,
    ) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO facilities (name, description, location, availability, image_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    facility.name,
                    facility.description,
                    facility.location,
                    facility.availability,
                    facility.image_url,
                    created_at.to_rfc3339(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn update_facility(&self, id: i64, facility: &FacilityRequest) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE facilities SET name = ?1, description = ?2, location = ?3,
                                       availability = ?4, image_url = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    facility.name,
                    facility.description,
                    facility.location,
                    facility.availability,
                    facility.image_url,
                    id,
                ],
            )?;
            Ok(n)
        })
    }

    pub fn delete_facility(&self, id: i64) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute("DELETE FROM facilities WHERE id = ?1", [id])?;
            Ok(n)
        })
    }

    pub fn list_facilities(&self) -> Result<Vec<Facility>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, description, location, availability, image_url, created_at
                 FROM facilities ORDER BY name",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Facility {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                        location: row.get(3)?,
                        availability: row.get(4)?,
                        image_url: row.get(5)?,
                        created_at: parse_ts(&row.get::<_, String>(6)?),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Achievements --

    pub fn insert_achievement(
        &self,
        achievement: &AchievementRequest,
        created_at: DateTime<Utc>,
    ) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO achievements (title, description, year, category, image_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    achievement.title,
                    achievement.description,
                    achievement.year,
                    achievement.category,
                    achievement.image_url,
                    created_at.to_rfc3339(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn update_achievement(&self, id: i64, achievement: &AchievementRequest) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE achievements SET title = ?1, description = ?2, year = ?3,
                                         category = ?4, image_url = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    achievement.title,
                    achievement.description,
                    achievement.year,
                    achievement.category,
                    achievement.image_url,
                    id,
                ],
            )?;
            Ok(n)
        })
    }

    pub fn delete_achievement(&self, id: i64) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute("DELETE FROM achievements WHERE id = ?1", [id])?;
            Ok(n)
        })
    }

    pub fn list_achievements(&self) -> Result<Vec<Achievement>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, description, year, category, image_url, created_at
                 FROM achievements ORDER BY year DESC",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Achievement {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        description: row.get(2)?,
                        year: row.get(3)?,
                        category: row.get(4)?,
                        image_url: row.get(5)?,
                        created_at: parse_ts(&row.get::<_, String>(6)?),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Alumni --

    pub fn insert_alumni(&self, alumni: &AlumniRequest, created_at: DateTime<Utc>) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO alumni (name, batch_year, current_position, company, linkedin,
                                     email, achievements, image_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                rusqlite::params![
                    alumni.name,
                    alumni.batch_year,
                    alumni.current_position,
                    alumni.company,
                    alumni.linkedin,
                    alumni.email,
                    alumni.achievements,
                    alumni.image_url,
                    created_at.to_rfc3339(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn update_alumni(&self, id: i64, alumni: &AlumniRequest) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE alumni SET name = ?1, batch_year = ?2, current_position = ?3,
                                   company = ?4, linkedin = ?5, email = ?6,
                                   achievements = ?7, image_url = ?8
                 WHERE id = ?9",
                rusqlite::params![
                    alumni.name,
                    alumni.batch_year,
                    alumni.current_position,
                    alumni.company,
                    alumni.linkedin,
                    alumni.email,
                    alumni.achievements,
                    alumni.image_url,
                    id,
                ],
            )?;
            Ok(n)
        })
    }

    pub fn delete_alumni(&self, id: i64) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute("DELETE FROM alumni WHERE id = ?1", [id])?;
            Ok(n)
        })
    }

    pub fn list_alumni(&self) -> Result<Vec<Alumni>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, batch_year, current_position, company, linkedin,
                        email, achievements, image_url, created_at
                 FROM alumni ORDER BY batch_year DESC",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Alumni {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        batch_year: row.get(2)?,
                        current_position: row.get(3)?,
                        company: row.get(4)?,
                        linkedin: row.get(5)?,
                        email: row.get(6)?,
                        achievements: row.get(7)?,
                        image_url: row.get(8)?,
                        created_at: parse_ts(&row.get::<_, String>(9)?),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Events --

    #[allow(clippy::too_many_arguments)]
    pub fn insert_event(
        &self,
        title: &str,
        description: &str,
        location: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        image_url: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO events (title, description, location, start_datetime,
                                     end_datetime, image_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    title,
                    description,
                    location,
                    start.to_rfc3339(),
                    end.to_rfc3339(),
                    image_url,
                    created_at.to_rfc3339(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_event(
        &self,
        id: i64,
        title: &str,
        description: &str,
        location: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        image_url: Option<&str>,
    ) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let n = conn.execute(
                "UPDATE events SET title = ?1, description = ?2, location = ?3,
                                   start_datetime = ?4, end_datetime = ?5, image_url = ?6
                 WHERE id = ?7",
                rusqlite::params![
                    title,
                    description,
                    location,
                    start.to_rfc3339(),
                    end.to_rfc3339(),
                    image_url,
                    id,
                ],
            )?;
            Ok(n)
        })
    }

    /// Delete an event and its registrations in one transaction. SQLite does
    /// not cascade for us, and a partial delete would strand registration
    /// rows pointing at a missing event.
    pub fn delete_event_cascade(&self, id: i64) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM event_registrations WHERE event_id = ?1", [id])?;
            let n = tx.execute("DELETE FROM events WHERE id = ?1", [id])?;
            tx.commit()?;
            Ok(n > 0)
        })
    }

    pub fn event_by_id(&self, id: i64) -> Result<Option<Event>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {EVENT_COLS} FROM events WHERE id = ?1"))?;
            let row = stmt.query_row([id], map_event_row).optional()?;
            Ok(row)
        })
    }

    pub fn list_events(&self) -> Result<Vec<Event>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {EVENT_COLS} FROM events ORDER BY start_datetime"
            ))?;
            let rows = stmt
                .query_map([], map_event_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Event registrations --

    /// Toggle a registration: removes if present, inserts if not.
    /// Returns true when the pair is registered after the call.
    pub fn toggle_registration(
        &self,
        event_id: i64,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let existing: Option<i64> = conn
                .query_row(
                    "SELECT id FROM event_registrations WHERE event_id = ?1 AND user_id = ?2",
                    [event_id, user_id],
                    |row| row.get(0),
                )
                .optional()?;

            if let Some(existing_id) = existing {
                conn.execute("DELETE FROM event_registrations WHERE id = ?1", [existing_id])?;
                Ok(false)
            } else {
                conn.execute(
                    "INSERT INTO event_registrations (event_id, user_id, registration_date)
                     VALUES (?1, ?2, ?3)",
                    rusqlite::params![event_id, user_id, now.to_rfc3339()],
                )?;
                Ok(true)
            }
        })
    }

    pub fn registrations_for_event(&self, event_id: i64) -> Result<Vec<EventRegistration>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT r.id, r.event_id, r.user_id, u.username, r.registration_date
                 FROM event_registrations r
                 LEFT JOIN users u ON r.user_id = u.id
                 WHERE r.event_id = ?1
                 ORDER BY r.registration_date",
            )?;
            let rows = stmt
                .query_map([event_id], |row| {
                    Ok(EventRegistration {
                        id: row.get(0)?,
                        event_id: row.get(1)?,
                        user_id: row.get(2)?,
                        username: row
                            .get::<_, Option<String>>(3)?
                            .unwrap_or_else(|| "unknown".to_string()),
                        registration_date: parse_ts(&row.get::<_, String>(4)?),
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Event ids the user currently holds a registration for.
    pub fn registered_event_ids(&self, user_id: i64) -> Result<Vec<i64>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT event_id FROM event_registrations WHERE user_id = ?1")?;
            let ids = stmt
                .query_map([user_id], |row| row.get(0))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(ids)
        })
    }

    pub fn count_registrations_for_event(&self, event_id: i64) -> Result<i64> {
        self.with_conn(|conn| {
            let n = conn.query_row(
                "SELECT COUNT(*) FROM event_registrations WHERE event_id = ?1",
                [event_id],
                |row| row.get(0),
            )?;
            Ok(n)
        })
    }

    // -- Dashboard --

    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.with_conn(|conn| {
            let count = |sql: &str| -> Result<i64> {
                Ok(conn.query_row(sql, [], |row| row.get(0))?)
            };

            let total_students = count("SELECT COUNT(*) FROM users WHERE role = 'Student'")?;
            let total_complaints = count("SELECT COUNT(*) FROM complaints")?;
            let resolved_complaints =
                count("SELECT COUNT(*) FROM complaints WHERE status = 'Resolved'")?;
            Ok(DashboardStats {
                total_students,
                total_complaints,
                resolved_complaints,
                pending_complaints: total_complaints - resolved_complaints,
                total_events: count("SELECT COUNT(*) FROM events")?,
                total_facilities: count("SELECT COUNT(*) FROM facilities")?,
                total_alumni: count("SELECT COUNT(*) FROM alumni")?,
            })
        })
    }
}

const USER_COLS: &str = "id, username, email, password, role, name, roll_number, room_number,
                         studying_year, branch, profile_pic_url, created_at";

const COMPLAINT_COLS: &str =
    "id, category, details, status, submission_date, user_id, anonymous, comments";

const EVENT_COLS: &str =
    "id, title, description, location, start_datetime, end_datetime, image_url, created_at";

fn query_user(conn: &Connection, column: &str, value: &str) -> Result<Option<UserRow>> {
    // `column` is one of our own literals, never caller input
    let mut stmt = conn.prepare(&format!(
        "SELECT {USER_COLS} FROM users WHERE {column} = ?1"
    ))?;
    let row = stmt.query_row([value], map_user_row).optional()?;
    Ok(row)
}

fn map_user_row(row: &rusqlite::Row) -> std::result::Result<UserRow, rusqlite::Error> {
    Ok(UserRow {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        role: row.get(4)?,
        name: row.get(5)?,
        roll_number: row.get(6)?,
        room_number: row.get(7)?,
        studying_year: row.get(8)?,
        branch: row.get(9)?,
        profile_pic_url: row.get(10)?,
        created_at: row.get(11)?,
    })
}

fn map_complaint_row(row: &rusqlite::Row) -> std::result::Result<Complaint, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    Ok(Complaint {
        id,
        category: row.get(1)?,
        details: row.get(2)?,
        status: parse_status(&row.get::<_, String>(3)?, id),
        submission_date: parse_ts(&row.get::<_, String>(4)?),
        user_id: row.get(5)?,
        anonymous: row.get(6)?,
        comments: row.get(7)?,
    })
}

fn map_event_row(row: &rusqlite::Row) -> std::result::Result<Event, rusqlite::Error> {
    Ok(Event {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        start_datetime: parse_ts(&row.get::<_, String>(4)?),
        end_datetime: parse_ts(&row.get::<_, String>(5)?),
        image_url: row.get(6)?,
        created_at: parse_ts(&row.get::<_, String>(7)?),
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
