use chrono::{DateTime, Utc};
use tracing::warn;

use hostelhub_types::models::{Account, ComplaintStatus, Role};

/// Raw user row. The only row type distinct from the API models: it carries
/// the credential hash, which must not travel past the auth path.
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub name: String,
    pub roll_number: String,
    pub room_number: String,
    pub studying_year: String,
    pub branch: String,
    pub profile_pic_url: Option<String>,
    pub created_at: String,
}

impl UserRow {
    pub fn into_account(self) -> Account {
        Account {
            id: self.id,
            username: self.username,
            email: self.email,
            role: parse_role(&self.role, self.id),
            name: self.name,
            roll_number: self.roll_number,
            room_number: self.room_number,
            studying_year: self.studying_year,
            branch: self.branch,
            profile_pic_url: self.profile_pic_url,
            created_at: parse_ts(&self.created_at),
        }
    }
}

/// Fields for a freshly validated account insert.
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub name: &'a str,
    pub roll_number: &'a str,
    pub room_number: &'a str,
    pub studying_year: &'a str,
    pub branch: &'a str,
    pub created_at: DateTime<Utc>,
}

pub struct NewComplaint<'a> {
    pub category: &'a str,
    pub details: &'a str,
    pub submission_date: DateTime<Utc>,
    /// None iff anonymous.
    pub user_id: Option<i64>,
    pub anonymous: bool,
}

pub struct ProfileFields<'a> {
    pub name: &'a str,
    pub roll_number: &'a str,
    pub room_number: &'a str,
    pub studying_year: &'a str,
    pub branch: &'a str,
    pub profile_pic_url: Option<&'a str>,
}

pub struct AdminProfileFields<'a> {
    pub roll_number: &'a str,
    pub room_number: &'a str,
    pub studying_year: &'a str,
    pub branch: &'a str,
    pub role: &'a str,
    pub profile_pic_url: Option<&'a str>,
}

pub(crate) fn parse_role(label: &str, user_id: i64) -> Role {
    Role::from_label(label).unwrap_or_else(|| {
        warn!("Corrupt role '{}' on user {}, treating as Student", label, user_id);
        Role::Student
    })
}

pub(crate) fn parse_status(label: &str, complaint_id: i64) -> ComplaintStatus {
    ComplaintStatus::from_label(label).unwrap_or_else(|| {
        warn!(
            "Corrupt status '{}' on complaint {}, treating as Submitted",
            label, complaint_id
        );
        ComplaintStatus::Submitted
    })
}

/// Timestamps are written by us as RFC 3339; tolerate the bare SQLite
/// `datetime('now')` shape for rows created outside the app.
pub(crate) fn parse_ts(text: &str) -> DateTime<Utc> {
    text.parse::<DateTime<Utc>>()
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt timestamp '{}': {}", text, e);
            DateTime::default()
        })
}
