use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Stored as its display label ("Student" / "HMC Admin") so the
/// database stays readable; everything role-sensitive goes through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    #[serde(rename = "HMC Admin")]
    HmcAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::HmcAdmin => "HMC Admin",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Student" => Some(Role::Student),
            "HMC Admin" => Some(Role::HmcAdmin),
            _ => None,
        }
    }
}

/// The five fixed complaint status labels. An unordered set with admin-only
/// mutation — any label may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "Submitted",
            ComplaintStatus::UnderReview => "Under Review",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Closed => "Closed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Submitted" => Some(ComplaintStatus::Submitted),
            "Under Review" => Some(ComplaintStatus::UnderReview),
            "In Progress" => Some(ComplaintStatus::InProgress),
            "Resolved" => Some(ComplaintStatus::Resolved),
            "Closed" => Some(ComplaintStatus::Closed),
            _ => None,
        }
    }
}

/// Whether an (account, event) pair currently holds a registration row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationState {
    Registered,
    NotRegistered,
}

/// A registered account. The credential hash never leaves the db layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub roll_number: String,
    pub room_number: String,
    pub studying_year: String,
    pub branch: String,
    pub profile_pic_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: i64,
    pub category: String,
    pub details: String,
    pub status: ComplaintStatus,
    pub submission_date: DateTime<Utc>,
    /// None iff the complaint was submitted anonymously.
    pub user_id: Option<i64>,
    pub anonymous: bool,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
    pub user_id: i64,
    pub author_username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub availability: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year: String,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub message: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alumni {
    pub id: i64,
    pub name: String,
    pub batch_year: String,
    pub current_position: String,
    pub company: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub achievements: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An event as seen by one actor: the record plus whether that actor is
/// currently registered for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWithRegistration {
    #[serde(flatten)]
    pub event: Event,
    pub registered: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRegistration {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub username: String,
    pub registration_date: DateTime<Utc>,
}

/// Counters for the authenticated dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_students: i64,
    pub total_complaints: i64,
    pub resolved_complaints: i64,
    pub pending_complaints: i64,
    pub total_events: i64,
    pub total_facilities: i64,
    pub total_alumni: i64,
}
