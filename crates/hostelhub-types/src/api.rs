use serde::{Deserialize, Serialize};

use crate::models::Role;

// -- JWT Claims --

/// JWT claims shared between the REST middleware and the auth handlers.
/// Deliberately role-free: the role is re-read from the store per request so
/// an admin demotion takes effect on the next call, not at token expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub exp: usize,
}

// -- Validation --

/// One field-level rule failure. Violations are ordinary data, accumulated
/// and returned to the caller for per-field display — never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// -- Auth --

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub roll_number: String,
    pub room_number: String,
    pub studying_year: String,
    pub branch: String,
    pub role: String,
    #[serde(default)]
    pub verification_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    pub token: String,
}

// -- Complaints --

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplaintRequest {
    pub category: String,
    pub details: String,
    /// "no" to identify yourself, "yes" to submit anonymously.
    pub submit_as: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplaintStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplaintCommentRequest {
    pub comment: String,
}

// -- Admin-managed content --

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnouncementRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoticeRequest {
    pub message: String,
    pub priority: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacilityRequest {
    pub name: String,
    pub description: String,
    pub location: String,
    pub availability: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementRequest {
    pub title: String,
    pub description: String,
    pub year: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlumniRequest {
    pub name: String,
    pub batch_year: String,
    pub current_position: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub achievements: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Start/end arrive as `%Y-%m-%dT%H:%M` strings (datetime-local inputs);
/// parsing them is a validation concern, not a deserialization one.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_datetime: String,
    pub end_datetime: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

// -- Profiles --

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileRequest {
    pub name: String,
    pub roll_number: String,
    pub room_number: String,
    pub studying_year: String,
    pub branch: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminEditProfileRequest {
    pub roll_number: String,
    pub room_number: String,
    pub studying_year: String,
    pub branch: String,
    pub role: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

// -- Allow-list --

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllowListRequest {
    pub email: String,
}
