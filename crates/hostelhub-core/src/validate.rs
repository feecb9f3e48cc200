//! The validation engine: per-entity validators that turn a raw payload into
//! a normalized value or an accumulated list of field violations. Everything
//! here is pure apart from read-only identity lookups, which go through
//! [`IdentityLookup`] so the rules are testable without a live store.

use chrono::{DateTime, NaiveDateTime, Utc};

use hostelhub_db::Database;
use hostelhub_types::api::{
    AchievementRequest, AdminEditProfileRequest, AllowListRequest, AlumniRequest,
    AnnouncementRequest, ComplaintRequest, EventRequest, FacilityRequest, NoticeRequest,
    ProfileRequest, RegisterRequest, Violation,
};
use hostelhub_types::models::Role;

use crate::CoreConfig;
use crate::error::{CoreError, CoreResult};

// Fixed-choice sets. Each choice field is validated against one of these;
// anything else is a violation.
pub const COMPLAINT_CATEGORIES: &[&str] =
    &["Maintenance", "Mess/Food", "Security", "Internet", "Other"];
pub const NOTICE_PRIORITIES: &[&str] = &["Normal", "Important", "Urgent"];
pub const STUDY_YEARS: &[&str] =
    &["1st Year", "2nd Year", "3rd Year", "4th Year", "Ph.D", "M.Tech"];
pub const BRANCHES: &[&str] = &["CSE", "ECE", "ME", "CE"];
pub const ROLES: &[&str] = &["Student", "HMC Admin"];
pub const SUBMIT_AS: &[&str] = &["no", "yes"];

const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Read-only identity queries the registration validator needs.
pub trait IdentityLookup {
    fn username_in_use(&self, username: &str) -> anyhow::Result<bool>;
    fn email_in_use(&self, email: &str) -> anyhow::Result<bool>;
    fn allow_listed(&self, email: &str) -> anyhow::Result<bool>;
}

impl IdentityLookup for Database {
    fn username_in_use(&self, username: &str) -> anyhow::Result<bool> {
        Ok(self.user_by_username(username)?.is_some())
    }

    fn email_in_use(&self, email: &str) -> anyhow::Result<bool> {
        Ok(self.user_by_email(email)?.is_some())
    }

    fn allow_listed(&self, email: &str) -> anyhow::Result<bool> {
        self.allow_list_contains(email)
    }
}

// -- Normalized outputs --

#[derive(Debug)]
pub struct NewRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub roll_number: String,
    pub room_number: String,
    pub studying_year: String,
    pub branch: String,
}

#[derive(Debug)]
pub struct NewComplaintInput {
    pub category: String,
    pub details: String,
    pub anonymous: bool,
}

#[derive(Debug)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub image_url: Option<String>,
}

// -- Field helpers --

fn required(violations: &mut Vec<Violation>, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, "This field is required."));
        false
    } else {
        true
    }
}

fn choice(violations: &mut Vec<Violation>, field: &str, value: &str, allowed: &[&str]) -> bool {
    if allowed.contains(&value) {
        true
    } else {
        violations.push(Violation::new(field, "Not a valid choice."));
        false
    }
}

/// Trimmed, lower-cased form used for allow-list and uniqueness checks.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.')
}

fn finish<T>(violations: Vec<Violation>, value: T) -> CoreResult<T> {
    if violations.is_empty() {
        Ok(value)
    } else {
        Err(CoreError::Validation(violations))
    }
}

// -- Registration --

/// The full registration rule set: field shapes, the institutional email
/// domain, allow-list membership, uniqueness, and the admin enrollment code.
/// An admin-code mismatch is a validation violation like any other, not a
/// separate authorization path.
pub fn validate_registration(
    req: &RegisterRequest,
    config: &CoreConfig,
    identity: &dyn IdentityLookup,
) -> CoreResult<NewRegistration> {
    let mut violations = Vec::new();

    let username = req.username.trim();
    if username.len() < 4 || username.len() > 25 {
        violations.push(Violation::new(
            "username",
            "Username must be between 4 and 25 characters.",
        ));
    } else if identity.username_in_use(username)? {
        violations.push(Violation::new("username", "That username is already taken."));
    }

    let email = normalize_email(&req.email);
    if !looks_like_email(&email) {
        violations.push(Violation::new("email", "Not a valid email address."));
    } else if !email.ends_with(&config.email_domain.to_lowercase()) {
        violations.push(Violation::new(
            "email",
            "Please use your official institute email address.",
        ));
    } else if identity.email_in_use(&email)? {
        violations.push(Violation::new("email", "That email is already in use."));
    } else if !identity.allow_listed(&email)? {
        violations.push(Violation::new(
            "email",
            "You are not a registered resident. Contact an HMC member if you think this is an error.",
        ));
    }

    if req.password.len() < 6 {
        violations.push(Violation::new(
            "password",
            "Password must be at least 6 characters.",
        ));
    }
    if req.confirm_password != req.password {
        violations.push(Violation::new("confirm_password", "Passwords must match."));
    }

    required(&mut violations, "name", &req.name);
    required(&mut violations, "roll_number", &req.roll_number);
    required(&mut violations, "room_number", &req.room_number);
    choice(&mut violations, "studying_year", &req.studying_year, STUDY_YEARS);
    choice(&mut violations, "branch", &req.branch, BRANCHES);

    let mut role = Role::Student;
    if choice(&mut violations, "role", &req.role, ROLES) {
        // choice passed, so from_label cannot miss
        role = Role::from_label(&req.role).unwrap_or(Role::Student);
        if role == Role::HmcAdmin && req.verification_code.as_deref() != Some(&config.admin_code) {
            violations.push(Violation::new("verification_code", "Invalid verification code."));
        }
    }

    finish(
        violations,
        NewRegistration {
            username: username.to_string(),
            email,
            password: req.password.clone(),
            role,
            name: req.name.trim().to_string(),
            roll_number: req.roll_number.trim().to_string(),
            room_number: req.room_number.trim().to_string(),
            studying_year: req.studying_year.clone(),
            branch: req.branch.clone(),
        },
    )
}

// -- Complaints --

pub fn validate_complaint(req: &ComplaintRequest) -> CoreResult<NewComplaintInput> {
    let mut violations = Vec::new();

    choice(&mut violations, "category", &req.category, COMPLAINT_CATEGORIES);

    let details = req.details.trim();
    if details.len() < 10 || details.len() > 500 {
        violations.push(Violation::new(
            "details",
            "Details must be between 10 and 500 characters.",
        ));
    }

    choice(&mut violations, "submit_as", &req.submit_as, SUBMIT_AS);

    finish(
        violations,
        NewComplaintInput {
            category: req.category.clone(),
            details: details.to_string(),
            anonymous: req.submit_as == "yes",
        },
    )
}

// -- Events --

pub fn validate_event(req: &EventRequest) -> CoreResult<EventInput> {
    let mut violations = Vec::new();

    required(&mut violations, "title", &req.title);
    required(&mut violations, "description", &req.description);
    required(&mut violations, "location", &req.location);

    let start = parse_datetime_local(&mut violations, "start_datetime", &req.start_datetime);
    let end = parse_datetime_local(&mut violations, "end_datetime", &req.end_datetime);

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            violations.push(Violation::new(
                "end_datetime",
                "End time must not be before the start time.",
            ));
        }
    }

    match (start, end) {
        (Some(start), Some(end)) if violations.is_empty() => Ok(EventInput {
            title: req.title.trim().to_string(),
            description: req.description.trim().to_string(),
            location: req.location.trim().to_string(),
            start,
            end,
            image_url: req.image_url.clone(),
        }),
        _ => Err(CoreError::Validation(violations)),
    }
}

fn parse_datetime_local(
    violations: &mut Vec<Violation>,
    field: &str,
    value: &str,
) -> Option<DateTime<Utc>> {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, "This field is required."));
        return None;
    }
    match NaiveDateTime::parse_from_str(value.trim(), DATETIME_LOCAL_FORMAT) {
        Ok(ndt) => Some(ndt.and_utc()),
        Err(_) => {
            violations.push(Violation::new(field, "Not a valid date and time."));
            None
        }
    }
}

// -- Admin-managed content --

pub fn validate_announcement(req: &AnnouncementRequest) -> CoreResult<()> {
    let mut violations = Vec::new();
    required(&mut violations, "title", &req.title);
    required(&mut violations, "content", &req.content);
    finish(violations, ())
}

pub fn validate_notice(req: &NoticeRequest) -> CoreResult<()> {
    let mut violations = Vec::new();
    required(&mut violations, "message", &req.message);
    choice(&mut violations, "priority", &req.priority, NOTICE_PRIORITIES);
    finish(violations, ())
}

pub fn validate_facility(req: &FacilityRequest) -> CoreResult<()> {
    let mut violations = Vec::new();
    required(&mut violations, "name", &req.name);
    required(&mut violations, "description", &req.description);
    required(&mut violations, "location", &req.location);
    required(&mut violations, "availability", &req.availability);
    finish(violations, ())
}

pub fn validate_achievement(req: &AchievementRequest) -> CoreResult<()> {
    let mut violations = Vec::new();
    required(&mut violations, "title", &req.title);
    required(&mut violations, "description", &req.description);
    required(&mut violations, "year", &req.year);
    required(&mut violations, "category", &req.category);
    finish(violations, ())
}

pub fn validate_alumni(req: &AlumniRequest) -> CoreResult<()> {
    let mut violations = Vec::new();
    required(&mut violations, "name", &req.name);
    required(&mut violations, "batch_year", &req.batch_year);
    required(&mut violations, "current_position", &req.current_position);
    if let Some(email) = req.email.as_deref() {
        if !email.trim().is_empty() && !looks_like_email(email.trim()) {
            violations.push(Violation::new("email", "Not a valid email address."));
        }
    }
    finish(violations, ())
}

// -- Profiles --

pub fn validate_profile(req: &ProfileRequest) -> CoreResult<()> {
    let mut violations = Vec::new();
    required(&mut violations, "name", &req.name);
    required(&mut violations, "roll_number", &req.roll_number);
    required(&mut violations, "room_number", &req.room_number);
    choice(&mut violations, "studying_year", &req.studying_year, STUDY_YEARS);
    choice(&mut violations, "branch", &req.branch, BRANCHES);
    finish(violations, ())
}

pub fn validate_admin_profile(req: &AdminEditProfileRequest) -> CoreResult<Role> {
    let mut violations = Vec::new();
    required(&mut violations, "roll_number", &req.roll_number);
    required(&mut violations, "room_number", &req.room_number);
    choice(&mut violations, "studying_year", &req.studying_year, STUDY_YEARS);
    choice(&mut violations, "branch", &req.branch, BRANCHES);

    let mut role = Role::Student;
    if choice(&mut violations, "role", &req.role, ROLES) {
        role = Role::from_label(&req.role).unwrap_or(Role::Student);
    }
    finish(violations, role)
}

// -- Allow-list --

pub fn validate_allow_email(req: &AllowListRequest) -> CoreResult<String> {
    let mut violations = Vec::new();
    let email = normalize_email(&req.email);
    if email.is_empty() {
        violations.push(Violation::new("email", "This field is required."));
    } else if !looks_like_email(&email) {
        violations.push(Violation::new("email", "Not a valid email address."));
    }
    finish(violations, email)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lookup with a fixed picture of the identity store.
    struct FakeIdentity {
        taken_usernames: Vec<&'static str>,
        taken_emails: Vec<&'static str>,
        allow_list: Vec<&'static str>,
    }

    impl IdentityLookup for FakeIdentity {
        fn username_in_use(&self, username: &str) -> anyhow::Result<bool> {
            Ok(self.taken_usernames.contains(&username))
        }
        fn email_in_use(&self, email: &str) -> anyhow::Result<bool> {
            Ok(self.taken_emails.contains(&email))
        }
        fn allow_listed(&self, email: &str) -> anyhow::Result<bool> {
            Ok(self.allow_list.contains(&email))
        }
    }

    fn identity() -> FakeIdentity {
        FakeIdentity {
            taken_usernames: vec!["taken"],
            taken_emails: vec!["used@iitg.ac.in"],
            allow_list: vec!["fresh@iitg.ac.in", "used@iitg.ac.in"],
        }
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "freshman".into(),
            email: "Fresh@iitg.ac.in".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            name: "Fresh Person".into(),
            roll_number: "230101001".into(),
            room_number: "B-204".into(),
            studying_year: "1st Year".into(),
            branch: "CSE".into(),
            role: "Student".into(),
            verification_code: None,
        }
    }

    fn fields(err: CoreError) -> Vec<String> {
        match err {
            CoreError::Validation(v) => v.into_iter().map(|v| v.field).collect(),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_registration_normalizes_email() {
        let reg =
            validate_registration(&register_request(), &CoreConfig::default(), &identity()).unwrap();
        assert_eq!(reg.email, "fresh@iitg.ac.in");
        assert_eq!(reg.role, Role::Student);
    }

    #[test]
    fn wrong_domain_rejected_regardless_of_allow_list() {
        let mut req = register_request();
        req.email = "student@gmail.com".into();
        let mut id = identity();
        id.allow_list.push("student@gmail.com");
        let err = validate_registration(&req, &CoreConfig::default(), &id).unwrap_err();
        assert_eq!(fields(err), vec!["email"]);
    }

    #[test]
    fn unlisted_email_rejected() {
        let mut req = register_request();
        req.email = "stranger@iitg.ac.in".into();
        let err = validate_registration(&req, &CoreConfig::default(), &identity()).unwrap_err();
        assert_eq!(fields(err), vec!["email"]);
    }

    #[test]
    fn taken_username_and_email_each_flagged() {
        let mut req = register_request();
        req.username = "taken".into();
        req.email = "used@iitg.ac.in".into();
        let err = validate_registration(&req, &CoreConfig::default(), &identity()).unwrap_err();
        assert_eq!(fields(err), vec!["username", "email"]);
    }

    #[test]
    fn short_password_and_mismatch_accumulate() {
        let mut req = register_request();
        req.password = "abc".into();
        req.confirm_password = "abcd".into();
        let err = validate_registration(&req, &CoreConfig::default(), &identity()).unwrap_err();
        assert_eq!(fields(err), vec!["password", "confirm_password"]);
    }

    #[test]
    fn admin_role_requires_matching_code() {
        let mut req = register_request();
        req.role = "HMC Admin".into();
        req.verification_code = Some("wrong".into());
        let err = validate_registration(&req, &CoreConfig::default(), &identity()).unwrap_err();
        assert_eq!(fields(err), vec!["verification_code"]);

        req.verification_code = Some("UMIAM-HMC".into());
        let reg = validate_registration(&req, &CoreConfig::default(), &identity()).unwrap();
        assert_eq!(reg.role, Role::HmcAdmin);
    }

    #[test]
    fn missing_code_is_a_violation_for_admins_only() {
        let mut req = register_request();
        req.role = "HMC Admin".into();
        req.verification_code = None;
        assert!(validate_registration(&req, &CoreConfig::default(), &identity()).is_err());

        // students never need the code
        req.role = "Student".into();
        assert!(validate_registration(&req, &CoreConfig::default(), &identity()).is_ok());
    }

    #[test]
    fn complaint_details_length_bounds() {
        let mut req = ComplaintRequest {
            category: "Internet".into(),
            details: "short".into(),
            submit_as: "no".into(),
        };
        let err = validate_complaint(&req).unwrap_err();
        assert_eq!(fields(err), vec!["details"]);

        req.details = "x".repeat(501);
        assert!(validate_complaint(&req).is_err());

        req.details = "The wifi in B block has been down since Monday.".into();
        let normalized = validate_complaint(&req).unwrap();
        assert!(!normalized.anonymous);
    }

    #[test]
    fn complaint_unknown_category_rejected() {
        let req = ComplaintRequest {
            category: "Laundry".into(),
            details: "The dryers have been broken for a week now.".into(),
            submit_as: "yes".into(),
        };
        let err = validate_complaint(&req).unwrap_err();
        assert_eq!(fields(err), vec!["category"]);
    }

    #[test]
    fn event_end_before_start_rejected() {
        let req = EventRequest {
            title: "Freshers".into(),
            description: "Welcome night".into(),
            location: "Common hall".into(),
            start_datetime: "2026-09-01T18:00".into(),
            end_datetime: "2026-09-01T17:00".into(),
            image_url: None,
        };
        let err = validate_event(&req).unwrap_err();
        assert_eq!(fields(err), vec!["end_datetime"]);
    }

    #[test]
    fn event_bad_timestamp_is_field_violation() {
        let req = EventRequest {
            title: "Freshers".into(),
            description: "Welcome night".into(),
            location: "Common hall".into(),
            start_datetime: "tomorrow evening".into(),
            end_datetime: "2026-09-01T21:00".into(),
            image_url: None,
        };
        let err = validate_event(&req).unwrap_err();
        assert_eq!(fields(err), vec!["start_datetime"]);
    }

    #[test]
    fn notice_priority_is_data_driven() {
        let ok = NoticeRequest {
            message: "Water supply off 2-4pm".into(),
            priority: "Urgent".into(),
        };
        assert!(validate_notice(&ok).is_ok());

        let bad = NoticeRequest {
            message: "Water supply off 2-4pm".into(),
            priority: "Critical".into(),
        };
        assert_eq!(fields(validate_notice(&bad).unwrap_err()), vec!["priority"]);
    }

    #[test]
    fn allow_email_normalized() {
        let req = AllowListRequest {
            email: "  NewStudent@IITG.ac.in ".into(),
        };
        assert_eq!(validate_allow_email(&req).unwrap(), "newstudent@iitg.ac.in");
    }
}
