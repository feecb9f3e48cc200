//! End-to-end lifecycle tests: authorization, validation, and store mutation
//! exercised together against an in-memory database.

use hostelhub_core::{Core, CoreConfig, CoreError};
use hostelhub_db::Database;
use hostelhub_types::api::{
    AllowListRequest, ComplaintRequest, ComplaintStatusRequest, EventRequest, NoticeRequest,
    RegisterRequest,
};
use hostelhub_types::models::{Account, ComplaintStatus, RegistrationState, Role};

fn core() -> Core {
    Core::new(Database::open_in_memory().unwrap(), CoreConfig::default())
}

fn register_payload(username: &str, email: &str, role: Role) -> RegisterRequest {
    RegisterRequest {
        username: username.into(),
        email: email.into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        name: "Test Person".into(),
        roll_number: "210102001".into(),
        room_number: "C-112".into(),
        studying_year: "3rd Year".into(),
        branch: "ECE".into(),
        role: role.as_str().into(),
        verification_code: match role {
            Role::HmcAdmin => Some("UMIAM-HMC".into()),
            Role::Student => None,
        },
    }
}

/// Allow-list the email directly, then register through the core.
fn seed_account(core: &Core, username: &str, role: Role) -> Account {
    let email = format!("{username}@iitg.ac.in");
    core.db.allow_list_add(&email).unwrap();
    core.register_account(&register_payload(username, &email, role)).unwrap()
}

fn event_payload(title: &str) -> EventRequest {
    EventRequest {
        title: title.into(),
        description: "An evening event in the common hall.".into(),
        location: "Common hall".into(),
        start_datetime: "2026-09-10T18:00".into(),
        end_datetime: "2026-09-10T21:00".into(),
        image_url: None,
    }
}

fn complaint_payload(submit_as: &str) -> ComplaintRequest {
    ComplaintRequest {
        category: "Maintenance".into(),
        details: "The corridor light on the second floor is broken.".into(),
        submit_as: submit_as.into(),
    }
}

// -- Registration and authentication --

#[test]
fn register_then_authenticate() {
    let core = core();
    let account = seed_account(&core, "resident1", Role::Student);
    assert_eq!(account.role, Role::Student);

    let authed = core.authenticate("resident1@iitg.ac.in", "secret1").unwrap();
    assert_eq!(authed.id, account.id);

    assert!(matches!(
        core.authenticate("resident1@iitg.ac.in", "wrong"),
        Err(CoreError::InvalidCredentials)
    ));
    assert!(matches!(
        core.authenticate("nobody@iitg.ac.in", "secret1"),
        Err(CoreError::InvalidCredentials)
    ));
}

#[test]
fn registration_requires_allow_list_membership() {
    let core = core();
    let payload = register_payload("stranger", "stranger@iitg.ac.in", Role::Student);
    let err = core.register_account(&payload).unwrap_err();
    assert!(matches!(err, CoreError::Validation(ref v) if v[0].field == "email"));
}

#[test]
fn second_registration_with_same_identity_rejected() {
    let core = core();
    seed_account(&core, "resident2", Role::Student);

    let payload = register_payload("resident2", "resident2@iitg.ac.in", Role::Student);
    let err = core.register_account(&payload).unwrap_err();
    // the validator sees both username and email in use
    assert!(matches!(err, CoreError::Validation(ref v) if v.len() == 2));
}

// -- Complaints --

#[test]
fn identified_complaint_is_owned_and_listed() {
    let core = core();
    let student = seed_account(&core, "owner1", Role::Student);

    let complaint = core.submit_complaint(Some(&student), &complaint_payload("no")).unwrap();
    assert_eq!(complaint.user_id, Some(student.id));
    assert!(!complaint.anonymous);
    assert_eq!(complaint.status, ComplaintStatus::Submitted);

    let mine = core.my_complaints(Some(&student)).unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, complaint.id);
}

#[test]
fn anonymous_complaint_has_no_owner() {
    let core = core();
    let student = seed_account(&core, "anon1", Role::Student);

    let complaint = core.submit_complaint(Some(&student), &complaint_payload("yes")).unwrap();
    assert!(complaint.anonymous);
    assert_eq!(complaint.user_id, None);

    // not even the submitter's own listing can reach it
    assert!(core.my_complaints(Some(&student)).unwrap().is_empty());
}

#[test]
fn ownership_filters_other_students_complaints() {
    let core = core();
    let alice = seed_account(&core, "alice", Role::Student);
    let bob = seed_account(&core, "bobby", Role::Student);

    core.submit_complaint(Some(&alice), &complaint_payload("no")).unwrap();
    assert!(core.my_complaints(Some(&bob)).unwrap().is_empty());
}

#[test]
fn short_details_rejected() {
    let core = core();
    let student = seed_account(&core, "terse", Role::Student);

    let mut payload = complaint_payload("no");
    payload.details = "bad".into();
    let err = core.submit_complaint(Some(&student), &payload).unwrap_err();
    assert!(matches!(err, CoreError::Validation(ref v) if v[0].field == "details"));
}

#[test]
fn status_update_is_admin_only_and_idempotent() {
    let core = core();
    let student = seed_account(&core, "filer", Role::Student);
    let admin = seed_account(&core, "warden", Role::HmcAdmin);

    let complaint = core.submit_complaint(Some(&student), &complaint_payload("no")).unwrap();
    let set = |status: &str| ComplaintStatusRequest { status: status.into() };

    assert!(matches!(
        core.update_complaint_status(Some(&student), complaint.id, &set("Resolved")),
        Err(CoreError::InsufficientRole)
    ));
    assert!(matches!(
        core.update_complaint_status(None, complaint.id, &set("Resolved")),
        Err(CoreError::AuthenticationRequired)
    ));

    // any label may follow any other; re-setting is a no-op success
    core.update_complaint_status(Some(&admin), complaint.id, &set("Resolved")).unwrap();
    core.update_complaint_status(Some(&admin), complaint.id, &set("Resolved")).unwrap();

    let all = core.admin_list_complaints(Some(&admin)).unwrap();
    assert_eq!(all[0].status, ComplaintStatus::Resolved);
}

#[test]
fn unknown_status_label_rejected_and_state_unchanged() {
    let core = core();
    let student = seed_account(&core, "filer2", Role::Student);
    let admin = seed_account(&core, "warden2", Role::HmcAdmin);

    let complaint = core.submit_complaint(Some(&student), &complaint_payload("no")).unwrap();
    let err = core
        .update_complaint_status(
            Some(&admin),
            complaint.id,
            &ComplaintStatusRequest { status: "Archived".into() },
        )
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidStatus(ref label) if label == "Archived"));

    let all = core.admin_list_complaints(Some(&admin)).unwrap();
    assert_eq!(all[0].status, ComplaintStatus::Submitted);
}

#[test]
fn status_update_on_missing_complaint_is_not_found() {
    let core = core();
    let admin = seed_account(&core, "warden3", Role::HmcAdmin);
    assert!(matches!(
        core.update_complaint_status(
            Some(&admin),
            9999,
            &ComplaintStatusRequest { status: "Closed".into() },
        ),
        Err(CoreError::NotFound("complaint"))
    ));
}

// -- Events and registrations --

#[test]
fn toggle_registration_round_trips() {
    let core = core();
    let admin = seed_account(&core, "organiser", Role::HmcAdmin);
    let student = seed_account(&core, "attendee", Role::Student);

    let event = core.add_event(Some(&admin), &event_payload("Freshers Night")).unwrap();

    let first = core.toggle_event_registration(Some(&student), event.id).unwrap();
    assert_eq!(first, RegistrationState::Registered);

    let events = core.list_events(Some(&student)).unwrap();
    assert!(events.iter().any(|e| e.event.id == event.id && e.registered));

    let second = core.toggle_event_registration(Some(&student), event.id).unwrap();
    assert_eq!(second, RegistrationState::NotRegistered);

    let events = core.list_events(Some(&student)).unwrap();
    assert!(events.iter().all(|e| !e.registered));
}

#[test]
fn toggle_on_missing_event_is_not_found() {
    let core = core();
    let student = seed_account(&core, "lost", Role::Student);
    assert!(matches!(
        core.toggle_event_registration(Some(&student), 404),
        Err(CoreError::NotFound("event"))
    ));
}

#[test]
fn deleting_event_cascades_registrations() {
    let core = core();
    let admin = seed_account(&core, "organiser2", Role::HmcAdmin);
    let a = seed_account(&core, "guest-a", Role::Student);
    let b = seed_account(&core, "guest-b", Role::Student);

    let event = core.add_event(Some(&admin), &event_payload("Hostel Day")).unwrap();
    core.toggle_event_registration(Some(&a), event.id).unwrap();
    core.toggle_event_registration(Some(&b), event.id).unwrap();
    assert_eq!(core.db.count_registrations_for_event(event.id).unwrap(), 2);

    core.delete_event(Some(&admin), event.id).unwrap();
    assert_eq!(core.db.count_registrations_for_event(event.id).unwrap(), 0);
    assert!(matches!(
        core.delete_event(Some(&admin), event.id),
        Err(CoreError::NotFound("event"))
    ));
}

#[test]
fn registration_listing_is_admin_only() {
    let core = core();
    let admin = seed_account(&core, "organiser3", Role::HmcAdmin);
    let student = seed_account(&core, "guest-c", Role::Student);

    let event = core.add_event(Some(&admin), &event_payload("Sports Meet")).unwrap();
    core.toggle_event_registration(Some(&student), event.id).unwrap();

    assert!(matches!(
        core.event_registrations(Some(&student), event.id),
        Err(CoreError::InsufficientRole)
    ));

    let regs = core.event_registrations(Some(&admin), event.id).unwrap();
    assert_eq!(regs.len(), 1);
    assert_eq!(regs[0].username, "guest-c");
}

#[test]
fn event_creation_is_admin_only() {
    let core = core();
    let student = seed_account(&core, "planner", Role::Student);
    assert!(matches!(
        core.add_event(Some(&student), &event_payload("Unauthorised")),
        Err(CoreError::InsufficientRole)
    ));
}

// -- Allow-list --

#[test]
fn allow_list_add_is_admin_only_and_duplicate_safe() {
    let core = core();
    let admin = seed_account(&core, "hmc-sec", Role::HmcAdmin);
    let student = seed_account(&core, "plain", Role::Student);

    let req = AllowListRequest { email: " NewComer@IITG.ac.in ".into() };
    let stored = core.add_allowed_email(Some(&admin), &req).unwrap();
    assert_eq!(stored, "newcomer@iitg.ac.in");

    assert!(matches!(
        core.add_allowed_email(Some(&admin), &req),
        Err(CoreError::AlreadyListed)
    ));
    assert!(matches!(
        core.add_allowed_email(Some(&student), &req),
        Err(CoreError::InsufficientRole)
    ));
}

// -- Public reads and dashboard --

#[test]
fn guests_get_public_reads_but_nothing_else() {
    let core = core();
    let admin = seed_account(&core, "poster", Role::HmcAdmin);
    core.add_notice(
        Some(&admin),
        &NoticeRequest { message: "Mess closed Sunday".into(), priority: "Important".into() },
    )
    .unwrap();

    assert_eq!(core.latest_notices(None, 5).unwrap().len(), 1);
    assert!(core.list_facilities(None).unwrap().is_empty());
    assert!(core.list_alumni(None).unwrap().is_empty());

    assert!(matches!(
        core.submit_complaint(None, &complaint_payload("no")),
        Err(CoreError::AuthenticationRequired)
    ));
    assert!(matches!(core.dashboard_stats(None), Err(CoreError::AuthenticationRequired)));
}

#[test]
fn dashboard_counts_track_mutations() {
    let core = core();
    let admin = seed_account(&core, "counter", Role::HmcAdmin);
    let student = seed_account(&core, "counted", Role::Student);

    core.submit_complaint(Some(&student), &complaint_payload("no")).unwrap();
    let complaint = core.submit_complaint(Some(&student), &complaint_payload("yes")).unwrap();
    core.update_complaint_status(
        Some(&admin),
        complaint.id,
        &ComplaintStatusRequest { status: "Resolved".into() },
    )
    .unwrap();
    core.add_event(Some(&admin), &event_payload("Counted Event")).unwrap();

    let stats = core.dashboard_stats(Some(&student)).unwrap();
    assert_eq!(stats.total_students, 1);
    assert_eq!(stats.total_complaints, 2);
    assert_eq!(stats.resolved_complaints, 1);
    assert_eq!(stats.pending_complaints, 1);
    assert_eq!(stats.total_events, 1);
}

// -- Admin account management --

#[test]
fn admin_can_promote_a_student() {
    let core = core();
    let admin = seed_account(&core, "head", Role::HmcAdmin);
    let student = seed_account(&core, "junior", Role::Student);

    core.admin_edit_account(
        Some(&admin),
        student.id,
        &hostelhub_types::api::AdminEditProfileRequest {
            roll_number: student.roll_number.clone(),
            room_number: student.room_number.clone(),
            studying_year: student.studying_year.clone(),
            branch: student.branch.clone(),
            role: "HMC Admin".into(),
            profile_pic_url: None,
        },
    )
    .unwrap();

    let reloaded = core.account_by_id(student.id).unwrap().unwrap();
    assert_eq!(reloaded.role, Role::HmcAdmin);
}
