//! The authorization policy table. Consulted by every lifecycle operation
//! before validation; a denial never touches the store.

use hostelhub_types::models::{Account, Role};

use crate::error::CoreError;

/// Everything an actor can ask the core to do, grouped by required tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // Public reads
    ViewHome,
    ViewFacilities,
    ViewAchievements,
    ViewAlumni,

    // Any authenticated account
    ViewDashboard,
    ViewEvents,
    SubmitComplaint,
    ViewOwnComplaints,
    ToggleEventRegistration,
    EditOwnProfile,

    // HMC Admin only
    ManageAnnouncements,
    ManageNotices,
    ManageFacilities,
    ManageAchievements,
    ManageAlumni,
    ManageEvents,
    ManageComplaints,
    ManageUsers,
    ManageAllowList,
    ViewEventRegistrations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Public,
    Authenticated,
    Admin,
}

impl Operation {
    fn tier(self) -> Tier {
        use Operation::*;
        match self {
            ViewHome | ViewFacilities | ViewAchievements | ViewAlumni => Tier::Public,
            ViewDashboard | ViewEvents | SubmitComplaint | ViewOwnComplaints
            | ToggleEventRegistration | EditOwnProfile => Tier::Authenticated,
            ManageAnnouncements | ManageNotices | ManageFacilities | ManageAchievements
            | ManageAlumni | ManageEvents | ManageComplaints | ManageUsers | ManageAllowList
            | ViewEventRegistrations => Tier::Admin,
        }
    }
}

/// Policy precedence: unauthenticated actors get public reads only; students
/// get the authenticated tier; admins get everything.
pub fn can_perform(actor: Option<&Account>, op: Operation) -> Result<(), CoreError> {
    match (op.tier(), actor) {
        (Tier::Public, _) => Ok(()),
        (_, None) => Err(CoreError::AuthenticationRequired),
        (Tier::Authenticated, Some(_)) => Ok(()),
        (Tier::Admin, Some(account)) if account.role == Role::HmcAdmin => Ok(()),
        (Tier::Admin, Some(_)) => Err(CoreError::InsufficientRole),
    }
}

/// Ownership gate for student-scoped targets (complaints, registrations).
/// Distinct from the role denial; admins bypass it. An anonymous record
/// (owner None) belongs to nobody, so a student can never claim it.
pub fn check_owner(actor: &Account, owner_id: Option<i64>) -> Result<(), CoreError> {
    if actor.role == Role::HmcAdmin {
        return Ok(());
    }
    match owner_id {
        Some(id) if id == actor.id => Ok(()),
        _ => Err(CoreError::NotOwner),
    }
}

/// Narrow an optional actor after `can_perform` has passed for a
/// non-public operation.
pub fn require_actor<'a>(actor: Option<&'a Account>) -> Result<&'a Account, CoreError> {
    actor.ok_or(CoreError::AuthenticationRequired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account(id: i64, role: Role) -> Account {
        Account {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@iitg.ac.in"),
            role,
            name: "Test User".into(),
            roll_number: "210102000".into(),
            room_number: "A-101".into(),
            studying_year: "2nd Year".into(),
            branch: "CSE".into(),
            profile_pic_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn guest_gets_public_reads_only() {
        assert!(can_perform(None, Operation::ViewFacilities).is_ok());
        assert!(can_perform(None, Operation::ViewAlumni).is_ok());
        assert!(matches!(
            can_perform(None, Operation::SubmitComplaint),
            Err(CoreError::AuthenticationRequired)
        ));
        assert!(matches!(
            can_perform(None, Operation::ManageNotices),
            Err(CoreError::AuthenticationRequired)
        ));
    }

    #[test]
    fn student_denied_admin_tier_with_role_error() {
        let student = account(1, Role::Student);
        assert!(can_perform(Some(&student), Operation::ViewEvents).is_ok());
        assert!(can_perform(Some(&student), Operation::SubmitComplaint).is_ok());
        assert!(matches!(
            can_perform(Some(&student), Operation::ManageComplaints),
            Err(CoreError::InsufficientRole)
        ));
        assert!(matches!(
            can_perform(Some(&student), Operation::ManageAllowList),
            Err(CoreError::InsufficientRole)
        ));
    }

    #[test]
    fn admin_allowed_everything() {
        let admin = account(2, Role::HmcAdmin);
        assert!(can_perform(Some(&admin), Operation::ViewHome).is_ok());
        assert!(can_perform(Some(&admin), Operation::ManageUsers).is_ok());
        assert!(can_perform(Some(&admin), Operation::ViewEventRegistrations).is_ok());
    }

    #[test]
    fn ownership_is_distinct_from_role() {
        let student = account(1, Role::Student);
        assert!(check_owner(&student, Some(1)).is_ok());
        assert!(matches!(
            check_owner(&student, Some(2)),
            Err(CoreError::NotOwner)
        ));
        // anonymous records belong to nobody
        assert!(matches!(check_owner(&student, None), Err(CoreError::NotOwner)));

        let admin = account(3, Role::HmcAdmin);
        assert!(check_owner(&admin, Some(1)).is_ok());
        assert!(check_owner(&admin, None).is_ok());
    }
}
