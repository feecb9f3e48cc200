use tracing::info;

use hostelhub_db::is_unique_violation;
use hostelhub_db::models::{AdminProfileFields, NewUser, ProfileFields};
use hostelhub_types::api::{
    AdminEditProfileRequest, AllowListRequest, ProfileRequest, RegisterRequest,
};
use hostelhub_types::models::Account;

use crate::authz::{self, Operation};
use crate::error::{CoreError, CoreResult};
use crate::{Core, credentials, validate};

impl Core {
    /// Create an account from a registration payload. Open to anyone; the
    /// gatekeeping is the validation rule set (domain, allow-list,
    /// uniqueness, admin code). The store's unique constraints back up the
    /// validator under concurrent identical submissions.
    pub fn register_account(&self, payload: &RegisterRequest) -> CoreResult<Account> {
        let reg = validate::validate_registration(payload, &self.config, &self.db)?;
        let password_hash = credentials::hash_secret(&reg.password)?;

        let now = chrono::Utc::now();
        let new_user = NewUser {
            username: &reg.username,
            email: &reg.email,
            password_hash: &password_hash,
            role: reg.role.as_str(),
            name: &reg.name,
            roll_number: &reg.roll_number,
            room_number: &reg.room_number,
            studying_year: &reg.studying_year,
            branch: &reg.branch,
            created_at: now,
        };

        let id = match self.db.create_user(&new_user) {
            Ok(id) => id,
            // lost a check-then-insert race on username/email
            Err(e) if is_unique_violation(&e) => {
                return Err(CoreError::DuplicateIdentity("username or email"));
            }
            Err(e) => return Err(e.into()),
        };

        info!("Registered account {} ({})", reg.username, reg.role.as_str());
        Ok(Account {
            id,
            username: reg.username,
            email: reg.email,
            role: reg.role,
            name: reg.name,
            roll_number: reg.roll_number,
            room_number: reg.room_number,
            studying_year: reg.studying_year,
            branch: reg.branch,
            profile_pic_url: None,
            created_at: now,
        })
    }

    /// Verify a credential pair. The caller learns nothing about which half
    /// was wrong.
    pub fn authenticate(&self, email: &str, password: &str) -> CoreResult<Account> {
        let row = self
            .db
            .user_by_email(email)?
            .ok_or(CoreError::InvalidCredentials)?;

        if !credentials::verify_secret(password, &row.password) {
            return Err(CoreError::InvalidCredentials);
        }

        Ok(row.into_account())
    }

    /// Resolve the actor behind a session token. Used by the delivery layer
    /// on every authenticated request so role changes apply immediately.
    pub fn account_by_id(&self, id: i64) -> CoreResult<Option<Account>> {
        Ok(self.db.user_by_id(id)?.map(|row| row.into_account()))
    }

    pub fn update_own_profile(
        &self,
        actor: Option<&Account>,
        payload: &ProfileRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::EditOwnProfile)?;
        let account = authz::require_actor(actor)?;
        validate::validate_profile(payload)?;

        let n = self.db.update_profile(
            account.id,
            &ProfileFields {
                name: &payload.name,
                roll_number: &payload.roll_number,
                room_number: &payload.room_number,
                studying_year: &payload.studying_year,
                branch: &payload.branch,
                profile_pic_url: payload.profile_pic_url.as_deref(),
            },
        )?;
        if n == 0 {
            return Err(CoreError::NotFound("account"));
        }
        Ok(())
    }

    pub fn admin_list_accounts(&self, actor: Option<&Account>) -> CoreResult<Vec<Account>> {
        authz::can_perform(actor, Operation::ManageUsers)?;
        Ok(self.db.list_users()?)
    }

    /// Admin edit of any account, including role changes. The only path by
    /// which a role moves after registration.
    pub fn admin_edit_account(
        &self,
        actor: Option<&Account>,
        user_id: i64,
        payload: &AdminEditProfileRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageUsers)?;
        let role = validate::validate_admin_profile(payload)?;

        let n = self.db.admin_update_user(
            user_id,
            &AdminProfileFields {
                roll_number: &payload.roll_number,
                room_number: &payload.room_number,
                studying_year: &payload.studying_year,
                branch: &payload.branch,
                role: role.as_str(),
                profile_pic_url: payload.profile_pic_url.as_deref(),
            },
        )?;
        if n == 0 {
            return Err(CoreError::NotFound("account"));
        }
        Ok(())
    }

    /// Put an email on the registration allow-list. A duplicate insert
    /// (including a lost race) reports `AlreadyListed`.
    pub fn add_allowed_email(
        &self,
        actor: Option<&Account>,
        payload: &AllowListRequest,
    ) -> CoreResult<String> {
        authz::can_perform(actor, Operation::ManageAllowList)?;
        let email = validate::validate_allow_email(payload)?;

        match self.db.allow_list_add(&email) {
            Ok(()) => {
                info!("Allow-listed {}", email);
                Ok(email)
            }
            Err(e) if is_unique_violation(&e) => Err(CoreError::AlreadyListed),
            Err(e) => Err(e.into()),
        }
    }
}
