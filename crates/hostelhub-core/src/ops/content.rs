//! Admin-managed content: announcements, notices, facilities, achievements,
//! alumni. All straight-line create/update/delete with shared reads.

use chrono::Utc;
use tracing::info;

use hostelhub_types::api::{
    AchievementRequest, AlumniRequest, AnnouncementRequest, FacilityRequest, NoticeRequest,
};
use hostelhub_types::models::{
    Account, Achievement, Alumni, Announcement, Facility, Notice,
};

use crate::authz::{self, Operation};
use crate::error::{CoreError, CoreResult};
use crate::{Core, validate};

impl Core {
    // -- Announcements --

    pub fn recent_announcements(
        &self,
        actor: Option<&Account>,
        limit: u32,
    ) -> CoreResult<Vec<Announcement>> {
        authz::can_perform(actor, Operation::ViewDashboard)?;
        Ok(self.db.recent_announcements(limit)?)
    }

    /// Announcements always carry their author; there is no anonymous path.
    pub fn add_announcement(
        &self,
        actor: Option<&Account>,
        payload: &AnnouncementRequest,
    ) -> CoreResult<Announcement> {
        authz::can_perform(actor, Operation::ManageAnnouncements)?;
        let account = authz::require_actor(actor)?;
        validate::validate_announcement(payload)?;

        let date_posted = self.stamped_now();
        let id =
            self.db
                .insert_announcement(&payload.title, &payload.content, account.id, date_posted)?;

        info!("Announcement {} posted by {}", id, account.username);
        Ok(Announcement {
            id,
            title: payload.title.clone(),
            content: payload.content.clone(),
            date_posted,
            user_id: account.id,
            author_username: account.username.clone(),
        })
    }

    pub fn edit_announcement(
        &self,
        actor: Option<&Account>,
        id: i64,
        payload: &AnnouncementRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageAnnouncements)?;
        validate::validate_announcement(payload)?;

        if self.db.update_announcement(id, &payload.title, &payload.content)? == 0 {
            return Err(CoreError::NotFound("announcement"));
        }
        Ok(())
    }

    pub fn delete_announcement(&self, actor: Option<&Account>, id: i64) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageAnnouncements)?;
        if self.db.delete_announcement(id)? == 0 {
            return Err(CoreError::NotFound("announcement"));
        }
        Ok(())
    }

    // -- Notices --

    pub fn latest_notices(&self, actor: Option<&Account>, limit: u32) -> CoreResult<Vec<Notice>> {
        authz::can_perform(actor, Operation::ViewHome)?;
        Ok(self.db.latest_notices(limit)?)
    }

    pub fn add_notice(&self, actor: Option<&Account>, payload: &NoticeRequest) -> CoreResult<Notice> {
        authz::can_perform(actor, Operation::ManageNotices)?;
        validate::validate_notice(payload)?;

        let created_at = Utc::now();
        let id = self.db.insert_notice(payload, created_at)?;
        Ok(Notice {
            id,
            message: payload.message.clone(),
            priority: payload.priority.clone(),
            created_at,
        })
    }

    pub fn edit_notice(
        &self,
        actor: Option<&Account>,
        id: i64,
        payload: &NoticeRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageNotices)?;
        validate::validate_notice(payload)?;

        if self.db.update_notice(id, payload)? == 0 {
            return Err(CoreError::NotFound("notice"));
        }
        Ok(())
    }

    pub fn delete_notice(&self, actor: Option<&Account>, id: i64) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageNotices)?;
        if self.db.delete_notice(id)? == 0 {
            return Err(CoreError::NotFound("notice"));
        }
        Ok(())
    }

    // -- Facilities --

    pub fn list_facilities(&self, actor: Option<&Account>) -> CoreResult<Vec<Facility>> {
        authz::can_perform(actor, Operation::ViewFacilities)?;
        Ok(self.db.list_facilities()?)
    }

    pub fn add_facility(
        &self,
        actor: Option<&Account>,
        payload: &FacilityRequest,
    ) -> CoreResult<Facility> {
        authz::can_perform(actor, Operation::ManageFacilities)?;
        validate::validate_facility(payload)?;

        let created_at = Utc::now();
        let id = self.db.insert_facility(payload, created_at)?;
        Ok(Facility {
            id,
            name: payload.name.clone(),
            description: payload.description.clone(),
            location: payload.location.clone(),
            availability: payload.availability.clone(),
            image_url: payload.image_url.clone(),
            created_at,
        })
    }

    pub fn edit_facility(
        &self,
        actor: Option<&Account>,
        id: i64,
        payload: &FacilityRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageFacilities)?;
        validate::validate_facility(payload)?;

        if self.db.update_facility(id, payload)? == 0 {
            return Err(CoreError::NotFound("facility"));
        }
        Ok(())
    }

    pub fn delete_facility(&self, actor: Option<&Account>, id: i64) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageFacilities)?;
        if self.db.delete_facility(id)? == 0 {
            return Err(CoreError::NotFound("facility"));
        }
        Ok(())
    }

    // -- Achievements --

    pub fn list_achievements(&self, actor: Option<&Account>) -> CoreResult<Vec<Achievement>> {
        authz::can_perform(actor, Operation::ViewAchievements)?;
        Ok(self.db.list_achievements()?)
    }

    pub fn add_achievement(
        &self,
        actor: Option<&Account>,
        payload: &AchievementRequest,
    ) -> CoreResult<Achievement> {
        authz::can_perform(actor, Operation::ManageAchievements)?;
        validate::validate_achievement(payload)?;

        let created_at = Utc::now();
        let id = self.db.insert_achievement(payload, created_at)?;
        Ok(Achievement {
            id,
            title: payload.title.clone(),
            description: payload.description.clone(),
            year: payload.year.clone(),
            category: payload.category.clone(),
            image_url: payload.image_url.clone(),
            created_at,
        })
    }

    pub fn edit_achievement(
        &self,
        actor: Option<&Account>,
        id: i64,
        payload: &AchievementRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageAchievements)?;
        validate::validate_achievement(payload)?;

        if self.db.update_achievement(id, payload)? == 0 {
            return Err(CoreError::NotFound("achievement"));
        }
        Ok(())
    }

    pub fn delete_achievement(&self, actor: Option<&Account>, id: i64) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageAchievements)?;
        if self.db.delete_achievement(id)? == 0 {
            return Err(CoreError::NotFound("achievement"));
        }
        Ok(())
    }

    // -- Alumni --

    pub fn list_alumni(&self, actor: Option<&Account>) -> CoreResult<Vec<Alumni>> {
        authz::can_perform(actor, Operation::ViewAlumni)?;
        Ok(self.db.list_alumni()?)
    }

    pub fn add_alumni(&self, actor: Option<&Account>, payload: &AlumniRequest) -> CoreResult<Alumni> {
        authz::can_perform(actor, Operation::ManageAlumni)?;
        validate::validate_alumni(payload)?;

        let created_at = Utc::now();
        let id = self.db.insert_alumni(payload, created_at)?;
        Ok(Alumni {
            id,
            name: payload.name.clone(),
            batch_year: payload.batch_year.clone(),
            current_position: payload.current_position.clone(),
            company: payload.company.clone(),
            linkedin: payload.linkedin.clone(),
            email: payload.email.clone(),
            achievements: payload.achievements.clone(),
            image_url: payload.image_url.clone(),
            created_at,
        })
    }

    pub fn edit_alumni(
        &self,
        actor: Option<&Account>,
        id: i64,
        payload: &AlumniRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageAlumni)?;
        validate::validate_alumni(payload)?;

        if self.db.update_alumni(id, payload)? == 0 {
            return Err(CoreError::NotFound("alumni"));
        }
        Ok(())
    }

    pub fn delete_alumni(&self, actor: Option<&Account>, id: i64) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageAlumni)?;
        if self.db.delete_alumni(id)? == 0 {
            return Err(CoreError::NotFound("alumni"));
        }
        Ok(())
    }
}
