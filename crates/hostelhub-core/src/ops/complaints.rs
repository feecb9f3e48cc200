use tracing::info;

use hostelhub_db::models::NewComplaint;
use hostelhub_types::api::{ComplaintCommentRequest, ComplaintRequest, ComplaintStatusRequest};
use hostelhub_types::models::{Account, Complaint, ComplaintStatus};

use crate::authz::{self, Operation};
use crate::error::{CoreError, CoreResult};
use crate::{Core, validate};

impl Core {
    /// Submit a complaint. Anonymous submissions carry no owner reference,
    /// so nothing later can tie them back to the actor.
    pub fn submit_complaint(
        &self,
        actor: Option<&Account>,
        payload: &ComplaintRequest,
    ) -> CoreResult<Complaint> {
        authz::can_perform(actor, Operation::SubmitComplaint)?;
        let account = authz::require_actor(actor)?;
        let input = validate::validate_complaint(payload)?;

        let submission_date = self.stamped_now();
        let user_id = if input.anonymous { None } else { Some(account.id) };

        let id = self.db.insert_complaint(&NewComplaint {
            category: &input.category,
            details: &input.details,
            submission_date,
            user_id,
            anonymous: input.anonymous,
        })?;

        info!("Complaint {} submitted in category {}", id, input.category);
        Ok(Complaint {
            id,
            category: input.category,
            details: input.details,
            status: ComplaintStatus::Submitted,
            submission_date,
            user_id,
            anonymous: input.anonymous,
            comments: None,
        })
    }

    /// Complaints owned by the actor. Anonymous complaints have no owner and
    /// never appear here, including the actor's own.
    pub fn my_complaints(&self, actor: Option<&Account>) -> CoreResult<Vec<Complaint>> {
        authz::can_perform(actor, Operation::ViewOwnComplaints)?;
        let account = authz::require_actor(actor)?;
        Ok(self.db.complaints_by_owner(account.id)?)
    }

    pub fn admin_list_complaints(&self, actor: Option<&Account>) -> CoreResult<Vec<Complaint>> {
        authz::can_perform(actor, Operation::ManageComplaints)?;
        Ok(self.db.list_complaints()?)
    }

    /// Set a complaint's status label. The five labels form an unordered set:
    /// any label may follow any other, and re-setting the current one is an
    /// observable no-op reported as success.
    pub fn update_complaint_status(
        &self,
        actor: Option<&Account>,
        complaint_id: i64,
        payload: &ComplaintStatusRequest,
    ) -> CoreResult<ComplaintStatus> {
        authz::can_perform(actor, Operation::ManageComplaints)?;

        let status = ComplaintStatus::from_label(&payload.status)
            .ok_or_else(|| CoreError::InvalidStatus(payload.status.clone()))?;

        let n = self.db.set_complaint_status(complaint_id, status.as_str())?;
        if n == 0 {
            return Err(CoreError::NotFound("complaint"));
        }

        info!("Complaint {} status set to {}", complaint_id, status.as_str());
        Ok(status)
    }

    pub fn update_complaint_comment(
        &self,
        actor: Option<&Account>,
        complaint_id: i64,
        payload: &ComplaintCommentRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageComplaints)?;

        let n = self.db.set_complaint_comment(complaint_id, &payload.comment)?;
        if n == 0 {
            return Err(CoreError::NotFound("complaint"));
        }
        Ok(())
    }
}
