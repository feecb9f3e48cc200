use std::collections::HashSet;

use chrono::Utc;
use tracing::info;

use hostelhub_db::is_unique_violation;
use hostelhub_types::api::EventRequest;
use hostelhub_types::models::{
    Account, Event, EventRegistration, EventWithRegistration, RegistrationState,
};

use crate::authz::{self, Operation};
use crate::error::{CoreError, CoreResult};
use crate::{Core, validate};

impl Core {
    /// Upcoming and past events in start order, each annotated with whether
    /// the actor holds a registration.
    pub fn list_events(&self, actor: Option<&Account>) -> CoreResult<Vec<EventWithRegistration>> {
        authz::can_perform(actor, Operation::ViewEvents)?;
        let account = authz::require_actor(actor)?;

        let events = self.db.list_events()?;
        let mine: HashSet<i64> = self.db.registered_event_ids(account.id)?.into_iter().collect();

        Ok(events
            .into_iter()
            .map(|event| {
                let registered = mine.contains(&event.id);
                EventWithRegistration { event, registered }
            })
            .collect())
    }

    pub fn add_event(&self, actor: Option<&Account>, payload: &EventRequest) -> CoreResult<Event> {
        authz::can_perform(actor, Operation::ManageEvents)?;
        let input = validate::validate_event(payload)?;

        let created_at = Utc::now();
        let id = self.db.insert_event(
            &input.title,
            &input.description,
            &input.location,
            input.start,
            input.end,
            input.image_url.as_deref(),
            created_at,
        )?;

        info!("Event {} '{}' created", id, input.title);
        Ok(Event {
            id,
            title: input.title,
            description: input.description,
            location: input.location,
            start_datetime: input.start,
            end_datetime: input.end,
            image_url: input.image_url,
            created_at,
        })
    }

    pub fn edit_event(
        &self,
        actor: Option<&Account>,
        event_id: i64,
        payload: &EventRequest,
    ) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageEvents)?;
        let input = validate::validate_event(payload)?;

        let n = self.db.update_event(
            event_id,
            &input.title,
            &input.description,
            &input.location,
            input.start,
            input.end,
            input.image_url.as_deref(),
        )?;
        if n == 0 {
            return Err(CoreError::NotFound("event"));
        }
        Ok(())
    }

    /// Delete an event together with its registrations. The cascade runs in
    /// one transaction inside the store layer.
    pub fn delete_event(&self, actor: Option<&Account>, event_id: i64) -> CoreResult<()> {
        authz::can_perform(actor, Operation::ManageEvents)?;

        if !self.db.delete_event_cascade(event_id)? {
            return Err(CoreError::NotFound("event"));
        }
        info!("Event {} deleted with its registrations", event_id);
        Ok(())
    }

    /// Flip the actor's registration for an event. Present -> removed,
    /// absent -> created. A lost insert race against ourselves means the row
    /// already exists, which *is* the desired state.
    pub fn toggle_event_registration(
        &self,
        actor: Option<&Account>,
        event_id: i64,
    ) -> CoreResult<RegistrationState> {
        authz::can_perform(actor, Operation::ToggleEventRegistration)?;
        let account = authz::require_actor(actor)?;

        if self.db.event_by_id(event_id)?.is_none() {
            return Err(CoreError::NotFound("event"));
        }

        match self.db.toggle_registration(event_id, account.id, Utc::now()) {
            Ok(true) => Ok(RegistrationState::Registered),
            Ok(false) => Ok(RegistrationState::NotRegistered),
            Err(e) if is_unique_violation(&e) => Ok(RegistrationState::Registered),
            Err(e) => Err(e.into()),
        }
    }

    pub fn event_registrations(
        &self,
        actor: Option<&Account>,
        event_id: i64,
    ) -> CoreResult<Vec<EventRegistration>> {
        authz::can_perform(actor, Operation::ViewEventRegistrations)?;

        if self.db.event_by_id(event_id)?.is_none() {
            return Err(CoreError::NotFound("event"));
        }
        Ok(self.db.registrations_for_event(event_id)?)
    }
}
