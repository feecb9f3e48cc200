//! Lifecycle operations, one module per entity family. Every operation
//! follows the same sequence: authorize, validate, mutate, stamp.

mod accounts;
mod complaints;
mod content;
mod events;

use hostelhub_types::models::{Account, DashboardStats};

use crate::Core;
use crate::authz::{self, Operation};
use crate::error::CoreResult;

impl Core {
    /// Overview counters shown to every authenticated account.
    pub fn dashboard_stats(&self, actor: Option<&Account>) -> CoreResult<DashboardStats> {
        authz::can_perform(actor, Operation::ViewDashboard)?;
        Ok(self.db.dashboard_stats()?)
    }
}
