pub mod authz;
pub mod credentials;
pub mod error;
pub mod ops;
pub mod validate;

pub use error::{CoreError, CoreResult};

use chrono::{DateTime, Duration, Utc};
use hostelhub_db::Database;

/// Policy knobs the engine consults. Values that look like secrets
/// ("UMIAM-HMC") or institution facts ("@iitg.ac.in") live here so they can
/// be rotated without touching logic.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Required suffix on registration emails, matched case-insensitively.
    pub email_domain: String,
    /// Shared secret an applicant must present to enroll as HMC Admin.
    pub admin_code: String,
    /// Minutes added to submission/posting timestamps (wall-clock display
    /// offset; 330 = IST in the reference deployment).
    pub clock_offset_min: i64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            email_domain: "@iitg.ac.in".to_string(),
            admin_code: "UMIAM-HMC".to_string(),
            clock_offset_min: 330,
        }
    }
}

/// The entity lifecycle manager. Every operation takes an explicit
/// `actor: Option<&Account>` and runs authorization, then validation, then
/// the store mutation; a denial short-circuits before the store is touched.
pub struct Core {
    pub db: Database,
    pub config: CoreConfig,
}

impl Core {
    pub fn new(db: Database, config: CoreConfig) -> Self {
        Self { db, config }
    }

    /// Now, shifted by the configured display offset. Applied when stamping
    /// `submission_date` and `date_posted`.
    pub(crate) fn stamped_now(&self) -> DateTime<Utc> {
        Utc::now() + Duration::minutes(self.config.clock_offset_min)
    }
}
