use crate::{
    api::{ApiClient, ApiError},
    pages::attendance::repository::{AttendanceRepository, RosterSnapshot},
};
use std::rc::Rc;

/// The dashboard loads the same roster as the attendance page and derives
/// everything else locally.
#[derive(Clone)]
pub struct DashboardRepository {
    roster: AttendanceRepository,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            roster: AttendanceRepository::new_with_client(client),
        }
    }

    pub async fn fetch_snapshot(&self) -> Result<RosterSnapshot, ApiError> {
        self.roster.fetch_roster().await
    }
}
