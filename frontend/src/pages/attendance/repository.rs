use crate::api::{ApiClient, ApiError, AttendanceRecord, CreateAttendance, Employee};
use futures::{stream, StreamExt};
use std::rc::Rc;

/// Upper bound on per-employee attendance requests in flight at once.
pub const MAX_CONCURRENT_FETCHES: usize = 8;

pub const PAGE_FETCH_FALLBACK: &str = "Failed to fetch data";

/// Employees plus every attendance record that could be fetched for them in
/// the same cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterSnapshot {
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
}

impl RosterSnapshot {
    pub fn employee_name(&self, employee_id: &str) -> String {
        resolve_employee_name(&self.employees, employee_id)
    }
}

/// Display name for `employee_id`, or `"Unknown"` when the employee is no
/// longer in the list.
pub fn resolve_employee_name(employees: &[Employee], employee_id: &str) -> String {
    employees
        .iter()
        .find(|e| e.employee_id == employee_id)
        .map(|e| e.full_name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Employee list first (fails the whole load), then one attendance
    /// request per employee. Per-employee failures only drop that
    /// employee's records.
    pub async fn fetch_roster(&self) -> Result<RosterSnapshot, ApiError> {
        let employees = self
            .client
            .list_employees()
            .await
            .map_err(|err| err.with_fallback(PAGE_FETCH_FALLBACK))?;
        let attendance = fetch_attendance_for(&self.client, &employees).await;
        Ok(RosterSnapshot {
            employees,
            attendance,
        })
    }

    pub async fn mark_attendance(
        &self,
        payload: CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let record = self.client.create_attendance(&payload).await?;
        log::info!(
            "Marked {} for {} on {}",
            record.status,
            record.employee_id,
            record.date
        );
        Ok(record)
    }
}

pub async fn fetch_attendance_for(api: &ApiClient, employees: &[Employee]) -> Vec<AttendanceRecord> {
    let results: Vec<(String, Result<Vec<AttendanceRecord>, ApiError>)> =
        stream::iter(employees.iter().map(|e| e.employee_id.clone()))
            .map(|employee_id| async move {
                let result = api.list_attendance_for_employee(&employee_id).await;
                (employee_id, result)
            })
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

    let mut merged = Vec::new();
    let mut failures = 0usize;
    for (employee_id, result) in results {
        match result {
            Ok(records) => merged.extend(records),
            Err(err) => {
                failures += 1;
                log::warn!("No attendance for {}: {}", employee_id, err);
            }
        }
    }
    log::debug!(
        "Fetched {} attendance records for {} employees ({} failed)",
        merged.len(),
        employees.len(),
        failures
    );
    merged
}
