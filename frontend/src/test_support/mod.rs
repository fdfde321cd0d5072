#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::NaiveDate;

    pub fn employee(employee_id: &str, full_name: &str, department: &str) -> Employee {
        Employee {
            id: 0,
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            department: department.into(),
            created_at: None,
        }
    }

    pub fn attendance(
        id: i64,
        employee_id: &str,
        date: &str,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: employee_id.into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date"),
            status,
            created_at: None,
        }
    }
}
