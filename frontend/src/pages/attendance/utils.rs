use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::{
    api::{AttendanceRecord, AttendanceStatus, CreateAttendance, Employee},
    pages::attendance::repository::{resolve_employee_name, RosterSnapshot},
    utils::{
        table::{sort_rows, SortState},
        time::{format_iso_date, parse_iso_date},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFormState {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date: format_iso_date(today),
            status: AttendanceStatus::Present,
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn to_request(&self) -> Result<CreateAttendance, String> {
        let employee_id = self.employee_id.trim();
        if employee_id.is_empty() {
            return Err("Please select an employee".into());
        }
        if self.date.trim().is_empty() {
            return Err("Please select a date".into());
        }
        let date = parse_iso_date(&self.date).ok_or("Date must be in YYYY-MM-DD format")?;
        Ok(CreateAttendance {
            employee_id: employee_id.to_string(),
            date,
            status: self.status,
        })
    }
}

pub fn employee_option_label(employee: &Employee) -> String {
    format!("{} - {}", employee.employee_id, employee.full_name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceSortKey {
    EmployeeId,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub record: AttendanceRecord,
    pub employee_name: String,
}

/// Records for the selected employee, or all of them.
pub fn filter_by_employee<'a>(
    records: &'a [AttendanceRecord],
    employee_id: Option<&str>,
) -> Vec<&'a AttendanceRecord> {
    records
        .iter()
        .filter(|r| employee_id.map_or(true, |id| r.employee_id == id))
        .collect()
}

/// Empty `statuses` means no status filter.
pub fn matches_status(record: &AttendanceRecord, statuses: &[AttendanceStatus]) -> bool {
    statuses.is_empty() || statuses.contains(&record.status)
}

fn compare_rows(key: &AttendanceSortKey, a: &AttendanceRow, b: &AttendanceRow) -> Ordering {
    match key {
        AttendanceSortKey::EmployeeId => a.record.employee_id.cmp(&b.record.employee_id),
        AttendanceSortKey::Date => a.record.date.cmp(&b.record.date),
    }
}

/// Employee filter, then status filter, then sort. Pagination is applied by
/// the caller on the returned rows.
pub fn build_rows(
    roster: &RosterSnapshot,
    employee_id: Option<&str>,
    statuses: &[AttendanceStatus],
    sort: Option<SortState<AttendanceSortKey>>,
) -> Vec<AttendanceRow> {
    let mut rows: Vec<AttendanceRow> = filter_by_employee(&roster.attendance, employee_id)
        .into_iter()
        .filter(|r| matches_status(r, statuses))
        .map(|record| AttendanceRow {
            employee_name: resolve_employee_name(&roster.employees, &record.employee_id),
            record: record.clone(),
        })
        .collect();
    sort_rows(&mut rows, sort, compare_rows);
    rows
}

pub fn toggle_status(statuses: &mut Vec<AttendanceStatus>, status: AttendanceStatus) {
    if let Some(pos) = statuses.iter().position(|s| *s == status) {
        statuses.remove(pos);
    } else {
        statuses.push(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::table::SortDirection;

    fn employee(employee_id: &str, name: &str) -> Employee {
        Employee {
            id: 0,
            employee_id: employee_id.into(),
            full_name: name.into(),
            email: format!("{}@example.com", employee_id),
            department: "Eng".into(),
            created_at: None,
        }
    }

    fn record(id: i64, employee_id: &str, date: (i32, u32, u32), status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: employee_id.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status,
            created_at: None,
        }
    }

    fn roster() -> RosterSnapshot {
        RosterSnapshot {
            employees: vec![employee("EMP002", "Bob"), employee("EMP003", "Cara")],
            attendance: vec![
                record(1, "EMP003", (2024, 1, 2), AttendanceStatus::Present),
                record(2, "EMP001", (2024, 1, 3), AttendanceStatus::Absent),
                record(3, "EMP002", (2024, 1, 1), AttendanceStatus::Present),
                record(4, "EMP002", (2024, 1, 4), AttendanceStatus::Absent),
            ],
        }
    }

    #[test]
    fn form_defaults_to_today_and_present() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let form = AttendanceFormState::new(today);
        assert_eq!(form.date, "2024-03-09");
        assert_eq!(form.status, AttendanceStatus::Present);
        assert!(form.employee_id.is_empty());
    }

    #[test]
    fn form_requires_employee_and_valid_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let mut form = AttendanceFormState::new(today);
        assert_eq!(form.to_request().unwrap_err(), "Please select an employee");

        form.employee_id = "EMP001".into();
        form.date = String::new();
        assert_eq!(form.to_request().unwrap_err(), "Please select a date");

        form.date = "2024-13-01".into();
        assert!(form.to_request().is_err());

        form.date = "2024-03-01".into();
        form.status = AttendanceStatus::Absent;
        let request = form.to_request().unwrap();
        assert_eq!(request.employee_id, "EMP001");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(request.status, AttendanceStatus::Absent);

        form.reset(today);
        assert_eq!(form, AttendanceFormState::new(today));
    }

    #[test]
    fn rows_resolve_missing_employees_to_unknown() {
        let rows = build_rows(&roster(), None, &[], None);
        assert_eq!(rows.len(), 4);
        let orphan = rows.iter().find(|r| r.record.employee_id == "EMP001").unwrap();
        assert_eq!(orphan.employee_name, "Unknown");
        let known = rows.iter().find(|r| r.record.employee_id == "EMP003").unwrap();
        assert_eq!(known.employee_name, "Cara");
    }

    #[test]
    fn employee_filter_is_exact_match() {
        let data = roster();
        assert_eq!(filter_by_employee(&data.attendance, Some("EMP002")).len(), 2);
        assert_eq!(filter_by_employee(&data.attendance, Some("EMP00")).len(), 0);
        assert_eq!(filter_by_employee(&data.attendance, None).len(), 4);
    }

    #[test]
    fn status_filter_applies_after_employee_filter() {
        let rows = build_rows(&roster(), Some("EMP002"), &[AttendanceStatus::Absent], None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.id, 4);

        let both = build_rows(
            &roster(),
            None,
            &[AttendanceStatus::Present, AttendanceStatus::Absent],
            None,
        );
        assert_eq!(both.len(), 4);
    }

    #[test]
    fn sorts_by_date_and_employee_id() {
        let by_date = build_rows(
            &roster(),
            None,
            &[],
            Some(SortState {
                key: AttendanceSortKey::Date,
                direction: SortDirection::Descending,
            }),
        );
        let ids: Vec<i64> = by_date.iter().map(|r| r.record.id).collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);

        let by_employee = build_rows(
            &roster(),
            None,
            &[],
            Some(SortState {
                key: AttendanceSortKey::EmployeeId,
                direction: SortDirection::Ascending,
            }),
        );
        let keys: Vec<&str> = by_employee
            .iter()
            .map(|r| r.record.employee_id.as_str())
            .collect();
        assert_eq!(keys, vec!["EMP001", "EMP002", "EMP002", "EMP003"]);
        // stable: EMP002 rows keep fetch order
        assert_eq!(by_employee[1].record.id, 3);
    }

    #[test]
    fn toggle_status_adds_and_removes() {
        let mut statuses = Vec::new();
        toggle_status(&mut statuses, AttendanceStatus::Present);
        assert_eq!(statuses, vec![AttendanceStatus::Present]);
        toggle_status(&mut statuses, AttendanceStatus::Present);
        assert!(statuses.is_empty());
    }

    #[test]
    fn option_label_joins_key_and_name() {
        assert_eq!(employee_option_label(&employee("EMP002", "Bob")), "EMP002 - Bob");
    }
}
