use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee},
    pages::attendance::repository::resolve_employee_name,
    utils::table::{sort_rows, SortState},
};
use chrono::NaiveDate;
use std::collections::HashSet;

pub const RECENT_ATTENDANCE_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_departments: usize,
    pub total_attendance_records: usize,
    pub present_today: usize,
    pub absent_today: usize,
    /// Percent of all records marked present, one decimal.
    pub attendance_rate: f64,
}

pub fn compute_stats(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    today: NaiveDate,
) -> DashboardStats {
    let departments: HashSet<&str> = employees.iter().map(|e| e.department.as_str()).collect();
    let count_today = |status: AttendanceStatus| {
        attendance
            .iter()
            .filter(|r| r.date == today && r.status == status)
            .count()
    };
    DashboardStats {
        total_employees: employees.len(),
        total_departments: departments.len(),
        total_attendance_records: attendance.len(),
        present_today: count_today(AttendanceStatus::Present),
        absent_today: count_today(AttendanceStatus::Absent),
        attendance_rate: attendance_rate(attendance),
    }
}

pub fn attendance_rate(attendance: &[AttendanceRecord]) -> f64 {
    if attendance.is_empty() {
        return 0.0;
    }
    let present = attendance
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count();
    let rate = present as f64 / attendance.len() as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentSortKey {
    Count,
}

/// Employees per department, in first-seen order.
pub fn department_breakdown(employees: &[Employee]) -> Vec<DepartmentCount> {
    let mut breakdown: Vec<DepartmentCount> = Vec::new();
    for employee in employees {
        match breakdown
            .iter_mut()
            .find(|entry| entry.department == employee.department)
        {
            Some(entry) => entry.count += 1,
            None => breakdown.push(DepartmentCount {
                department: employee.department.clone(),
                count: 1,
            }),
        }
    }
    breakdown
}

pub fn sort_breakdown(
    mut breakdown: Vec<DepartmentCount>,
    sort: Option<SortState<DepartmentSortKey>>,
) -> Vec<DepartmentCount> {
    sort_rows(&mut breakdown, sort, |key, a, b| match key {
        DepartmentSortKey::Count => a.count.cmp(&b.count),
    });
    breakdown
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentAttendance {
    pub id: i64,
    pub date: NaiveDate,
    pub employee_name: String,
    pub status: AttendanceStatus,
}

/// Newest [`RECENT_ATTENDANCE_LIMIT`] records; same-day records keep their
/// input order.
pub fn recent_attendance(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
) -> Vec<RecentAttendance> {
    let mut sorted: Vec<&AttendanceRecord> = attendance.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
        .into_iter()
        .take(RECENT_ATTENDANCE_LIMIT)
        .map(|record| RecentAttendance {
            id: record.id,
            date: record.date,
            employee_name: resolve_employee_name(employees, &record.employee_id),
            status: record.status,
        })
        .collect()
}
