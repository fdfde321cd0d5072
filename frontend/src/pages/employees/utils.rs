use crate::{
    api::{CreateEmployee, Employee},
    utils::table::{sort_rows, SortState},
};
use std::cmp::Ordering;

pub const EMPLOYEE_ID_MAX_CHARS: usize = 50;
pub const FULL_NAME_MAX_CHARS: usize = 255;
pub const DEPARTMENT_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trimmed payload, or the message for the first rule that fails.
    pub fn to_request(&self) -> Result<CreateEmployee, String> {
        let employee_id = self.employee_id.trim();
        let full_name = self.full_name.trim();
        let email = self.email.trim();
        let department = self.department.trim();

        if employee_id.is_empty() {
            return Err("Please enter employee ID".into());
        }
        if employee_id.chars().count() > EMPLOYEE_ID_MAX_CHARS {
            return Err("Employee ID must be less than 50 characters".into());
        }
        if full_name.is_empty() {
            return Err("Please enter full name".into());
        }
        if full_name.chars().count() > FULL_NAME_MAX_CHARS {
            return Err("Name must be less than 255 characters".into());
        }
        if email.is_empty() {
            return Err("Please enter email address".into());
        }
        if !is_valid_email(email) {
            return Err("Please enter a valid email address".into());
        }
        if department.is_empty() {
            return Err("Please enter department".into());
        }
        if department.chars().count() > DEPARTMENT_MAX_CHARS {
            return Err("Department must be less than 100 characters".into());
        }

        Ok(CreateEmployee {
            employee_id: employee_id.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        })
    }
}

/// `local@domain.tld`: one `@`, no whitespace, dotted domain without empty
/// labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSortKey {
    EmployeeId,
    FullName,
    Department,
}

fn compare_employees(key: &EmployeeSortKey, a: &Employee, b: &Employee) -> Ordering {
    match key {
        EmployeeSortKey::EmployeeId => a.employee_id.cmp(&b.employee_id),
        EmployeeSortKey::FullName => a.full_name.cmp(&b.full_name),
        EmployeeSortKey::Department => a.department.cmp(&b.department),
    }
}

pub fn sort_employees(
    employees: &[Employee],
    sort: Option<SortState<EmployeeSortKey>>,
) -> Vec<Employee> {
    let mut rows = employees.to_vec();
    sort_rows(&mut rows, sort, compare_employees);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::table::SortDirection;

    fn filled() -> EmployeeFormState {
        EmployeeFormState {
            employee_id: " EMP001 ".into(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            department: "Engineering".into(),
        }
    }

    #[test]
    fn valid_form_produces_trimmed_request() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.employee_id, "EMP001");
        assert_eq!(request.department, "Engineering");
    }

    #[test]
    fn every_field_is_required() {
        let mut form = filled();
        form.employee_id = "   ".into();
        assert_eq!(form.to_request().unwrap_err(), "Please enter employee ID");

        let mut form = filled();
        form.full_name.clear();
        assert_eq!(form.to_request().unwrap_err(), "Please enter full name");

        let mut form = filled();
        form.email.clear();
        assert_eq!(form.to_request().unwrap_err(), "Please enter email address");

        let mut form = filled();
        form.department.clear();
        assert_eq!(form.to_request().unwrap_err(), "Please enter department");
    }

    #[test]
    fn length_limits_count_characters() {
        let mut form = filled();
        form.employee_id = "E".repeat(EMPLOYEE_ID_MAX_CHARS);
        assert!(form.to_request().is_ok());
        form.employee_id = "E".repeat(EMPLOYEE_ID_MAX_CHARS + 1);
        assert_eq!(
            form.to_request().unwrap_err(),
            "Employee ID must be less than 50 characters"
        );

        let mut form = filled();
        form.full_name = "é".repeat(FULL_NAME_MAX_CHARS);
        assert!(form.to_request().is_ok());
        form.full_name.push('é');
        assert!(form.to_request().is_err());

        let mut form = filled();
        form.department = "D".repeat(DEPARTMENT_MAX_CHARS + 1);
        assert_eq!(
            form.to_request().unwrap_err(),
            "Department must be less than 100 characters"
        );
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("john.doe@company.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("john.doe"));
        assert!(!is_valid_email("@company.com"));
        assert!(!is_valid_email("john@company"));
        assert!(!is_valid_email("john@company."));
        assert!(!is_valid_email("john@@company.com"));
        assert!(!is_valid_email("john doe@company.com"));

        let mut form = filled();
        form.email = "not-an-email".into();
        assert_eq!(
            form.to_request().unwrap_err(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, EmployeeFormState::default());
    }

    #[test]
    fn sorts_by_each_column() {
        let make = |id: &str, name: &str, dept: &str| Employee {
            id: 0,
            employee_id: id.into(),
            full_name: name.into(),
            email: format!("{}@example.com", id),
            department: dept.into(),
            created_at: None,
        };
        let employees = vec![
            make("EMP002", "Bob", "Ops"),
            make("EMP001", "Cara", "Eng"),
            make("EMP003", "Ada", "HR"),
        ];
        let keys = |rows: Vec<Employee>| rows.into_iter().map(|e| e.employee_id).collect::<Vec<_>>();
        let asc = |key| {
            Some(SortState {
                key,
                direction: SortDirection::Ascending,
            })
        };

        assert_eq!(
            keys(sort_employees(&employees, asc(EmployeeSortKey::EmployeeId))),
            vec!["EMP001", "EMP002", "EMP003"]
        );
        assert_eq!(
            keys(sort_employees(&employees, asc(EmployeeSortKey::FullName))),
            vec!["EMP003", "EMP002", "EMP001"]
        );
        assert_eq!(
            keys(sort_employees(&employees, asc(EmployeeSortKey::Department))),
            vec!["EMP001", "EMP003", "EMP002"]
        );
        assert_eq!(
            keys(sort_employees(&employees, None)),
            vec!["EMP002", "EMP001", "EMP003"]
        );
    }
}
