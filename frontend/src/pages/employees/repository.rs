use crate::api::{ApiClient, ApiError, CreateEmployee, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn add_employee(&self, payload: CreateEmployee) -> Result<Employee, ApiError> {
        let employee = self.client.create_employee(&payload).await?;
        log::info!("Added employee {}", employee.employee_id);
        Ok(employee)
    }

    pub async fn delete_employee(&self, employee_id: String) -> Result<(), ApiError> {
        self.client.delete_employee(&employee_id).await?;
        log::info!("Deleted employee {}", employee_id);
        Ok(())
    }
}
