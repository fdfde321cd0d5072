use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployee, Employee, MessageResponse},
};

/// Characters left as-is in a path segment; everything else is escaped.
pub(crate) const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        let response = self.send(self.http_client().get(&url)).await?;
        Self::read_json(response, "Failed to fetch employees").await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees").await;
        let response = self
            .send(self.http_client().post(&url).json(payload))
            .await?;
        Self::read_json(response, "Failed to add employee").await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<MessageResponse, ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}", encode_segment(employee_id)))
            .await;
        let response = self.send(self.http_client().delete(&url)).await?;
        let status = response.status();
        if status.is_success() {
            // Some deployments answer 204 with no body.
            Ok(response.json().await.unwrap_or_default())
        } else {
            Err(Self::read_error(response, "Failed to delete employee").await)
        }
    }
}
