use super::{
    client::ApiClient,
    employees::encode_segment,
    types::{ApiError, AttendanceRecord, CreateAttendance},
};

impl ApiClient {
    pub async fn create_attendance(
        &self,
        payload: &CreateAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/attendance").await;
        let response = self
            .send(self.http_client().post(&url).json(payload))
            .await?;
        Self::read_json(response, "Failed to mark attendance").await
    }

    pub async fn list_attendance_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self
            .endpoint(&format!("/attendance/{}", encode_segment(employee_id)))
            .await;
        let response = self.send(self.http_client().get(&url)).await?;
        Self::read_json(response, "Failed to fetch attendance").await
    }
}
