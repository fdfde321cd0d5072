use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn parse_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "PARSE_ERROR")
    }

    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    /// Builds the error for a non-2xx response. The server's `detail` wins
    /// over `fallback`; the raw body is kept in `details`.
    pub fn from_response(status: u16, body: Option<Value>, fallback: &str) -> Self {
        let code = match status {
            400 => "BAD_REQUEST",
            404 => "NOT_FOUND",
            422 => "VALIDATION_ERROR",
            500..=599 => "SERVER_ERROR",
            _ => "HTTP_ERROR",
        };
        let error = body
            .as_ref()
            .and_then(extract_detail)
            .unwrap_or_else(|| fallback.to_string());
        Self {
            error,
            code: code.to_string(),
            details: body,
        }
    }

    pub fn has_server_detail(&self) -> bool {
        self.details.as_ref().and_then(extract_detail).is_some()
    }

    /// Replaces the message with `fallback` unless it came from the server.
    pub fn with_fallback(mut self, fallback: &str) -> Self {
        if !self.has_server_detail() {
            self.error = fallback.to_string();
        }
        self
    }

    /// Validation entries carried by a 422 body, one message per entry.
    pub fn validation_messages(&self) -> Vec<String> {
        self.details
            .as_ref()
            .and_then(|details| details.get("detail"))
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(entry_message).collect())
            .unwrap_or_default()
    }
}

fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(entries) => {
            let messages: Vec<String> = entries.iter().filter_map(entry_message).collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn entry_message(entry: &Value) -> Option<String> {
    entry
        .get("msg")
        .and_then(Value::as_str)
        .or_else(|| entry.as_str())
        .map(str::to_string)
}
