use super::ApiState;
use crate::core::AttendanceService;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, RecapEntry, Student, TimeStatus};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Clients send the id either as a number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StudentIdInput {
    Number(i64),
    Text(String),
}

impl StudentIdInput {
    pub fn resolve(&self) -> AppResult<u32> {
        let parsed = match self {
            StudentIdInput::Number(n) => u32::try_from(*n).ok(),
            StudentIdInput::Text(s) => s.trim().parse::<u32>().ok(),
        };
        parsed.ok_or_else(|| AppError::MalformedPayload(format!("invalid studentId {self:?}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub student_id: StudentIdInput,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub success: bool,
    pub message: String,
    pub data: AttendanceRecord,
}

async fn blocking<T, F>(state: &ApiState, op: F) -> AppResult<T>
where
    F: FnOnce(&AttendanceService) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || op(&service)).await?
}

pub async fn students_handler(State(state): State<ApiState>) -> AppResult<Json<Vec<Student>>> {
    let students = blocking(&state, |s| s.students()).await?;
    Ok(Json(students))
}

/// Body rejections (wrong content type, bad JSON, missing or non-integer
/// `studentId`) are reported as `MalformedPayload` like any other bad id.
pub async fn check_in_handler(
    State(state): State<ApiState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> AppResult<Json<CheckInResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::MalformedPayload(e.body_text()))?;
    let student_id = payload.student_id.resolve()?;
    let record = blocking(&state, move |s| s.check_in(student_id)).await?;

    Ok(Json(CheckInResponse {
        success: true,
        message: "Attendance recorded".to_string(),
        data: record,
    }))
}

pub async fn recap_handler(State(state): State<ApiState>) -> AppResult<Json<Vec<RecapEntry>>> {
    let recap = blocking(&state, |s| s.recap()).await?;
    Ok(Json(recap))
}

pub async fn time_status_handler(State(state): State<ApiState>) -> Json<TimeStatus> {
    Json(state.service.time_status())
}
