//! Request and response shapes for the REST backend.
//!
//! The backend speaks camelCase JSON; every shape is an explicit serde type
//! rather than ad-hoc `Value` poking.

use serde::{Deserialize, Serialize};

/// An academic batch (intake year).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Batch {
    pub id: i64,
    pub year: String,
}

/// A taught subject.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// A student record, used both for listing and for creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: String,
    pub full_name: String,
    pub student_phone_number: String,
    pub parent_phone_number: String,
    pub batch_id: i64,
    #[serde(default)]
    pub subject_ids: Vec<i64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub batch_id: i64,
    pub subject_id: i64,
    pub message: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest<'a> {
    pub student_id: &'a str,
    pub subject_id: i64,
    pub batch_id: i64,
}

/// Aggregate counters for the dashboard. Fields default to zero so a partial
/// response still renders.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_students: i64,
    pub total_subjects: i64,
}

/// A student as listed in an attendance report.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportStudent {
    pub student_id: String,
    pub full_name: String,
}

/// Daily attendance report for one subject and batch.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    pub attended_students: Vec<ReportStudent>,
    pub absent_students: Vec<ReportStudent>,
}
