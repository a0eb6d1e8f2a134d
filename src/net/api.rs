//! REST API helpers for communicating with the attendance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token passed explicitly by the caller. Server-side (SSR): stubs returning
//! errors since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The session operations (`validate_token`, `login`) map everything into
//! `SessionError`; the page-level helpers return `Result<_, String>` so fetch
//! failures surface as inline messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::session::SessionError;

use super::types::{
    AttendanceReport, Batch, DashboardStats, MarkAttendanceRequest, SendMessageRequest, Student,
    Subject,
};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, LoginResponse};

/// Deadline for the startup validation call. A hung backend must not leave
/// the UI stuck on the loading screen.
pub const VALIDATE_TIMEOUT_MS: u32 = 10_000;

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Query string for the student listing endpoint. Empty when unfiltered.
pub fn students_query(batch_id: Option<i64>, subject_id: Option<i64>) -> String {
    let mut params = Vec::new();
    if let Some(id) = batch_id {
        params.push(format!("batchId={id}"));
    }
    if let Some(id) = subject_id {
        params.push(format!("subjectId={id}"));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

/// Query string for the attendance report endpoint.
pub fn report_query(subject_id: i64, batch_id: i64, date: &str) -> String {
    format!("?subjectId={subject_id}&batchId={batch_id}&date={date}")
}

/// Turn a non-2xx response into a user-facing message. JSON bodies carry the
/// message under `error` (preferred) or `message`; plain-text bodies are
/// passed through; empty bodies fall back to the status code.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let field = value
            .get("error")
            .and_then(|m| m.as_str())
            .or_else(|| value.get("message").and_then(|m| m.as_str()));
        if let Some(message) = field {
            return message.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("server returned {status}")
    } else {
        trimmed.to_owned()
    }
}

#[cfg(feature = "hydrate")]
async fn read_error(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(status, &body)
}

/// Authenticated GET returning a JSON body.
#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str, token: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Authenticated POST with a JSON body, returning the response text.
#[cfg(feature = "hydrate")]
async fn post_json<B>(url: &str, token: Option<&str>, body: &B) -> Result<String, String>
where
    B: serde::Serialize,
{
    let mut builder = gloo_net::http::Request::post(url);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let resp = builder
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.text().await.map_err(|e| e.to_string())
}

// =============================================================
// Session endpoints
// =============================================================

/// Ask the server whether `token` is still valid via
/// `POST /api/auth/validate`. Any 2xx means valid; everything else
/// (rejection, transport error, timeout) collapses to `ValidationRejected`.
pub async fn validate_token(token: &str) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};
        use std::pin::pin;

        let request = pin!(async {
            gloo_net::http::Request::post("/api/auth/validate")
                .header("Authorization", &bearer(token))
                .send()
                .await
        });
        let deadline = pin!(gloo_timers::future::TimeoutFuture::new(VALIDATE_TIMEOUT_MS));

        match select(request, deadline).await {
            Either::Left((Ok(resp), _)) if resp.ok() => Ok(()),
            Either::Left(_) | Either::Right(_) => Err(SessionError::ValidationRejected),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(SessionError::ValidationRejected)
    }
}

/// Exchange credentials for a token via `POST /api/auth/login`.
pub async fn login(username: &str, password: &str) -> Result<String, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginRequest { username, password })
            .map_err(|e| SessionError::LoginFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| SessionError::LoginFailed(e.to_string()))?;
        if !resp.ok() {
            return Err(SessionError::LoginFailed(read_error(resp).await));
        }
        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| SessionError::LoginFailed(e.to_string()))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(SessionError::LoginFailed("not available on server".to_owned()))
    }
}

/// Create an account via `POST /api/auth/register`.
pub async fn register(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/auth/register",
            None,
            &LoginRequest { username, password },
        )
        .await
        .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Admin endpoints
// =============================================================

/// List all batches.
pub async fn fetch_batches(token: &str) -> Result<Vec<Batch>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/batches", token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Create a batch for `year`.
pub async fn add_batch(year: &str, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "year": year });
        post_json("/api/admin/batches", Some(token), &body)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (year, token);
        Err("not available on server".to_owned())
    }
}

/// List all subjects.
pub async fn fetch_subjects(token: &str) -> Result<Vec<Subject>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/subjects", token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// List students, optionally filtered by batch and subject.
pub async fn fetch_students(
    batch_id: Option<i64>,
    subject_id: Option<i64>,
    token: &str,
) -> Result<Vec<Student>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "/api/admin/students{}",
            students_query(batch_id, subject_id)
        );
        get_json(&url, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (batch_id, subject_id, token);
        Err("not available on server".to_owned())
    }
}

/// Create a student record.
pub async fn add_student(student: &Student, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/admin/students", Some(token), student)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (student, token);
        Err("not available on server".to_owned())
    }
}

/// Upload a CSV of students via `POST /api/admin/students/import`. Parsing
/// happens on the backend; the response text summarizes the import.
#[cfg(feature = "hydrate")]
pub async fn import_students(file: &web_sys::File, token: &str) -> Result<String, String> {
    let form =
        web_sys::FormData::new().map_err(|_| "could not build upload form".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "could not attach file".to_owned())?;
    let resp = gloo_net::http::Request::post("/api/admin/students/import")
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.text().await.map_err(|e| e.to_string())
}

/// Send a group message to a batch/subject via `POST /api/admin/messages/send`.
pub async fn send_message(request: &SendMessageRequest, token: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/admin/messages/send", Some(token), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregate dashboard counters.
pub async fn fetch_stats(token: &str) -> Result<DashboardStats, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/stats", token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch the daily attendance report for one subject and batch.
pub async fn fetch_report(
    subject_id: i64,
    batch_id: i64,
    date: &str,
    token: &str,
) -> Result<AttendanceReport, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "/api/attendance/report{}",
            report_query(subject_id, batch_id, date)
        );
        get_json(&url, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (subject_id, batch_id, date, token);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Public check-in endpoints (no token)
// =============================================================

/// Unauthenticated batch lookup for the check-in terminal.
pub async fn fetch_public_batches() -> Result<Vec<Batch>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/attendance/public/batches")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_error(resp).await);
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Unauthenticated subject lookup for the check-in terminal.
pub async fn fetch_public_subjects() -> Result<Vec<Subject>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/attendance/public/subjects")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_error(resp).await);
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Mark one student present via `POST /api/attendance/mark`.
pub async fn mark_attendance(request: &MarkAttendanceRequest<'_>) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/attendance/mark", None, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
