use std::time::Duration;

use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::model::{NewTask, Task, TaskPatch};

/// Error type for task service calls. Every non-2xx response surfaces as a
/// typed failure carrying the status; there is no automatic retry.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },
    #[error("task not found: {0}")]
    NotFound(i64),
    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Blocking client for the task collection endpoint.
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(ApiClient {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }

    /// Fetch the full current collection.
    pub fn list_all(&self) -> Result<Vec<Task>, ApiError> {
        let resp = self.http.get(&self.base).send()?;
        decode(check(resp)?)
    }

    /// Fetch one task. A 404 maps to `ApiError::NotFound`.
    pub fn get_by_id(&self, id: i64) -> Result<Task, ApiError> {
        let resp = self.http.get(self.item_url(id)).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }
        decode(check(resp)?)
    }

    /// Create a task. The server assigns `id`, `created_date` and the
    /// derived flags.
    pub fn create(&self, new: &NewTask) -> Result<Task, ApiError> {
        let resp = self.http.post(&self.base).json(new).send()?;
        decode(check(resp)?)
    }

    /// Flip a task's completed state. Not idempotent: each call flips again.
    pub fn toggle(&self, id: i64) -> Result<Task, ApiError> {
        let resp = self.http.patch(self.item_url(id)).send()?;
        decode(check(resp)?)
    }

    /// Merge the set fields of `patch` into the stored task.
    pub fn update(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
        let resp = self.http.put(self.item_url(id)).json(patch).send()?;
        decode(check(resp)?)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        let resp = self.http.delete(self.item_url(id)).send()?;
        check(resp)?;
        Ok(())
    }

    // --- single-field update helpers ---

    pub fn set_comment(&self, id: i64, comment: &str) -> Result<Task, ApiError> {
        self.update(
            id,
            &TaskPatch {
                comment: Some(comment.to_string()),
                ..TaskPatch::default()
            },
        )
    }

    pub fn set_description(&self, id: i64, description: &str) -> Result<Task, ApiError> {
        self.update(
            id,
            &TaskPatch {
                description: Some(description.to_string()),
                ..TaskPatch::default()
            },
        )
    }

    pub fn set_due_date(&self, id: i64, due_date: NaiveDate) -> Result<Task, ApiError> {
        self.update(
            id,
            &TaskPatch {
                due_date: Some(due_date),
                ..TaskPatch::default()
            },
        )
    }

    /// Put a completed task back into the open state.
    pub fn reset_incomplete(&self, id: i64) -> Result<Task, ApiError> {
        self.update(
            id,
            &TaskPatch {
                completed: Some(false),
                ..TaskPatch::default()
            },
        )
    }
}

fn check(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().unwrap_or_default();
    Err(ApiError::Http {
        status: status.as_u16(),
        message,
    })
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let text = resp.text()?;
    serde_json::from_str(&text).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8080/api/todos/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/todos");
        assert_eq!(client.item_url(7), "http://localhost:8080/api/todos/7");
    }

    #[test]
    fn test_error_display_carries_status() {
        let err = ApiError::Http {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "server returned 500: boom");
        assert_eq!(ApiError::NotFound(3).to_string(), "task not found: 3");
    }
}
