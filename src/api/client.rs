use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ureq::Body;
use ureq::http::Response;

use crate::api::HabitApi;
use crate::core::{
    AddHabitResponse, Habit, HistoryResponse, MessageResponse, OverallStats, StreakSummary,
};
use crate::error::ApiError;

/// Blocking HTTP implementation of [`HabitApi`].
///
/// Each call is a single request: no retry, no caching.
pub(crate) struct HttpApi {
    agent: ureq::Agent,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

#[derive(Serialize)]
struct NewHabit<'a> {
    name: &'a str,
}

impl HttpApi {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        HttpApi {
            agent,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn finish<T: DeserializeOwned>(
        method: &str,
        url: &str,
        started: Instant,
        result: Result<Response<Body>, ureq::Error>,
    ) -> Result<T, ApiError> {
        let response = result.inspect_err(|e| debug!(%method, %url, error = %e, "request failed"))?;
        let status = response.status();
        debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response received"
        );
        let text = response.into_body().read_to_string()?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&text, status.canonical_reason()),
            });
        }
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| reason.unwrap_or("request failed").to_string())
}

impl HabitApi for HttpApi {
    fn list_habits(&self) -> Result<Vec<Habit>, ApiError> {
        let url = self.url("/habits");
        let started = Instant::now();
        Self::finish("GET", &url, started, self.agent.get(&url).call())
    }

    fn add_habit(&self, name: &str) -> Result<AddHabitResponse, ApiError> {
        let url = self.url("/habits");
        let started = Instant::now();
        let result = self.agent.post(&url).send_json(NewHabit { name });
        Self::finish("POST", &url, started, result)
    }

    fn mark_done(&self, id: i64) -> Result<String, ApiError> {
        let url = self.url(&format!("/habits/{id}/done"));
        let started = Instant::now();
        let body: MessageResponse =
            Self::finish("POST", &url, started, self.agent.post(&url).send_empty())?;
        Ok(body.message)
    }

    fn delete_habit(&self, id: i64) -> Result<String, ApiError> {
        let url = self.url(&format!("/habits/{id}"));
        let started = Instant::now();
        let body: MessageResponse =
            Self::finish("DELETE", &url, started, self.agent.delete(&url).call())?;
        Ok(body.message)
    }

    fn history(&self, id: i64, days: u32) -> Result<HistoryResponse, ApiError> {
        let url = self.url(&format!("/habits/{id}/history"));
        let started = Instant::now();
        let result = self
            .agent
            .get(&url)
            .query("days", days.to_string())
            .call();
        Self::finish("GET", &url, started, result)
    }

    fn streak(&self, id: i64) -> Result<StreakSummary, ApiError> {
        let url = self.url(&format!("/habits/{id}/streak"));
        let started = Instant::now();
        Self::finish("GET", &url, started, self.agent.get(&url).call())
    }

    fn overall_stats(&self) -> Result<OverallStats, ApiError> {
        let url = self.url("/stats");
        let started = Instant::now();
        Self::finish("GET", &url, started, self.agent.get(&url).call())
    }
}
