//! Focusmate integration -- find the session the user is currently in.
//!
//! Sessions are fetched for a window around "now" and the current one is
//! chosen by [`select_active_session`]. A running session always wins; if
//! none is running, a session starting within [`LOOKAHEAD_MINUTES`] is treated as
//! active so hooks can fire just before it begins.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FocusmateError;
use crate::storage::FocusmateConfig;

pub const FOCUSMATE_API_BASE: &str = "https://api.focusmate.com/v1";

/// How far ahead an upcoming session counts as active.
pub const LOOKAHEAD_MINUTES: i64 = 5;

/// Half-width of the window requested from the API.
pub const FETCH_WINDOW_HOURS: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusmateUser {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub requested_at: Option<String>,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub session_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusmateSession {
    pub session_id: String,
    /// Milliseconds.
    pub duration: i64,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub users: Vec<FocusmateUser>,
}

impl FocusmateSession {
    /// `None` when `duration` pushes the end past the representable range.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        Duration::try_milliseconds(self.duration)
            .and_then(|d| self.start_time.checked_add_signed(d))
    }

    fn is_running_at(&self, now: DateTime<Utc>) -> bool {
        self.end_time()
            .is_some_and(|end| self.start_time <= now && now < end)
    }

    fn starts_soon_after(&self, now: DateTime<Utc>) -> bool {
        self.end_time().is_some()
            && self.start_time > now
            && self.start_time - now <= Duration::minutes(LOOKAHEAD_MINUTES)
    }
}

#[derive(Debug, Deserialize)]
struct SessionsResponse {
    #[serde(default)]
    sessions: Vec<FocusmateSession>,
}

/// The session chosen as current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub session_id: String,
    pub duration_ms: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Until the session's end, even when it has not started yet.
    pub remaining_ms: i64,
}

impl ActiveSession {
    fn from_session(session: &FocusmateSession, now: DateTime<Utc>) -> Option<Self> {
        let end_time = session.end_time()?;
        Some(Self {
            session_id: session.session_id.clone(),
            duration_ms: session.duration,
            start_time: session.start_time,
            end_time,
            remaining_ms: (end_time - now).num_milliseconds(),
        })
    }
}

/// Pick the session the user is in at `now`.
///
/// All sessions are checked for "running" before any is checked for
/// "starting within five minutes"; within each pass, API order decides.
/// A session whose end time cannot be computed never qualifies.
///
/// # Errors
/// [`FocusmateError::NoActiveSession`] when nothing qualifies.
pub fn select_active_session(
    sessions: &[FocusmateSession],
    now: DateTime<Utc>,
) -> Result<ActiveSession, FocusmateError> {
    sessions
        .iter()
        .find(|s| s.is_running_at(now))
        .or_else(|| sessions.iter().find(|s| s.starts_soon_after(now)))
        .and_then(|s| ActiveSession::from_session(s, now))
        .ok_or(FocusmateError::NoActiveSession)
}

pub struct FocusmateClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl FocusmateClient {
    pub fn new(http: Client, config: &FocusmateConfig) -> Self {
        Self::with_base_url(http, config, FOCUSMATE_API_BASE)
    }

    pub fn with_base_url(http: Client, config: &FocusmateConfig, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// `GET /sessions?start=..&end=..`
    ///
    /// # Errors
    /// Maps 401 to [`FocusmateError::InvalidApiKey`], other non-2xx to
    /// [`FocusmateError::Api`].
    pub async fn fetch_sessions(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FocusmateSession>, FocusmateError> {
        let mut url = url::Url::parse(&format!("{}/sessions", self.base_url))
            .map_err(|e| FocusmateError::Decode(format!("bad API base URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("start", &start.to_rfc3339_opts(SecondsFormat::Millis, true))
            .append_pair("end", &end.to_rfc3339_opts(SecondsFormat::Millis, true));

        debug!("fetching Focusmate sessions: {url}");
        let resp = self
            .http
            .get(url)
            .header("X-API-KEY", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(FocusmateError::InvalidApiKey);
        }
        if !status.is_success() {
            return Err(FocusmateError::Api {
                status: status.as_u16(),
            });
        }

        let body: SessionsResponse = resp
            .json()
            .await
            .map_err(|e| FocusmateError::Decode(e.to_string()))?;
        Ok(body.sessions)
    }

    /// The session the user is in right now, or about to join.
    ///
    /// # Errors
    /// Fails without a request when no API key is configured.
    pub async fn active_session(&self, now: DateTime<Utc>) -> Result<ActiveSession, FocusmateError> {
        if self.api_key.is_empty() {
            return Err(FocusmateError::MissingApiKey);
        }

        let window = Duration::hours(FETCH_WINDOW_HOURS);
        let sessions = self.fetch_sessions(now - window, now + window).await?;
        select_active_session(&sessions, now)
    }
}
