use gloo_net::http::{Request, Response};
use serde_json::Value;
use urlencoding::encode;

use crate::error::ApiError;
use crate::model::Activities;

/// Thin client over the activities endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    pub fn activities_url(&self) -> String {
        self.url("/activities")
    }

    pub fn signup_url(&self, activity: &str, email: &str) -> String {
        self.url(&format!(
            "/activities/{}/signup?email={}",
            encode(activity),
            encode(email)
        ))
    }

    pub fn participant_url(&self, activity: &str, email: &str) -> String {
        self.url(&format!(
            "/activities/{}/participants?email={}",
            encode(activity),
            encode(email)
        ))
    }

    pub async fn activities(&self) -> Result<Activities, ApiError> {
        let resp = Request::get(&self.activities_url()).send().await?;
        if !resp.ok() {
            let body = body_or_empty(&resp).await;
            return Err(rejected(&resp, &body, &["detail", "message"]));
        }
        resp.json::<Activities>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Registers `email` for `activity`, returning the server's confirmation
    /// text (empty when the body had none).
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let resp = Request::post(&self.signup_url(activity, email)).send().await?;
        let body = body_or_empty(&resp).await;
        if !resp.ok() {
            return Err(rejected(&resp, &body, &["detail"]));
        }
        Ok(server_text(&body, &["message"]).unwrap_or_default())
    }

    pub async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        let resp = Request::delete(&self.participant_url(activity, email)).send().await?;
        if !resp.ok() {
            let body = body_or_empty(&resp).await;
            return Err(rejected(&resp, &body, &["detail", "message"]));
        }
        Ok(())
    }
}

/// Best-effort body parse: anything that is not JSON reads as `{}`.
async fn body_or_empty(resp: &Response) -> Value {
    resp.json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Object(Default::default()))
}

fn rejected(resp: &Response, body: &Value, keys: &[&str]) -> ApiError {
    ApiError::Rejected {
        status: resp.status(),
        detail: server_text(body, keys),
    }
}

/// First non-empty string among `keys` in a JSON object body.
pub fn server_text(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| body.get(*k)?.as_str())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
