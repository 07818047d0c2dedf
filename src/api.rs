/// Typed client for the job backend
///
/// Requests are built here and handed to a [`Transport`], which only moves
/// bytes. Status handling lives in [`decode_response`] so it behaves the same
/// for every transport.
use crate::config::ApiConfig;
use crate::error::ScoutError;
use crate::models::{
    Company, CompanyCreate, RankedJob, ResumeOut, ScrapeRequest, ScrapeResponse, SettingsOut,
    SettingsUpdate, SurveillanceResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Form field the backend reads the resume from
pub const RESUME_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Request body. Multipart uploads are passed through untouched so the
/// platform writes the boundary.
#[derive(Debug, Clone)]
pub enum Body<U> {
    Empty,
    Json(Value),
    Multipart { field: &'static str, file: U },
}

#[derive(Debug, Clone)]
pub struct ApiRequest<U> {
    pub method: Method,
    pub path: String,
    pub body: Body<U>,
}

impl<U> ApiRequest<U> {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            body: Body::Empty,
        }
    }

    pub fn json<B: Serialize>(method: Method, path: impl Into<String>, body: &B) -> Result<Self, ScoutError> {
        Ok(ApiRequest {
            method,
            path: path.into(),
            body: Body::Json(serde_json::to_value(body)?),
        })
    }

    pub fn upload(path: impl Into<String>, field: &'static str, file: U) -> Self {
        ApiRequest {
            method: Method::Post,
            path: path.into(),
            body: Body::Multipart { field, file },
        }
    }
}

/// Status and body text of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Moves a request to the backend and returns whatever came back.
/// Only transport-level failures are errors here; HTTP status is not inspected.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// What a multipart upload carries (a browser `File` in the popup)
    type Upload;

    async fn send(&self, config: &ApiConfig, request: ApiRequest<Self::Upload>) -> Result<RawResponse, ScoutError>;
}

/// Turn a raw response into a JSON value, `None` for `204 No Content`,
/// or a backend error carrying the server's `detail`.
pub fn decode_response(response: &RawResponse) -> Result<Option<Value>, ScoutError> {
    if !(200..300).contains(&response.status) {
        return Err(ScoutError::Backend {
            status: response.status,
            message: error_message(response),
        });
    }

    if response.status == 204 {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&response.body)?))
}

/// `detail` from a FastAPI-style error body, else a generic message with the status
fn error_message(response: &RawResponse) -> String {
    let detail = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("detail").cloned());

    match detail {
        Some(Value::String(text)) => text,
        Some(Value::Null) | None => format!("Request failed (HTTP {})", response.status),
        Some(other) => other.to_string(),
    }
}

/// One method per backend endpoint
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        ApiClient { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and decode the body; `None` means `204 No Content`
    pub async fn call<R: DeserializeOwned>(&self, request: ApiRequest<T::Upload>) -> Result<Option<R>, ScoutError> {
        log::debug!("{} {}", request.method.as_str(), request.path);

        let raw = self.transport.send(&self.config, request).await?;
        match decode_response(&raw)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    async fn call_required<R: DeserializeOwned>(&self, request: ApiRequest<T::Upload>) -> Result<R, ScoutError> {
        let path = request.path.clone();
        self.call(request)
            .await?
            .ok_or_else(|| ScoutError::Decode(format!("empty response from {}", path)))
    }

    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, ScoutError> {
        self.call_required(ApiRequest::json(Method::Post, "/scrape", request)?).await
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, ScoutError> {
        self.call_required(ApiRequest::new(Method::Get, "/companies")).await
    }

    pub async fn add_company(&self, company: &CompanyCreate) -> Result<Company, ScoutError> {
        self.call_required(ApiRequest::json(Method::Post, "/companies", company)?).await
    }

    pub async fn delete_company(&self, id: i64) -> Result<(), ScoutError> {
        self.call::<Value>(ApiRequest::new(Method::Delete, format!("/companies/{}", id)))
            .await
            .map(|_| ())
    }

    pub async fn check_surveillance(&self) -> Result<SurveillanceResponse, ScoutError> {
        self.call_required(ApiRequest::new(Method::Post, "/surveillance/check")).await
    }

    pub async fn upload_resume(&self, file: T::Upload) -> Result<ResumeOut, ScoutError> {
        self.call_required(ApiRequest::upload("/resume", RESUME_FIELD, file)).await
    }

    /// Ranked jobs; the backend caps the list at 20 unless `limit` says otherwise
    pub async fn rank(&self, limit: Option<u32>) -> Result<Vec<RankedJob>, ScoutError> {
        let path = match limit {
            Some(limit) => format!("/rank?limit={}", limit),
            None => "/rank".to_string(),
        };
        self.call_required(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn settings(&self) -> Result<SettingsOut, ScoutError> {
        self.call_required(ApiRequest::new(Method::Get, "/settings")).await
    }

    pub async fn update_settings(&self, update: &SettingsUpdate) -> Result<SettingsOut, ScoutError> {
        self.call_required(ApiRequest::json(Method::Put, "/settings", update)?).await
    }
}
