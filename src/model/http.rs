/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! HTTP transport for the TalentScope API
//!
//! [`HttpClient`] turns an [`ApiRequest`] into an [`HttpResponse`] or one of
//! two classified failures. [`execute`] is the single request executor used
//! by every resource service: send once, decode the body leniently.

use crate::constants::{CV_FILE_FIELD, MAX_FILE_SIZE_BYTES};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tokio_util::io::ReaderStream;
use tracing::{debug, error, warn};

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON-encoded UTF-8 body
    Json(Value),
    /// Multipart form with one part streamed from a local file
    Multipart {
        /// Form field name
        field: String,
        /// Path of the file to upload
        path: PathBuf,
    },
}

/// A fully-formed request against the API, relative to the base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute path, e.g. `/v1/resume-batch`
    pub path: String,
    /// Request body
    pub body: RequestBody,
}

impl ApiRequest {
    /// Creates a request without a body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// PATCH request
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attaches a JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Attaches a multipart body carrying the file at `path` as the `file` part
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.body = RequestBody::Multipart {
            field: CV_FILE_FIELD.to_string(),
            path: path.into(),
        };
        self
    }
}

/// Raw response returned by a [`Transport`]; the body is not inspected
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Undecoded response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response with no headers
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Body as lossy UTF-8 text
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON
    ///
    /// A body that is empty or not valid JSON yields [`Value::Null`] instead
    /// of an error.
    #[must_use]
    pub fn json(&self) -> Value {
        match serde_json::from_slice(&self.body) {
            Ok(value) => value,
            Err(e) => {
                if !self.body.is_empty() {
                    warn!("Response body is not valid JSON ({}), returning null", e);
                }
                Value::Null
            }
        }
    }

    /// Decodes the body into `T`
    ///
    /// Unlike [`HttpResponse::json`] this is strict: an empty or malformed
    /// body fails with [`AppError::Json`].
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Sends built requests to the API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the raw response
    ///
    /// Fails with [`AppError::Connection`] when the API cannot be reached and
    /// [`AppError::RequestFailed`] for any other transport failure.
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, AppError>;
}

/// Sends `request` through `transport` and decodes the JSON response
pub async fn execute<T: Transport + ?Sized>(
    transport: &T,
    request: ApiRequest,
) -> Result<Value, AppError> {
    let response = transport.send(request).await?;
    Ok(response.json())
}

/// Transport backed by a `reqwest` client
///
/// Default headers, timeouts and authentication are whatever the injected
/// client was built with.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Wraps `client`, resolving request paths against `base_url`
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Builds a single-part form that streams `path` from disk
    ///
    /// The stream is capped at the length read from the open handle.
    pub(crate) async fn multipart_form(field: &str, path: &Path) -> Result<Form, AppError> {
        let file = tokio::fs::File::open(path).await?;
        let len = file.metadata().await?.len();
        if len > MAX_FILE_SIZE_BYTES {
            return Err(AppError::invalid_argument(format!(
                "{} exceeds the 2MB upload limit.",
                path.display()
            )));
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| field.to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let body = Body::wrap_stream(ReaderStream::new(file.take(len)));
        let part = Part::stream_with_length(body, len)
            .file_name(file_name)
            .mime_str(mime.essence_str())
            .map_err(AppError::from_transport)?;
        Ok(Form::new().part(field.to_string(), part))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, AppError> {
        let url = self.url_for(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method, &url);
        match request.body {
            RequestBody::Empty => {}
            RequestBody::Json(body) => builder = builder.json(&body),
            RequestBody::Multipart { field, path } => {
                builder = builder.multipart(Self::multipart_form(&field, &path).await?);
            }
        }

        let response = builder
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                let err = AppError::from_transport(e);
                error!("{} failed: {}", url, err);
                err
            })?;

        let status = response.status();
        debug!("Response status: {}", status);
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read response body from {}: {}", url, e);
            AppError::RequestFailed(e)
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
