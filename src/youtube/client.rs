//! YouTube Data API v3 request construction and execution.
//!
//! Holds the immutable API context built once at startup and the
//! per-endpoint request builders. Requests use the unauthenticated
//! API-key scheme; there is no OAuth and no user context.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::youtube::models::{ApiErrorEnvelope, CommentThreadListResponse, SearchListResponse};
use anyhow::anyhow;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Base URL of the Data API.
pub const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default field projection for video search.
///
/// Reduces the response to the fields the renderer prints, making calls
/// more efficient.
pub const SEARCH_FIELD_PROJECTION: &str =
    "items(id/kind,id/videoId,snippet/title,snippet/channelId,snippet/thumbnails/default/url)";

/// Video id whose comment threads the comments sample lists.
pub const DEFAULT_COMMENTS_VIDEO_ID: &str = "um9_NWttXA4";

/// Hook applied to every outgoing request before it is sent.
///
/// Replaces an initializer-interface hierarchy with a plain function
/// value; `None` is the no-op.
pub type RequestInitializer = fn(RequestBuilder) -> RequestBuilder;

/// Immutable handle for all API requests.
///
/// Constructed once per process and passed explicitly to the executors.
#[derive(Debug, Clone)]
pub struct ApiContext {
    /// HTTP client for API requests
    client: Client,
    /// API key for unauthenticated requests
    api_key: String,
    /// Base URL for the Data API
    base_url: String,
    /// Optional request hook, applied before sending
    request_initializer: Option<RequestInitializer>,
}

impl ApiContext {
    /// Create a new API context from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration with the API key
    /// * `application_name` - Name sent as the client's User-Agent
    ///
    /// # Returns
    /// * `Result<ApiContext>` - New context or error
    ///
    /// # Details
    /// No timeout override and no retry policy; the client keeps its
    /// library defaults.
    pub fn new(config: &Config, application_name: &str) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config(
                "YouTube API key is required. Please set it in youtube.properties".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent(application_name)
            .build()
            .map_err(|e| Error::Unexpected(anyhow!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: API_BASE_URL.to_string(),
            request_initializer: None,
        })
    }

    /// Replace the API base URL.
    ///
    /// Used by tests to point the context at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Install a request initializer hook.
    pub fn with_request_initializer(mut self, initializer: RequestInitializer) -> Self {
        self.request_initializer = Some(initializer);
        self
    }

    /// Execute a video search.
    ///
    /// # Arguments
    /// * `request` - Search parameters
    ///
    /// # Returns
    /// * `Result<SearchListResponse>` - One page of search hits or a classified error
    pub async fn execute_search(&self, request: &SearchRequest) -> Result<SearchListResponse> {
        self.execute("search", request.query_params()).await
    }

    /// List the comment threads of a video.
    ///
    /// # Arguments
    /// * `request` - Comment-thread parameters
    ///
    /// # Returns
    /// * `Result<CommentThreadListResponse>` - One page of threads or a classified error
    pub async fn execute_comment_threads(
        &self,
        request: &CommentThreadsRequest,
    ) -> Result<CommentThreadListResponse> {
        self.execute("commentThreads", request.query_params()).await
    }

    /// Perform the one blocking network call of a sample run.
    ///
    /// # Details
    /// Appends the `key` parameter, applies the request initializer if
    /// any, and classifies failures: send errors are transport errors, a
    /// non-2xx status with a parseable error envelope is a service error,
    /// anything else is unexpected.
    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<T> {
        params.push(("key", self.api_key.clone()));
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut request = self.client.get(&url).query(&params);
        if let Some(initialize) = self.request_initializer {
            request = initialize(request);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error_response(status, &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Unexpected(anyhow!("failed to parse {endpoint} response: {e}")))
    }
}

/// Classify a non-2xx response body.
///
/// A parseable Google error envelope becomes a service error carrying
/// its code and message; anything else is unexpected.
fn classify_error_response(status: StatusCode, body: &str) -> Error {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => Error::Api {
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(_) => Error::Unexpected(anyhow!("service returned HTTP {status}: {body}")),
    }
}

/// Parameters of a `search.list` call.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Free-text query, passed verbatim
    pub query: String,
    /// Result-count limit for the single requested page
    pub max_results: u32,
    /// Resource-type filter, `video` by default
    pub resource_type: String,
    /// Field projection restricting the response payload
    pub fields: String,
}

impl SearchRequest {
    /// Create a search request with the sample defaults.
    ///
    /// # Arguments
    /// * `query` - Free-text query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 25,
            resource_type: "video".to_string(),
            fields: SEARCH_FIELD_PROJECTION.to_string(),
        }
    }

    /// Set the result-count limit.
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Assemble the endpoint query parameters, without the API key.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("part", "id,snippet".to_string()),
            ("q", self.query.clone()),
            ("type", self.resource_type.clone()),
            ("maxResults", self.max_results.to_string()),
            ("fields", self.fields.clone()),
        ]
    }
}

/// Parameters of a `commentThreads.list` call.
#[derive(Debug, Clone)]
pub struct CommentThreadsRequest {
    /// Video whose threads are listed
    pub video_id: String,
    /// Whether replies are requested alongside each top-level comment
    pub include_replies: bool,
}

impl CommentThreadsRequest {
    /// Create a comment-threads request with replies included.
    ///
    /// # Arguments
    /// * `video_id` - Video id
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            include_replies: true,
        }
    }

    /// Assemble the endpoint query parameters, without the API key.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let part = if self.include_replies {
            "snippet,replies"
        } else {
            "snippet"
        };
        vec![
            ("part", part.to_string()),
            ("videoId", self.video_id.clone()),
        ]
    }
}
