//! YouTube Data API v3 models and data structures.
//!
//! Contains response structures for video search and comment threads,
//! plus the structured error envelope the service returns on failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Resource kind tag for video search hits.
pub const KIND_VIDEO: &str = "youtube#video";

/// Resource kind tag for comment threads.
pub const KIND_COMMENT_THREAD: &str = "youtube#commentThread";

/// YouTube API list response wrapper.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// Response items; absent or null renders as no results
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub items: Vec<T>,
    /// Next page token for pagination
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// Treat an explicit `"items": null` the same as an absent list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of a `search.list` call.
pub type SearchListResponse = ListResponse<SearchResult>;

/// Response of a `commentThreads.list` call.
pub type CommentThreadListResponse = ListResponse<CommentThread>;

/// Single search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Typed id of the matched resource
    pub id: ResourceId,
    /// Snippet with the displayed fields
    pub snippet: SearchSnippet,
}

/// Id of a search hit, tagged with its resource kind.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceId {
    /// Resource kind tag, e.g. `youtube#video`
    pub kind: String,
    /// Video id; present only for video hits
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Search hit snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSnippet {
    /// Video title
    pub title: String,
    /// Channel ID
    #[serde(rename = "channelId")]
    pub channel_id: String,
    /// Published date; absent under the default field projection
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    /// Thumbnails
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Thumbnail information.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    /// Default thumbnail
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

/// Single thumbnail.
#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    /// Thumbnail URL
    pub url: String,
}

/// Comment thread: one top-level comment and its replies.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentThread {
    /// Resource kind tag, e.g. `youtube#commentThread`
    pub kind: String,
    /// Thread id (equals the top-level comment id)
    pub id: String,
    /// Snippet with the thread metadata and top-level comment
    pub snippet: CommentThreadSnippet,
    /// Replies; present only when requested and non-empty
    pub replies: Option<Replies>,
}

/// Comment thread snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentThreadSnippet {
    /// Id of the video the thread belongs to
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    /// Id of the channel the video belongs to
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    /// The root comment of the thread
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: Comment,
    /// Total reply count, may exceed the replies actually included
    #[serde(rename = "totalReplyCount")]
    pub total_reply_count: Option<u64>,
}

/// Replies to a comment thread, in response order.
#[derive(Debug, Clone, Deserialize)]
pub struct Replies {
    /// Reply comments
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Single comment, top-level or reply.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Comment id
    pub id: String,
    /// Snippet with the displayed fields
    pub snippet: CommentSnippet,
}

/// Comment snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentSnippet {
    /// Author display name
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: String,
    /// Comment text as displayed
    #[serde(rename = "textDisplay")]
    pub text_display: String,
    /// Like count
    #[serde(rename = "likeCount")]
    #[serde(default)]
    pub like_count: u64,
    /// Published date
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Structured error body returned by the service on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Error details
    pub error: ApiErrorDetail,
}

/// Error details inside the envelope.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Numeric error code (usually the HTTP status)
    pub code: i64,
    /// Human-readable error message
    pub message: String,
}
