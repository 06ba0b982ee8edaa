//! YouTube Data API v3 integration module.
//!
//! Request construction, execution, and response models for the
//! `search.list` and `commentThreads.list` endpoints.

pub mod client;
pub mod models;

pub use client::{ApiContext, CommentThreadsRequest, SearchRequest};
pub use models::{CommentThreadListResponse, SearchListResponse};
