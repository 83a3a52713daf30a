//! Error types for the feed client

use crate::models::PostId;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Failed to fetch posts: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("Failed to delete post {post_id}: {source}")]
    Delete {
        post_id: PostId,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to create post: {0}")]
    Create(#[source] reqwest::Error),

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
