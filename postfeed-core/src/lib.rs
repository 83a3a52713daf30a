//! Client side of the post feed: fetches posts from the feed API, turns them
//! into an explicit [`FeedView`] and keeps that view in step with deletes and
//! new posts. Builds for native targets and `wasm32-unknown-unknown`.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod media;
pub mod models;
pub mod view;

pub use client::FeedClient;
pub use config::FeedConfig;
pub use controller::{CreateOutcome, DeleteOutcome, FeedController, FeedState, LoadOutcome};
pub use error::{FeedError, Result};
pub use media::{MediaKind, MediaPreview};
pub use models::{ApiMessage, MediaUpload, NewPost, Post, PostId, PostList};
pub use view::{FeedView, PostBlock, NO_POSTS_PLACEHOLDER};
