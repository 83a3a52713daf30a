use serde::{Deserialize, Serialize};
use std::fmt;

/// Post identifier exactly as the server issued it. Kept untagged so a
/// delete request echoes back the same JSON type (number or string).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Int(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Int(id) => write!(f, "{id}"),
            PostId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        PostId::Int(id)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        PostId::Text(id.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub privacy: String,
    pub created_at: String,
    /// Base64 encoded media bytes
    #[serde(default)]
    pub media_data: Option<String>,
    /// Declared media kind, `"image"` or `"video"`
    #[serde(default)]
    pub media_type: Option<String>,
}

/// Body of `GET /api/posts`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub post_id: PostId,
}

/// Acknowledgement returned by the mutating endpoints. Other fields are
/// ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Form submitted to `POST /api/create_post`
#[derive(Clone, Debug, PartialEq)]
pub struct NewPost {
    pub content: String,
    pub privacy: String,
    pub media: Option<MediaUpload>,
}
