//! REST client for the post feed API

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::media::{upload_mime, MediaKind};
use crate::models::{ApiMessage, DeletePostRequest, NewPost, Post, PostId, PostList};
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use tracing::debug;
use url::Url;

pub const POSTS_PATH: &str = "/api/posts";
pub const DELETE_POST_PATH: &str = "/api/delete_post";
pub const CREATE_POST_PATH: &str = "/api/create_post";

#[derive(Debug, Clone)]
pub struct FeedClient {
    config: FeedConfig,
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// URL of the posts listing. An empty filter adds no query string.
    pub fn posts_url(&self, privacy: Option<&str>) -> Result<Url> {
        let mut url = self.config.endpoint(POSTS_PATH)?;
        if let Some(privacy) = privacy.filter(|p| !p.is_empty()) {
            url.query_pairs_mut().append_pair("privacy", privacy);
        }
        Ok(url)
    }

    pub async fn fetch_posts(&self, privacy: Option<&str>) -> Result<Vec<Post>> {
        let url = self.posts_url(privacy)?;
        debug!("Fetching posts from {}", url);

        let response = self.client.get(url).send().await.map_err(FeedError::Fetch)?;
        let response = check_status(POSTS_PATH, response).await?;
        let list: PostList = response.json().await.map_err(FeedError::Fetch)?;

        debug!("Fetched {} posts", list.posts.len());
        Ok(list.posts)
    }

    pub async fn delete_post(&self, post_id: &PostId) -> Result<ApiMessage> {
        let url = self.config.endpoint(DELETE_POST_PATH)?;
        debug!("Deleting post {}", post_id);

        let into_err = |source| FeedError::Delete {
            post_id: post_id.clone(),
            source,
        };
        let response = self
            .client
            .post(url)
            .json(&DeletePostRequest {
                post_id: post_id.clone(),
            })
            .send()
            .await
            .map_err(into_err)?;
        let response = check_status(DELETE_POST_PATH, response).await?;
        response.json().await.map_err(into_err)
    }

    pub async fn create_post(&self, post: NewPost) -> Result<ApiMessage> {
        let url = self.config.endpoint(CREATE_POST_PATH)?;

        let mut form = Form::new()
            .text("content", post.content)
            .text("privacy", post.privacy);
        if let Some(media) = post.media {
            let kind = MediaKind::from_file_name(&media.file_name);
            debug!(
                "Attaching {} ({} bytes, {})",
                media.file_name,
                media.bytes.len(),
                kind.map(|k| k.as_str()).unwrap_or("unknown kind")
            );
            let mime = upload_mime(&media.file_name);
            let part = Part::bytes(media.bytes)
                .file_name(media.file_name)
                .mime_str(mime)
                .map_err(FeedError::Create)?;
            form = form.part("media_file", part);
        }

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(FeedError::Create)?;
        let response = check_status(CREATE_POST_PATH, response).await?;
        response.json().await.map_err(FeedError::Create)
    }
}

async fn check_status(endpoint: &'static str, response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!("Could not read {} error body: {}", endpoint, e);
            String::new()
        }
    };
    Err(FeedError::Status {
        endpoint,
        status,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaUpload;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> FeedClient {
        FeedClient::new(FeedConfig::new(&server.url()).unwrap())
    }

    #[test]
    fn posts_url_appends_filter_only_when_present() {
        let client = FeedClient::new(FeedConfig::new("http://localhost:5000").unwrap());
        assert_eq!(
            client.posts_url(Some("friends")).unwrap().as_str(),
            "http://localhost:5000/api/posts?privacy=friends"
        );
        assert_eq!(
            client.posts_url(None).unwrap().as_str(),
            "http://localhost:5000/api/posts"
        );
        assert_eq!(
            client.posts_url(Some("")).unwrap().as_str(),
            "http://localhost:5000/api/posts"
        );
    }

    #[tokio::test]
    async fn fetch_posts_sends_privacy_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/posts")
            .match_query(Matcher::UrlEncoded("privacy".into(), "friends".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "posts": [{
                        "id": 1,
                        "content": "hello",
                        "privacy": "friends",
                        "created_at": "2023-07-01 10:00:00",
                        "media_data": null
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let posts = client_for(&server).fetch_posts(Some("friends")).await.unwrap();
        mock.assert_async().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "hello");
    }

    #[tokio::test]
    async fn fetch_posts_reports_server_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/posts")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let result = client_for(&server).fetch_posts(None).await;
        match result {
            Err(FeedError::Status { status, body, .. }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_posts_rejects_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/posts")
            .with_status(200)
            .with_body("<html>nope</html>")
            .create_async()
            .await;

        let result = client_for(&server).fetch_posts(None).await;
        assert!(matches!(result, Err(FeedError::Fetch(_))), "{result:?}");
    }

    #[tokio::test]
    async fn delete_post_posts_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/delete_post")
            .match_body(Matcher::Json(json!({ "post_id": 42 })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Post deleted"}"#)
            .create_async()
            .await;

        let reply = client_for(&server).delete_post(&PostId::Int(42)).await.unwrap();
        mock.assert_async().await;
        assert_eq!(reply.message, "Post deleted");
    }

    #[tokio::test]
    async fn create_post_sends_multipart_form() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/create_post")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".into()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="content"\r\n\r\nsunny day"#.into()),
                Matcher::Regex(r#"name="privacy"\r\n\r\npublic"#.into()),
                Matcher::Regex(r#"name="media_file"; filename="beach.png""#.into()),
                Matcher::Regex("Content-Type: image/png".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Post created successfully!"}"#)
            .create_async()
            .await;

        let reply = client_for(&server)
            .create_post(NewPost {
                content: "sunny day".to_string(),
                privacy: "public".to_string(),
                media: Some(MediaUpload {
                    file_name: "beach.png".to_string(),
                    bytes: b"not really a png".to_vec(),
                }),
            })
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(reply.message, "Post created successfully!");
    }
}
