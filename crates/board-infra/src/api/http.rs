//! REST adapter for the posts backend, built on reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use board_core::ApiError;
use board_core::domain::{Post, PostDraft, PostId};
use board_core::ports::PostApi;
use board_shared::{ErrorBody, PostRequest, PostResponse};

/// Collection path on the backend.
const POSTS_PATH: &str = "/api/posts";

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// `PostApi` over HTTP. One shared connection pool; no retries.
#[derive(Debug, Clone)]
pub struct HttpPostApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpPostApi {
    pub fn new(config: &HttpApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}{}", self.base_url, POSTS_PATH, suffix)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::detail);
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

fn to_post(response: PostResponse) -> Post {
    Post {
        id: PostId::new(response.id),
        title: response.title,
        content: response.content,
        author: response.author,
        created_at: response.created_at,
        updated_at: response.updated_at,
    }
}

fn to_request(draft: &PostDraft) -> PostRequest {
    PostRequest {
        title: draft.title().to_string(),
        content: draft.content().to_string(),
        author: draft.author().to_string(),
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        tracing::debug!("Fetching post list");
        let response = self.send(self.client.get(self.url(""))).await?;
        let posts: Vec<PostResponse> = self.decode(response).await?;
        Ok(posts.into_iter().map(to_post).collect())
    }

    async fn get(&self, id: PostId) -> Result<Post, ApiError> {
        tracing::debug!(post_id = %id, "Fetching post");
        let response = self
            .send(self.client.get(self.url(&format!("/{id}"))))
            .await?;
        self.decode(response).await.map(to_post)
    }

    async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        tracing::debug!("Creating post");
        let request = self.client.post(self.url("")).json(&to_request(draft));
        let response = self.send(request).await?;
        let post = self.decode(response).await.map(to_post)?;
        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    async fn update(&self, id: PostId, draft: &PostDraft) -> Result<Post, ApiError> {
        tracing::debug!(post_id = %id, "Updating post");
        let request = self
            .client
            .put(self.url(&format!("/{id}")))
            .json(&to_request(draft));
        let response = self.send(request).await?;
        self.decode(response).await.map(to_post)
    }

    async fn delete(&self, id: PostId) -> Result<(), ApiError> {
        tracing::debug!(post_id = %id, "Deleting post");
        // Any 2xx counts; the body is ignored.
        self.send(self.client.delete(self.url(&format!("/{id}"))))
            .await?;
        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    async fn health(&self) -> Result<(), ApiError> {
        self.send(self.client.get(self.url("/health"))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const POST_ONE: &str = r#"{"id":1,"title":"Hello","content":"World","author":"Alice","createdAt":"2024-01-05T15:04:05","updatedAt":"2024-01-05T15:04:05"}"#;

    fn api(server: &mockito::ServerGuard) -> HttpPostApi {
        HttpPostApi::new(&HttpApiConfig {
            base_url: format!("{}/", server.url()),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    #[test]
    fn test_default_config_targets_local_backend() {
        let config = HttpApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_list_keeps_server_order() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/posts")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                {"id":9,"title":"newer","content":"c","author":"a","createdAt":"2024-02-01T00:00:00"},
                {"id":3,"title":"older","content":"c","author":"a","createdAt":"2024-01-01T00:00:00"}
            ]"#,
            )
            .create_async()
            .await;

        let posts = api(&server).list().await.unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/posts/999")
            .with_status(404)
            .create_async()
            .await;

        let err = api(&server).get(PostId::new(999)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_carries_detail() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/posts/5")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":500,"error":"Internal Server Error","message":"Post missing"}"#)
            .create_async()
            .await;

        match api(&server).get(PostId::new(5)).await.unwrap_err() {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail.as_deref(), Some("Post missing"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_sends_three_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/posts")
            .match_body(Matcher::Json(json!({
                "title": "Hello",
                "content": "World",
                "author": "Alice"
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(POST_ONE)
            .create_async()
            .await;

        let draft = PostDraft::new("Hello", "World", "Alice").unwrap();
        let post = api(&server).create(&draft).await.unwrap();

        mock.assert_async().await;
        assert_eq!(post.id, PostId::new(1));
        assert_eq!(post.author, "Alice");
    }

    #[tokio::test]
    async fn test_update_sends_author() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/posts/1")
            .match_body(Matcher::Json(json!({
                "title": "Hello",
                "content": "Updated",
                "author": "Alice"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(POST_ONE.replace("World", "Updated"))
            .create_async()
            .await;

        let draft = PostDraft::new("Hello", "Updated", "Alice").unwrap();
        let post = api(&server).update(PostId::new(1), &draft).await.unwrap();

        mock.assert_async().await;
        assert_eq!(post.content, "Updated");
    }

    #[tokio::test]
    async fn test_delete_ignores_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/posts/1")
            .with_status(204)
            .create_async()
            .await;

        api(&server).delete(PostId::new(1)).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/posts")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = api(&server).list().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        // Accepts connections at the kernel level but never answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let api = HttpPostApi::new(&HttpApiConfig {
            base_url: format!("http://{addr}"),
            timeout: Duration::from_millis(200),
        })
        .unwrap();

        let err = api.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout(_)));
        drop(listener);
    }

    #[tokio::test]
    async fn test_health() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/posts/health")
            .with_status(200)
            .with_body("OK")
            .create_async()
            .await;

        assert!(api(&server).health().await.is_ok());
    }
}
