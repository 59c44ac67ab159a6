//! Backend port - the five post operations plus a health probe.

use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::ApiError;

/// Post collection exposed by the backend collaborator.
///
/// Implementations never retry; every failure goes back to the caller.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// All posts, in the order the backend returns them.
    async fn list(&self) -> Result<Vec<Post>, ApiError>;

    /// A single post, or `ApiError::NotFound`.
    async fn get(&self, id: PostId) -> Result<Post, ApiError>;

    /// Create a post; the backend assigns id and timestamps.
    async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError>;

    /// Replace title, content and author of an existing post.
    async fn update(&self, id: PostId, draft: &PostDraft) -> Result<Post, ApiError>;

    async fn delete(&self, id: PostId) -> Result<(), ApiError>;

    /// Probe the backend's health endpoint.
    async fn health(&self) -> Result<(), ApiError>;
}
