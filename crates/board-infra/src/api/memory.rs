//! In-memory posts backend.
//!
//! Mirrors the collaborator's observable behaviour: sequential ids,
//! newest-first listing, not-found after delete.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use board_core::ApiError;
use board_core::domain::{Post, PostDraft, PostId};
use board_core::ports::PostApi;

struct Store {
    next_id: i64,
    posts: Vec<Post>,
}

/// `PostApi` backed by a Vec behind an async RwLock.
pub struct InMemoryPostApi {
    store: RwLock<Store>,
}

impl InMemoryPostApi {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                posts: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryPostApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostApi for InMemoryPostApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        let store = self.store.read().await;
        let mut posts = store.posts.clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn get(&self, id: PostId) -> Result<Post, ApiError> {
        let store = self.store.read().await;
        store
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let mut store = self.store.write().await;
        let now = Utc::now().naive_utc();

        let post = Post {
            id: PostId::new(store.next_id),
            title: draft.title().to_string(),
            content: draft.content().to_string(),
            author: draft.author().to_string(),
            created_at: now,
            updated_at: Some(now),
        };
        store.next_id += 1;
        store.posts.push(post.clone());

        Ok(post)
    }

    async fn update(&self, id: PostId, draft: &PostDraft) -> Result<Post, ApiError> {
        let mut store = self.store.write().await;
        let post = store
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::NotFound)?;

        post.title = draft.title().to_string();
        post.content = draft.content().to_string();
        post.author = draft.author().to_string();
        post.updated_at = Some(Utc::now().naive_utc());

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), ApiError> {
        let mut store = self.store.write().await;
        let before = store.posts.len();
        store.posts.retain(|p| p.id != id);

        if store.posts.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }

    async fn health(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PostDraft {
        PostDraft::new(title, "World", "Alice").unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let api = InMemoryPostApi::new();
        let created = api.create(&draft("Hello")).await.unwrap();
        assert_eq!(created.id, PostId::new(1));

        let fetched = api.get(created.id).await.unwrap();
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.content, "World");
        assert_eq!(fetched.author, "Alice");
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let api = InMemoryPostApi::new();
        api.create(&draft("first")).await.unwrap();
        api.create(&draft("second")).await.unwrap();

        let titles: Vec<String> = api
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let api = InMemoryPostApi::new();
        let post = api.create(&draft("Hello")).await.unwrap();

        api.delete(post.id).await.unwrap();

        assert!(api.get(post.id).await.unwrap_err().is_not_found());
        assert!(api.list().await.unwrap().is_empty());
        assert!(api.delete(post.id).await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let api = InMemoryPostApi::new();
        let err = api.update(PostId::new(3), &draft("x")).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
