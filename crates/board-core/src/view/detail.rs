use serde::Serialize;

use crate::domain::Post;
use crate::error::ApiError;

use super::{Notice, Route};

const POST_NOT_FOUND: &str = "Post not found.";

/// A loaded post as rendered by the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub author: String,
    pub created: String,
    pub edited: Option<String>,
    pub content: String,
    pub edit_href: String,
    pub delete_action: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            author: post.author.clone(),
            created: post.full_date(),
            edited: post.edited_date(),
            content: post.content.clone(),
            edit_href: Route::Edit(post.id).path(),
            delete_action: Route::Delete(post.id).path(),
        }
    }
}

/// Settled state of the detail page: a post, or an error panel.
#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub post: Option<PostView>,
    pub error: Option<String>,
    pub alert: Option<String>,
    pub list_href: String,
}

impl DetailPage {
    pub fn loaded(post: &Post, notice: Option<Notice>) -> Self {
        Self {
            post: Some(PostView::from(post)),
            error: None,
            alert: notice.map(|n| n.message().to_string()),
            list_href: Route::List.path(),
        }
    }

    pub fn failed(err: &ApiError) -> Self {
        let message = if err.is_not_found() {
            POST_NOT_FOUND
        } else {
            Notice::LoadFailed.message()
        };
        Self {
            post: None,
            error: Some(message.to_string()),
            alert: None,
            list_href: Route::List.path(),
        }
    }

    /// Route ids that do not parse never reach the backend.
    pub fn invalid_id() -> Self {
        Self::failed(&ApiError::NotFound)
    }

    pub fn from_result(result: Result<Post, ApiError>, notice: Option<Notice>) -> Self {
        match result {
            Ok(post) => Self::loaded(&post, notice),
            Err(err) => Self::failed(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostId;
    use chrono::NaiveDate;

    fn post() -> Post {
        Post {
            id: PostId::new(1),
            title: "Hello".to_string(),
            content: "World".to_string(),
            author: "Alice".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(15, 4, 0)
                .unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_loaded_page_links_actions() {
        let page = DetailPage::loaded(&post(), None);
        let view = page.post.unwrap();
        assert_eq!(view.edit_href, "/edit/1");
        assert_eq!(view.delete_action, "/post/1/delete");
        assert_eq!(view.created, "January 5, 2024, 03:04 PM");
        assert!(page.alert.is_none());
    }

    #[test]
    fn test_delete_failure_keeps_post_and_alerts() {
        let page = DetailPage::loaded(&post(), Some(Notice::DeleteFailed));
        assert!(page.post.is_some());
        assert_eq!(page.alert.as_deref(), Some("Failed to delete the post."));
    }

    #[test]
    fn test_not_found_panel() {
        let page = DetailPage::from_result(Err(ApiError::NotFound), None);
        assert!(page.post.is_none());
        assert_eq!(page.error.as_deref(), Some(POST_NOT_FOUND));
        assert_eq!(page.list_href, "/");
    }

    #[test]
    fn test_other_failures_use_generic_message() {
        let page = DetailPage::failed(&ApiError::Status {
            status: 500,
            detail: None,
        });
        assert_eq!(page.error.as_deref(), Some("Could not load the post."));
    }
}
