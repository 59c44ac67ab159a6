use serde::Serialize;

use crate::domain::Post;
use crate::error::ApiError;

use super::{LIST_LOAD_FAILED, Notice, PostForm, Route};

/// A post card on the combined board page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardCard {
    pub title: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub delete_action: String,
}

/// Settled state of the combined list/create/delete page.
///
/// Unlike the list page, a failed fetch still renders the empty message
/// under the error banner.
#[derive(Debug, Clone, Serialize)]
pub struct BoardPage {
    pub cards: Vec<BoardCard>,
    pub error: Option<String>,
    pub form: PostForm,
    pub form_open: bool,
    pub alert: Option<String>,
    pub action: String,
}

impl BoardPage {
    pub fn new(result: Result<Vec<Post>, ApiError>) -> Self {
        let (cards, error) = match result {
            Ok(posts) => (posts.iter().map(card).collect(), None),
            Err(_) => (Vec::new(), Some(LIST_LOAD_FAILED.to_string())),
        };
        Self {
            cards,
            error,
            form: PostForm::default(),
            form_open: false,
            alert: None,
            action: Route::Board.path(),
        }
    }

    /// Re-open the inline form with what the user typed.
    pub fn with_form(mut self, form: PostForm) -> Self {
        self.form = form;
        self.form_open = true;
        self
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.alert = notice.map(|n| n.message().to_string());
        self
    }
}

fn card(post: &Post) -> BoardCard {
    BoardCard {
        title: post.title.clone(),
        author: post.author.clone(),
        date: post.timestamp(),
        content: post.content.clone(),
        delete_action: Route::BoardDelete(post.id).path(),
    }
}
