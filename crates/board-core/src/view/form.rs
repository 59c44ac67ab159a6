use serde::{Deserialize, Serialize};

use crate::domain::{Post, PostDraft, PostId};
use crate::error::DomainError;

use super::{Notice, Route};

/// Label of the submit control while a request is outstanding.
const BUSY_LABEL: &str = "Processing...";

/// Create vs edit. `/edit/{id}` carries the id of the post being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PostId),
}

impl FormMode {
    pub fn is_edit(self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// Where the form posts to.
    pub fn action(self) -> Route {
        match self {
            FormMode::Create => Route::Write,
            FormMode::Edit(id) => Route::Edit(id),
        }
    }

    /// Where cancel leads; also where a successful submit lands.
    pub fn exit(self) -> Route {
        match self {
            FormMode::Create => Route::List,
            FormMode::Edit(id) => Route::Detail(id),
        }
    }

    pub fn failure_notice(self) -> Notice {
        match self {
            FormMode::Create => Notice::CreateFailed,
            FormMode::Edit(_) => Notice::UpdateFailed,
        }
    }

    fn heading(self) -> &'static str {
        match self {
            FormMode::Create => "New post",
            FormMode::Edit(_) => "Edit post",
        }
    }

    fn subheading(self) -> &'static str {
        match self {
            FormMode::Create => "Share something new with the board",
            FormMode::Edit(_) => "Update the content of your post",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            FormMode::Create => "Publish",
            FormMode::Edit(_) => "Save changes",
        }
    }
}

/// Raw form input exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl PostForm {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
        }
    }

    /// Validate into a draft; blank fields never reach the backend.
    pub fn draft(&self) -> Result<PostDraft, DomainError> {
        PostDraft::new(
            self.title.clone(),
            self.content.clone(),
            self.author.clone(),
        )
    }
}

/// Render state of the create/edit form.
#[derive(Debug, Clone, Serialize)]
pub struct FormPage {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub form: PostForm,
    pub author_disabled: bool,
    pub action: String,
    pub cancel_href: String,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub alert: Option<String>,
}

impl FormPage {
    pub fn new(mode: FormMode, form: PostForm, notice: Option<Notice>) -> Self {
        Self {
            heading: mode.heading(),
            subheading: mode.subheading(),
            form,
            author_disabled: mode.is_edit(),
            action: mode.action().path(),
            cancel_href: mode.exit().path(),
            submit_label: mode.submit_label(),
            busy_label: BUSY_LABEL,
            alert: notice.map(|n| n.message().to_string()),
        }
    }
}
