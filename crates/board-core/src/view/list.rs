use serde::Serialize;

use crate::domain::Post;
use crate::error::ApiError;

use super::{LIST_LOAD_FAILED, Route};

/// Descending display number for the row at `index` in a list of `total`.
///
/// Independent of the post id.
pub fn display_number(total: usize, index: usize) -> usize {
    total.saturating_sub(index)
}

/// One table row of the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRow {
    pub number: usize,
    pub href: String,
    pub title: String,
    pub author: String,
    pub date: String,
}

/// Settled state of the list page.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub count: usize,
    pub rows: Vec<PostRow>,
    pub empty: bool,
    pub error: Option<String>,
    pub write_href: String,
}

impl ListPage {
    pub fn loaded(posts: &[Post]) -> Self {
        let total = posts.len();
        let rows = posts
            .iter()
            .enumerate()
            .map(|(index, post)| PostRow {
                number: display_number(total, index),
                href: Route::Detail(post.id).path(),
                title: post.title.clone(),
                author: post.author.clone(),
                date: post.short_date(),
            })
            .collect();

        Self {
            count: total,
            rows,
            empty: total == 0,
            error: None,
            write_href: Route::Write.path(),
        }
    }

    /// A failed fetch keeps nothing from earlier loads.
    pub fn failed() -> Self {
        Self {
            count: 0,
            rows: Vec::new(),
            empty: false,
            error: Some(LIST_LOAD_FAILED.to_string()),
            write_href: Route::Write.path(),
        }
    }

    pub fn from_result(result: Result<Vec<Post>, ApiError>) -> Self {
        match result {
            Ok(posts) => Self::loaded(&posts),
            Err(_) => Self::failed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostId;
    use chrono::NaiveDate;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id: PostId::new(id),
            title: title.to_string(),
            content: "body".to_string(),
            author: "Alice".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_display_number_descends() {
        assert_eq!(display_number(5, 0), 5);
        assert_eq!(display_number(5, 4), 1);
    }

    #[test]
    fn test_rows_keep_backend_order_and_ignore_ids() {
        let posts = vec![post(42, "newest"), post(7, "middle"), post(99, "oldest")];
        let page = ListPage::loaded(&posts);

        let titles: Vec<&str> = page.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);

        let numbers: Vec<usize> = page.rows.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);

        assert_eq!(page.rows[0].href, "/post/42");
        assert_eq!(page.rows[0].date, "2024.03.09");
        assert_eq!(page.count, 3);
        assert!(!page.empty);
    }

    #[test]
    fn test_empty_collection() {
        let page = ListPage::loaded(&[]);
        assert!(page.empty);
        assert!(page.rows.is_empty());
        assert_eq!(page.error, None);
    }

    #[test]
    fn test_failure_clears_rows() {
        let page = ListPage::from_result(Err(ApiError::Transport("refused".into())));
        assert_eq!(page.error.as_deref(), Some(LIST_LOAD_FAILED));
        assert!(page.rows.is_empty());
        assert!(!page.empty);
    }
}
