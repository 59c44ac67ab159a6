//! List page.

use actix_web::{HttpResponse, web};

use board_core::view::{LOADING_POSTS, ListPage};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::stream_page;

/// GET /
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let shell = state.views.shell("Posts", LOADING_POSTS)?;
    let state = state.into_inner();

    Ok(stream_page(shell, async move {
        let result = state.api.list().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Failed to fetch posts");
        }
        state.views.resolved("list.html", &ListPage::from_result(result))
    }))
}
