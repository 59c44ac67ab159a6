//! Detail page and its delete action.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use board_core::view::{DetailPage, LOADING_POST, Notice, Route};

use super::{consume_notice, html_page, parse_id, pending_notice, see_other, see_other_with_notice};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::stream_page;

/// GET /post/{id}
pub async fn show_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        tracing::debug!(raw_id = %path, "Detail requested for malformed id");
        let html = state
            .views
            .page("Post", "detail.html", &DetailPage::invalid_id())?;
        return Ok(html_page(StatusCode::OK, html));
    };

    let notice = pending_notice(&req);
    let shell = state.views.shell("Post", LOADING_POST)?;
    let state = state.into_inner();

    let mut response = stream_page(shell, async move {
        let result = state.api.get(id).await;
        if let Err(e) = &result {
            tracing::warn!(post_id = %id, error = %e, "Failed to fetch post");
        }
        state
            .views
            .resolved("detail.html", &DetailPage::from_result(result, notice))
    });
    if notice.is_some() {
        consume_notice(&mut response);
    }
    Ok(response)
}

/// POST /post/{id}/delete
///
/// Success lands on the list; failure returns to the detail page with an alert.
pub async fn delete_post(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return see_other(Route::List.path());
    };

    match state.api.delete(id).await {
        Ok(()) => see_other(Route::List.path()),
        Err(e) => {
            tracing::warn!(post_id = %id, error = %e, "Failed to delete post");
            see_other_with_notice(Route::Detail(id).path(), Notice::DeleteFailed)
        }
    }
}
