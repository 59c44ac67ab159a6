//! Combined board page - list, inline create form and delete on one page.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use board_core::ApiError;
use board_core::domain::Post;
use board_core::view::{BoardPage, LOADING_POSTS, Notice, PostForm, Route};

use super::{consume_notice, html_page, parse_id, pending_notice, see_other, see_other_with_notice};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::stream_page;

const TITLE: &str = "Board";

/// GET /board
pub async fn show_board(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let notice = pending_notice(&req);
    let shell = state.views.shell(TITLE, LOADING_POSTS)?;
    let state = state.into_inner();

    let mut response = stream_page(shell, async move {
        let page = BoardPage::new(fetch(&state).await).with_notice(notice);
        state.views.resolved("board.html", &page)
    });
    if notice.is_some() {
        consume_notice(&mut response);
    }
    Ok(response)
}

/// POST /board
///
/// A rejected or failed submission re-renders the board with the form open
/// and the typed values intact.
pub async fn create_from_board(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let (notice, status) = match form.draft() {
        Ok(draft) => match state.api.create(&draft).await {
            Ok(_) => return Ok(see_other(Route::Board.path())),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create post from board");
                (Notice::CreateFailed, StatusCode::BAD_GATEWAY)
            }
        },
        Err(_) => (Notice::FieldsRequired, StatusCode::UNPROCESSABLE_ENTITY),
    };

    let page = BoardPage::new(fetch(&state).await)
        .with_form(form)
        .with_notice(Some(notice));
    let html = state.views.page(TITLE, "board.html", &page)?;
    Ok(html_page(status, html))
}

/// POST /board/{id}/delete
pub async fn delete_from_board(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let Some(id) = parse_id(&path) else {
        return see_other(Route::Board.path());
    };

    match state.api.delete(id).await {
        Ok(()) => see_other(Route::Board.path()),
        Err(e) => {
            tracing::warn!(post_id = %id, error = %e, "Failed to delete post from board");
            see_other_with_notice(Route::Board.path(), Notice::DeleteFailed)
        }
    }
}

async fn fetch(state: &AppState) -> Result<Vec<Post>, ApiError> {
    let result = state.api.list().await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Failed to fetch posts for board");
    }
    result
}
