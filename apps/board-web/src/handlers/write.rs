//! Create/edit form - one component, mode chosen by the route id.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use board_core::view::{FormMode, FormPage, LOADING_POST, Notice, PostForm, Route};

use super::{html_page, parse_id, see_other};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{RedirectPage, stream_page};

/// GET /write
pub async fn new_post(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render_form(&state, FormMode::Create, PostForm::default(), None, StatusCode::OK)
}

/// GET /edit/{id}
///
/// Streams a spinner while the post loads. A failed load alerts and sends
/// the user back to the list; there is no form worth keeping.
pub async fn edit_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        let html = state.views.page("Edit post", "redirect.html", &load_failed())?;
        return Ok(html_page(StatusCode::OK, html));
    };

    let shell = state.views.shell("Edit post", LOADING_POST)?;
    let state = state.into_inner();

    Ok(stream_page(shell, async move {
        match state.api.get(id).await {
            Ok(post) => {
                let page = FormPage::new(FormMode::Edit(id), PostForm::from_post(&post), None);
                state.views.resolved("write.html", &page)
            }
            Err(e) => {
                tracing::warn!(post_id = %id, error = %e, "Failed to load post for editing");
                state.views.resolved("redirect.html", &load_failed())
            }
        }
    }))
}

/// POST /write
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    submit(&state, FormMode::Create, form.into_inner()).await
}

/// POST /edit/{id}
///
/// The author arrives through a hidden field holding the loaded value; the
/// visible author input is disabled and never submitted.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return Ok(see_other(Route::List.path()));
    };
    submit(&state, FormMode::Edit(id), form.into_inner()).await
}

async fn submit(state: &AppState, mode: FormMode, form: PostForm) -> AppResult<HttpResponse> {
    let draft = match form.draft() {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected post form");
            return render_form(
                state,
                mode,
                form,
                Some(Notice::FieldsRequired),
                StatusCode::UNPROCESSABLE_ENTITY,
            );
        }
    };

    let result = match mode {
        FormMode::Create => state.api.create(&draft).await,
        FormMode::Edit(id) => state.api.update(id, &draft).await,
    };

    match result {
        Ok(_) => Ok(see_other(mode.exit().path())),
        Err(e) => {
            tracing::warn!(error = %e, edit = mode.is_edit(), "Failed to save post");
            render_form(
                state,
                mode,
                form,
                Some(mode.failure_notice()),
                StatusCode::BAD_GATEWAY,
            )
        }
    }
}

fn render_form(
    state: &AppState,
    mode: FormMode,
    form: PostForm,
    notice: Option<Notice>,
    status: StatusCode,
) -> AppResult<HttpResponse> {
    let page = FormPage::new(mode, form, notice);
    let html = state.views.page(page.heading, "write.html", &page)?;
    Ok(html_page(status, html))
}

fn load_failed() -> RedirectPage {
    RedirectPage {
        message: Notice::LoadFailed.message().to_string(),
        target: Route::List.path(),
    }
}
