//! HTTP handlers and route configuration.

mod assets;
mod board;
mod detail;
mod health;
mod list;
mod write;


use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, web};

use board_core::domain::PostId;
use board_core::view::Notice;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Pages
        .route("/", web::get().to(list::list_posts))
        .route("/post/{id}", web::get().to(detail::show_post))
        .service(
            web::resource("/write")
                .route(web::get().to(write::new_post))
                .route(web::post().to(write::create_post)),
        )
        .service(
            web::resource("/edit/{id}")
                .route(web::get().to(write::edit_post))
                .route(web::post().to(write::update_post)),
        )
        // Actions
        .route("/post/{id}/delete", web::post().to(detail::delete_post))
        // Combined board
        .service(
            web::resource("/board")
                .route(web::get().to(board::show_board))
                .route(web::post().to(board::create_from_board)),
        )
        .route("/board/{id}/delete", web::post().to(board::delete_from_board))
        // Support
        .route("/health", web::get().to(health::health_check))
        .route("/static/board.css", web::get().to(assets::stylesheet))
        .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(req.path().to_string()))
}

/// One-time notice carried across a redirect.
pub const NOTICE_COOKIE: &str = "board_notice";

fn notice_cookie(value: &'static str) -> Cookie<'static> {
    Cookie::build(NOTICE_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// 303 so the browser follows up with a GET.
pub fn see_other(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}

/// 303 that leaves a notice for the next page load only.
pub fn see_other_with_notice(location: impl AsRef<str>, notice: Notice) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.as_ref()))
        .cookie(notice_cookie(notice.code()))
        .finish()
}

/// Pending notice, if the previous response left one. Unknown codes are ignored.
pub fn pending_notice(req: &HttpRequest) -> Option<Notice> {
    req.cookie(NOTICE_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Expire the notice cookie so a reload does not show the notice again.
pub fn consume_notice(response: &mut HttpResponse) {
    if let Err(e) = response.add_removal_cookie(&notice_cookie("")) {
        tracing::warn!(error = %e, "Failed to clear notice cookie");
    }
}

/// A fully rendered page with the given status.
pub fn html_page(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

pub fn parse_id(raw: &str) -> Option<PostId> {
    raw.parse().ok()
}
