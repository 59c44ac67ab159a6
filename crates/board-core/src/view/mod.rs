//! Page view states.
//!
//! Each page turns the outcome of its backend call into one of these
//! serializable states; templates render them without further logic.

mod board;
mod detail;
mod form;
mod list;
mod notice;
mod route;

pub use board::{BoardCard, BoardPage};
pub use detail::{DetailPage, PostView};
pub use form::{FormMode, FormPage, PostForm};
pub use list::{ListPage, PostRow, display_number};
pub use notice::Notice;
pub use route::Route;

/// Banner text when the collection cannot be fetched.
pub const LIST_LOAD_FAILED: &str = "Could not load posts.";

/// Spinner captions shown while the backend call is in flight.
pub const LOADING_POSTS: &str = "Loading posts...";
pub const LOADING_POST: &str = "Loading the post...";
