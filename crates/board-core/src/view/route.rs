use std::fmt;

use crate::domain::PostId;

/// Every location the client links or redirects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(PostId),
    Write,
    Edit(PostId),
    Delete(PostId),
    Board,
    BoardDelete(PostId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/post/{id}"),
            Route::Write => "/write".to_string(),
            Route::Edit(id) => format!("/edit/{id}"),
            Route::Delete(id) => format!("/post/{id}/delete"),
            Route::Board => "/board".to_string(),
            Route::BoardDelete(id) => format!("/board/{id}/delete"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
