//! HTML rendering - Tera templates compiled into the binary.
//!
//! Pages that wait on the backend are streamed in two chunks: the shell
//! (head plus spinner) goes out first, the resolved content follows once the
//! backend call settles. Dropping the response body drops the pending call.

use std::convert::Infallible;
use std::future::Future;

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web::web::Bytes;
use futures::{FutureExt, StreamExt, future, stream};
use serde::Serialize;
use tera::{Context, Tera};

const SITE_NAME: &str = "Community Board";

/// Hides the spinner once the resolved chunk arrives.
const RESOLVED: &str = "<style>.page-loading{display:none}</style>";
const FOOT: &str = "</div>\n</body>\n</html>\n";

/// Shown when a streamed fragment fails to render after the shell went out.
const FRAGMENT_FAILED: &str =
    "<div class=\"error-message\">Something went wrong. Please reload the page.</div>";

const TEMPLATES: [(&str, &str); 10] = [
    ("head.html", include_str!("../templates/head.html")),
    ("spinner.html", include_str!("../templates/spinner.html")),
    ("alert.html", include_str!("../templates/alert.html")),
    ("list.html", include_str!("../templates/list.html")),
    ("detail.html", include_str!("../templates/detail.html")),
    ("write.html", include_str!("../templates/write.html")),
    ("board.html", include_str!("../templates/board.html")),
    ("redirect.html", include_str!("../templates/redirect.html")),
    ("error.html", include_str!("../templates/error.html")),
    ("status.html", include_str!("../templates/status.html")),
];

#[derive(Serialize)]
struct Head<'a> {
    title: &'a str,
    site: &'a str,
}

#[derive(Serialize)]
struct Spinner<'a> {
    caption: &'a str,
}

/// Alert followed by an immediate client-side redirect.
#[derive(Debug, Serialize)]
pub struct RedirectPage {
    pub message: String,
    pub target: String,
}

/// Template registry.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera })
    }

    fn render<C: Serialize>(&self, name: &str, page: &C) -> Result<String, tera::Error> {
        let context = Context::from_serialize(page)?;
        self.tera.render(name, &context)
    }

    fn head(&self, title: &str) -> Result<String, tera::Error> {
        self.render(
            "head.html",
            &Head {
                title,
                site: SITE_NAME,
            },
        )
    }

    /// A complete page rendered in one go.
    pub fn page<C: Serialize>(
        &self,
        title: &str,
        name: &str,
        page: &C,
    ) -> Result<String, tera::Error> {
        let mut html = self.head(title)?;
        html.push_str(&self.render(name, page)?);
        html.push_str(FOOT);
        Ok(html)
    }

    /// First chunk of a streamed page: head and spinner.
    pub fn shell(&self, title: &str, caption: &str) -> Result<String, tera::Error> {
        let mut html = self.head(title)?;
        html.push_str(&self.render("spinner.html", &Spinner { caption })?);
        Ok(html)
    }

    /// Second chunk of a streamed page. The shell is already on the wire, so
    /// a render failure degrades to an inline message instead of an error status.
    pub fn resolved<C: Serialize>(&self, name: &str, page: &C) -> String {
        let body = self.render(name, page).unwrap_or_else(|e| {
            tracing::error!(template = name, error = %e, "Failed to render fragment");
            FRAGMENT_FAILED.to_string()
        });
        format!("{RESOLVED}{body}{FOOT}")
    }
}

/// Send `shell` now and the output of `rest` when it completes.
pub fn stream_page<F>(shell: String, rest: F) -> HttpResponse
where
    F: Future<Output = String> + 'static,
{
    let head = stream::once(future::ready(Ok::<_, Infallible>(Bytes::from(shell))));
    let tail = stream::once(rest.map(|html| Ok::<_, Infallible>(Bytes::from(html))));

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .streaming(head.chain(tail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::view::{FormMode, FormPage, ListPage, PostForm};

    #[test]
    fn test_templates_parse() {
        assert!(Views::new().is_ok());
    }

    #[test]
    fn test_shell_contains_spinner() {
        let views = Views::new().unwrap();
        let html = views.shell("Posts", "Loading posts...").unwrap();
        assert!(html.contains("page-loading"));
        assert!(html.contains("Loading posts..."));
        assert!(!html.contains("</html>"));
    }

    #[test]
    fn test_resolved_hides_spinner_and_closes_page() {
        let views = Views::new().unwrap();
        let html = views.resolved("list.html", &ListPage::loaded(&[]));
        assert!(html.starts_with(RESOLVED));
        assert!(html.ends_with(FOOT));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let views = Views::new().unwrap();
        let form = PostForm {
            title: "<script>x</script>".to_string(),
            ..PostForm::default()
        };
        let html = views
            .page("New post", "write.html", &FormPage::new(FormMode::Create, form, None))
            .unwrap();
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
