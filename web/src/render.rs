//! HTML rendering with Tera.
//!
//! Templates are compiled once at startup from sources embedded in the
//! binary, so a missing or malformed template fails the boot rather than a
//! request.

use crate::WebResult;
use axum::response::Html;
use listkeeper_core::effect::Notice;
use tera::{Context, Tera};

/// Context key under which notices are exposed to templates.
pub const NOTICES_KEY: &str = "notices";

/// Compiled template set shared by all handlers.
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compile `(name, source)` pairs.
    ///
    /// Names ending in `.html` are auto-escaped. Templates may extend each
    /// other regardless of the order they are given in.
    ///
    /// # Errors
    ///
    /// Returns the Tera error if any template fails to parse or references a
    /// parent that was not supplied.
    pub fn from_sources<I>(sources: I) -> tera::Result<Self>
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(sources)?;
        Ok(Self { tera })
    }

    /// Render `name` with `context`, adding `notices` for the flash area.
    ///
    /// # Errors
    ///
    /// Returns an internal [`AppError`](crate::AppError) if rendering fails.
    pub fn render(&self, name: &str, mut context: Context, notices: &[Notice]) -> WebResult<Html<String>> {
        context.insert(NOTICES_KEY, notices);
        let html = self.tera.render(name, &context)?;
        Ok(Html(html))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const LAYOUT: &str = "<main>{% for n in notices %}<p class=\"{{ n.level }}\">{{ n.message }}</p>{% endfor %}{% block body %}{% endblock %}</main>";
    const PAGE: &str = "{% extends \"layout.html\" %}{% block body %}<h1>{{ title }}</h1>{% endblock %}";

    fn templates() -> Templates {
        Templates::from_sources([("page.html", PAGE), ("layout.html", LAYOUT)]).unwrap()
    }

    #[test]
    fn renders_inherited_template_with_notices() {
        let mut context = Context::new();
        context.insert("title", "Groceries");

        let Html(html) = templates()
            .render("page.html", context, &[Notice::success("Saved.")])
            .unwrap();

        assert_eq!(html, "<main><p class=\"success\">Saved.</p><h1>Groceries</h1></main>");
    }

    #[test]
    fn escapes_user_input() {
        let mut context = Context::new();
        context.insert("title", "<b>bold</b>");

        let Html(html) = templates().render("page.html", context, &[]).unwrap();
        assert!(html.contains("&lt;b&gt;bold&lt;&#x2F;b&gt;"));
    }

    #[test]
    fn unknown_template_is_internal_error() {
        let err = templates().render("missing.html", Context::new(), &[]).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_parent_fails_compilation() {
        assert!(Templates::from_sources([("page.html", PAGE)]).is_err());
    }
}
