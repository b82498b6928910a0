//! HTML rendering for the reference site.
//!
//! Every page shares one layout: navbar on top, search sidebar on the left,
//! page content on the right. Markup is built with maud, which escapes every
//! spliced value. The page renderers return finished documents as strings so
//! the same code backs both the live server and the static exporter.

mod navbar;
mod pages;
mod sidebar;

pub use pages::{render_endpoint_detail, render_endpoint_list, render_home, render_not_found};

use maud::{html, Markup, PreEscaped, DOCTYPE};

use apidocs_core::{Catalog, HttpMethod, SearchQuery, SiteConfig};

/// Embedded stylesheet, inlined into every page
const STYLESHEET: &str = include_str!("style.css");

/// Everything a page needs besides its own content.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub site: &'a SiteConfig,
    /// Raw sidebar query as typed by the reader
    pub query: &'a str,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, site: &'a SiteConfig, query: &'a str) -> Self {
        Self { catalog, site, query }
    }

    fn search(&self) -> SearchQuery {
        SearchQuery::new(self.query)
    }

    fn endpoint_link(&self, id: &str) -> String {
        self.site.link(&format!("/api/{id}"))
    }
}

fn method_badge(method: HttpMethod) -> Markup {
    html! {
        span class={ "badge " (method.css_class()) } { (method.as_str()) }
    }
}

fn icon(name: &str) -> Markup {
    html! { span.icon data-icon=(name) {} }
}

fn layout(ctx: &RenderContext<'_>, page_title: &str, content: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title {
                    @if !page_title.is_empty() {
                        (page_title) " | "
                    }
                    (ctx.site.title)
                }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (navbar::render_navbar(ctx))
                div.shell {
                    (sidebar::render_sidebar(ctx))
                    main.content { (content) }
                }
            }
        }
    }
    .into_string()
}
