use apidocs_core::{Category, EndpointDescriptor};
use maud::{html, Markup};

use super::{layout, method_badge, RenderContext};

const WELCOME_TEXT: &str = "This documentation provides detailed information about our API \
endpoints, including request and response examples, authentication details, and usage \
guidelines. Use the sidebar to navigate through available endpoints.";

fn card(heading: Markup, body: Markup) -> Markup {
    html! {
        section.card {
            h3 { (heading) }
            (body)
        }
    }
}

fn code_block(code: &str, language: &str) -> Markup {
    html! {
        pre.code-block { code class={ "language-" (language) } { (code) } }
    }
}

/// Fixed welcome document served at `/`.
pub fn render_home(ctx: &RenderContext<'_>) -> String {
    let content = html! {
        h1 { "API Documentation" }
        (card(html! { "Welcome to the API Docs" }, html! { p { (WELCOME_TEXT) } }))
    };
    layout(ctx, "", content)
}

/// Every descriptor in catalog order.
pub fn render_endpoint_list(ctx: &RenderContext<'_>) -> String {
    let content = html! {
        h1 { "API Reference" }
        div.grid {
            @for endpoint in ctx.catalog {
                (card(
                    html! { a href=(ctx.endpoint_link(&endpoint.id)) { (endpoint.title) } },
                    html! {
                        p {
                            strong { (endpoint.method.as_str()) }
                            " "
                            span.path { (endpoint.path) }
                        }
                        p { (endpoint.description) }
                    },
                ))
            }
        }
    };
    layout(ctx, "API Reference", content)
}

/// Detail page for one resolved descriptor.
pub fn render_endpoint_detail(ctx: &RenderContext<'_>, endpoint: &EndpointDescriptor) -> String {
    let categories: Vec<&str> = Category::for_id(&endpoint.id).map(|c| c.label()).collect();
    let content = html! {
        h1 { (endpoint.title) }
        section.card {
            h3 { (method_badge(endpoint.method)) " " span.path { (endpoint.path) } }
            p { (endpoint.description) }
            @if !categories.is_empty() {
                p.categories { "Category: " (categories.join(", ")) }
            }
        }
        (card(html! { "Request Example" }, code_block(&endpoint.request_example, "bash")))
        (card(html! { "Response Example" }, code_block(&endpoint.response_example, "json")))
    };
    layout(ctx, &endpoint.title, content)
}

/// Generic not-found document for unknown ids and unknown paths.
pub fn render_not_found(ctx: &RenderContext<'_>) -> String {
    let content = html! {
        h1 { "404 - Not Found" }
        (card(
            html! { "This page could not be found." },
            html! { p { a href=(ctx.site.link("/api")) { "Back to the API reference" } } },
        ))
    };
    layout(ctx, "Not Found", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidocs_core::{Catalog, SiteConfig};

    #[test]
    fn home_has_welcome_card() {
        let site = SiteConfig::default();
        let html = render_home(&RenderContext::new(Catalog::builtin(), &site, ""));
        assert!(html.contains("<h1>API Documentation</h1>"));
        assert!(html.contains("Welcome to the API Docs"));
        assert!(html.contains("<title>API Docs</title>"));
    }

    #[test]
    fn list_preserves_catalog_order() {
        let site = SiteConfig::default();
        let html = render_endpoint_list(&RenderContext::new(Catalog::builtin(), &site, ""));
        let main = html.split("<main").nth(1).unwrap();
        let positions: Vec<usize> = Catalog::builtin()
            .iter()
            .map(|e| main.find(&format!(r#"href="/api/{}""#, e.id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn detail_shows_examples_escaped() {
        let site = SiteConfig::default();
        let catalog = Catalog::builtin();
        let endpoint = catalog.resolve("get-user").unwrap();
        let html = render_endpoint_detail(&RenderContext::new(catalog, &site, ""), endpoint);
        assert!(html.contains("<h1>Get User Profile</h1>"));
        assert!(html.contains(r#"<code class="language-bash">curl -X GET"#));
        assert!(html.contains("Bearer &lt;token&gt;"));
        assert!(html.contains(r#"<code class="language-json">{"#));
        assert!(html.contains("&quot;John Doe&quot;"));
        assert!(html.contains("/api/users/:id"));
        assert!(html.contains(r#"<p class="categories">Category: User</p>"#));
    }

    #[test]
    fn detail_of_uncategorized_endpoint_has_no_category_line() {
        let site = SiteConfig::default();
        let catalog = Catalog::new(vec![EndpointDescriptor::new(
            "health",
            "Health",
            apidocs_core::HttpMethod::Get,
            "/health",
            "Liveness probe.",
        )])
        .unwrap();
        let endpoint = catalog.resolve("health").unwrap();
        let html = render_endpoint_detail(&RenderContext::new(&catalog, &site, ""), endpoint);
        assert!(!html.contains(r#"class="categories""#));
    }

    #[test]
    fn not_found_links_back_to_listing() {
        let site = SiteConfig::with_base_path("/docs");
        let html = render_not_found(&RenderContext::new(Catalog::builtin(), &site, ""));
        assert!(html.contains("404 - Not Found"));
        assert!(html.contains(r#"<a href="/docs/api">Back to the API reference</a>"#));
    }
}
