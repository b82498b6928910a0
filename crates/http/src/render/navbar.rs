use apidocs_core::Category;
use maud::{html, Markup};

use super::{icon, RenderContext};

struct NavItem {
    name: &'static str,
    href: String,
    icon: &'static str,
}

/// Home and API Reference are fixed. Authentication points at the first
/// endpoint of its sidebar group and is dropped when that group is empty.
fn nav_items(ctx: &RenderContext<'_>) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { name: "Home", href: ctx.site.link("/"), icon: "home" },
        NavItem { name: "API Reference", href: ctx.site.link("/api"), icon: "book" },
    ];
    let first_auth = ctx
        .catalog
        .iter()
        .find(|endpoint| Category::Authentication.matches(&endpoint.id));
    if let Some(endpoint) = first_auth {
        items.push(NavItem {
            name: "Authentication",
            href: ctx.endpoint_link(&endpoint.id),
            icon: Category::Authentication.icon(),
        });
    }
    items
}

pub(super) fn render_navbar(ctx: &RenderContext<'_>) -> Markup {
    html! {
        header.navbar {
            a.brand href=(ctx.site.link("/")) { (ctx.site.title) }
            nav.nav-items {
                @for item in nav_items(ctx) {
                    a.nav-item href=(item.href) {
                        (icon(item.icon))
                        span { (item.name) }
                    }
                }
            }
        }
    }
}
