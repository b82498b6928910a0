use apidocs_core::EndpointGroup;
use maud::{html, Markup};

use super::{icon, method_badge, RenderContext};

fn render_group(ctx: &RenderContext<'_>, group: &EndpointGroup<'_>) -> Markup {
    html! {
        details.sidebar-group data-category=(group.category.label()) open {
            summary {
                (icon(group.category.icon()))
                span { (group.category.label()) }
            }
            nav {
                @for endpoint in &group.endpoints {
                    a.sidebar-entry href=(ctx.endpoint_link(&endpoint.id))
                        title=(endpoint.description) {
                        span { (endpoint.title) }
                        (method_badge(endpoint.method))
                    }
                }
            }
        }
    }
}

/// Search form plus one section per category that still has entries.
pub(super) fn render_sidebar(ctx: &RenderContext<'_>) -> Markup {
    let groups: Vec<_> = ctx
        .catalog
        .filtered_groups(&ctx.search())
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect();
    html! {
        aside.sidebar {
            form method="get" action=(ctx.site.link("/api")) role="search" {
                input type="search" name="q" placeholder="Search endpoints..." value=(ctx.query);
            }
            h2 { (icon("book")) " API Endpoints" }
            @if groups.is_empty() {
                p.sidebar-empty { "No endpoints match your search." }
            }
            @for group in &groups {
                (render_group(ctx, group))
            }
        }
    }
}
