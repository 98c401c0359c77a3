use crate::reviews::PropertyMetric;
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12/dist/htmx.min.js";

/// Which sidebar entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Property(i64),
}

pub fn desktop_layout(
    title: &str,
    active: NavItem,
    properties: &[PropertyMetric],
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Reviews Dashboard" }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {};
            }
            body class="flex h-screen bg-white" {
                aside class="sidebar w-64 bg-gray-50 border-r border-gray-200 p-6" {
                    div class="mb-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Reviews" }
                        p class="text-sm text-gray-600" { "Moderation dashboard" }
                    }

                    nav {
                        ul {
                            li {
                                a href="/" class=(nav_class(active == NavItem::Dashboard)) { "Dashboard" }
                            }
                        }
                    }

                    div class="mt-8 pt-6 border-t border-gray-200" {
                        p class="text-xs font-medium text-gray-500 uppercase tracking-wider mb-3" { "Properties" }
                        ul class="property-links" {
                            @for metric in properties {
                                @if let Some(id) = metric.listing_id {
                                    li {
                                        a href=(format!("/property/{id}"))
                                          class=(nav_class(active == NavItem::Property(id))) {
                                            (metric.name.as_deref().unwrap_or("Unnamed property"))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                main class="flex-1 overflow-auto p-6" {
                    (content)
                }
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}
