use crate::hostaway::Provenance;
use crate::reviews::{NormalizedReview, PropertyMetric, ReviewFilter};
use crate::templates::components::{
    approval_toggle, channel_badge, rating_badge, submitted_date, trend_icon,
};
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};

/// Channels offered in the filter, with their display names.
pub const CHANNEL_OPTIONS: &[(&str, &str)] = &[
    ("airbnb", "Airbnb"),
    ("booking", "Booking.com"),
    ("vrbo", "VRBO"),
    ("direct", "Direct"),
];

pub struct ReviewRow {
    pub review: NormalizedReview,
    pub approved: bool,
}

pub struct DashboardVm<'a> {
    pub source: Provenance,
    /// Every listing, in first-seen order.
    pub metrics: &'a [PropertyMetric],
    /// The listings shown as cards.
    pub featured: &'a [PropertyMetric],
    pub filter: &'a ReviewFilter,
    pub rows: Vec<ReviewRow>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        NavItem::Dashboard,
        vm.metrics,
        html! {
            div class="mb-6" {
                h2 class="text-3xl font-bold text-gray-900" { "Reviews Dashboard" }
                p class="text-gray-600" { "Monitor and approve guest reviews across all properties" }
                @if vm.source == Provenance::Mock {
                    p class="notice" id="source-notice" {
                        "Live reviews are unavailable; showing sample data."
                    }
                }
            }

            (metric_cards(vm.featured))
            (filter_form(vm))
            (reviews_table(&vm.rows))
        },
    )
}

pub fn metric_cards(metrics: &[PropertyMetric]) -> Markup {
    html! {
        section class="grid gap-4 md:grid-cols-3 mb-6" id="metrics" {
            @for metric in metrics {
                div class="card metric-card" {
                    div class="flex items-center justify-between" {
                        h3 class="text-sm font-medium text-gray-900" {
                            (metric.name.as_deref().unwrap_or("Unnamed property"))
                        }
                        (trend_icon(metric.trend))
                    }
                    div class="text-2xl font-bold text-gray-900 average" {
                        (metric.average_rating.to_string()) "/10"
                    }
                    p class="text-xs text-gray-600" { (metric.total_reviews) " reviews" }
                }
            }
        }
    }
}

fn filter_form(vm: &DashboardVm) -> Markup {
    let property = vm.filter.property.to_string();
    let channel = vm.filter.channel.to_string();

    html! {
        form method="get" action="/" class="card filters flex gap-4 flex-wrap mb-6" {
            label for="property" class="sr-only" { "Property" }
            select name="property" id="property" onchange="this.form.submit()" {
                option value="all" selected[property == "all"] { "All Properties" }
                @for metric in vm.metrics {
                    @if let Some(id) = metric.listing_id {
                        option value=(id) selected[property == id.to_string()] {
                            (metric.name.as_deref().unwrap_or("Unnamed property"))
                        }
                    }
                }
            }

            label for="channel" class="sr-only" { "Channel" }
            select name="channel" id="channel" onchange="this.form.submit()" {
                option value="all" selected[channel == "all"] { "All Channels" }
                @for (value, label) in CHANNEL_OPTIONS {
                    option value=(value) selected[channel == *value] { (label) }
                }
            }

            noscript { button type="submit" { "Apply" } }
        }
    }
}

pub fn reviews_table(rows: &[ReviewRow]) -> Markup {
    html! {
        div class="card" {
            table class="reviews min-w-full" id="reviews" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Property" }
                        th { "Guest" }
                        th { "Rating" }
                        th { "Channel" }
                        th { "Review" }
                        th { "Display" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr class="review-row" {
                            td { (submitted_date(row.review.submitted_at())) }
                            td class="font-medium" { (row.review.listing_name().unwrap_or_default()) }
                            td { (row.review.guest_name().unwrap_or_default()) }
                            td { (rating_badge(row.review.displayed_rating())) }
                            td { (channel_badge(&row.review.channel)) }
                            td class="max-w-xs truncate" { (row.review.public_review().unwrap_or_default()) }
                            td {
                                @if let Some(id) = row.review.id() {
                                    (approval_toggle(&id, row.approved))
                                }
                            }
                        }
                    }
                    @if rows.is_empty() {
                        tr class="empty" {
                            td colspan="7" { "No reviews match these filters." }
                        }
                    }
                }
            }
        }
    }
}
