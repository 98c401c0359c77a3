use crate::reviews::{NormalizedReview, PropertyMetric};
use crate::templates::components::{card, format_rating, submitted_date};
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};

pub struct PropertyVm<'a> {
    pub listing_id: i64,
    /// `None` when no review mentions this listing.
    pub metric: Option<&'a PropertyMetric>,
    pub metrics: &'a [PropertyMetric],
    /// Only the reviews approved for public display.
    pub reviews: Vec<NormalizedReview>,
}

pub fn property_page(vm: &PropertyVm) -> Markup {
    let name = vm
        .metric
        .and_then(|m| m.name.as_deref())
        .unwrap_or("Property");

    desktop_layout(
        name,
        NavItem::Property(vm.listing_id),
        vm.metrics,
        html! {
            div class="mb-8" {
                h1 class="text-4xl font-bold text-gray-900 mb-2" { (name) }
                @if let Some(metric) = vm.metric {
                    p class="text-gray-600 summary" {
                        (metric.average_rating.to_string()) "/10 average from "
                        (metric.total_reviews) " reviews"
                    }
                }
            }

            section {
                h2 class="text-2xl font-semibold text-gray-900 mb-6" { "Guest Reviews" }

                @if vm.reviews.is_empty() {
                    (card("No reviews yet", html! {
                        p class="text-center text-gray-500" { "No reviews available for this property yet." }
                    }))
                } @else {
                    div class="space-y-4" {
                        @for review in &vm.reviews {
                            (review_card(review))
                        }
                    }
                }
            }
        },
    )
}

fn review_card(review: &NormalizedReview) -> Markup {
    let rating = review
        .displayed_rating()
        .map(format_rating)
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        article class="card guest-review" {
            div class="flex justify-between items-start mb-3" {
                div {
                    p class="font-semibold text-gray-900" { (review.guest_name().unwrap_or("Guest")) }
                    p class="text-sm text-gray-500" { (submitted_date(review.submitted_at())) }
                }
                span class="font-medium text-gray-900 rating" { "★ " (rating) "/10" }
            }

            p class="text-gray-700 mb-3" { (review.public_review().unwrap_or_default()) }

            div class="flex gap-2 flex-wrap categories" {
                @for category in review.categories() {
                    span class="badge badge-muted" {
                        (category.category.as_deref().unwrap_or("other")) ": "
                        @match category.rating {
                            Some(r) => { (format_rating(r)) },
                            None => { "N/A" },
                        }
                        "/10"
                    }
                }
            }
        }
    }
}
