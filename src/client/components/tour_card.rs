use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaLocationDot, FaStar, FaUsers};
use dioxus_free_icons::Icon;

use crate::model::tour::TourDto;

#[component]
pub fn TourCard(tour: TourDto) -> Element {
    let dates = match (tour.start_date, tour.end_date) {
        (Some(start), Some(end)) => Some(format!(
            "{} - {}",
            start.format("%b %-d"),
            end.format("%b %-d, %Y")
        )),
        (Some(start), None) => Some(format!("From {}", start.format("%b %-d, %Y"))),
        _ => None,
    };

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm",
            if let Some(image_url) = tour.image_url.clone() {
                figure {
                    img { class: "h-48 w-full object-cover", src: "{image_url}", alt: "{tour.title}" }
                }
            }
            div {
                class: "card-body gap-2",
                div { class: "flex items-start justify-between gap-2",
                    h2 { class: "card-title", "{tour.title}" }
                    if !tour.is_active {
                        span { class: "badge badge-ghost", "Unavailable" }
                    }
                }
                if let Some(location) = tour.location.clone() {
                    p { class: "flex items-center gap-2 text-sm",
                        Icon { width: 14, height: 14, icon: FaLocationDot }
                        "{location}"
                    }
                }
                if let Some(dates) = dates {
                    p { class: "flex items-center gap-2 text-sm",
                        Icon { width: 14, height: 14, icon: FaCalendar }
                        "{dates}"
                    }
                }
                if let Some(description) = tour.description.clone() {
                    p { class: "text-sm opacity-70", "{description}" }
                }
                div { class: "card-actions items-center justify-between pt-2",
                    div { class: "flex gap-4 text-sm",
                        if let Some(rating) = tour.rating {
                            span { class: "flex items-center gap-1",
                                Icon { width: 14, height: 14, icon: FaStar }
                                "{rating:.1}"
                            }
                        }
                        if let Some(max) = tour.max_participants {
                            span { class: "flex items-center gap-1",
                                Icon { width: 14, height: 14, icon: FaUsers }
                                "Up to {max}"
                            }
                        }
                    }
                    if let Some(price) = tour.price {
                        p { class: "text-lg font-semibold text-right", "${price:.2}" }
                    }
                }
            }
        }
    )
}
