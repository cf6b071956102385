use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Page, TourList, TourSearch},
    store::tour::TourFilter,
};

#[component]
pub fn Home() -> Element {
    let filter = use_signal(TourFilter::default);

    rsx!(
        Title { "Tourbook" }
        Meta {
            name: "description",
            content: "Find and book guided tours around the world."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-6 p-6",
                div { class: "flex flex-col items-center gap-2 py-8",
                    h1 { class: "text-4xl font-bold", "Find your next adventure" }
                    p { class: "opacity-70", "Guided tours with small groups and local experts" }
                }
                TourSearch { filter }
                TourList { filter }
            }
        }
    )
}
