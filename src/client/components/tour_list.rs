use dioxus::prelude::*;

use crate::client::{
    components::TourCard,
    store::tour::{TourFilter, TourListState},
};

#[component]
pub fn TourList(filter: Signal<TourFilter>) -> Element {
    #[allow(unused_mut)]
    let mut state = use_signal(TourListState::default);

    // Fetch tours once on mount
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::get_tours::get_tours;

        use_future(move || async move {
            let result = get_tours().await;
            if let Err(err) = &result {
                tracing::error!("Error fetching tours: {}", err);
            }
            state.write().resolve(result);
        });
    }

    let state = state.read();

    if state.loading {
        return rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    }

    if let Some(error) = &state.error {
        return rsx!(
            div { role: "alert", class: "alert alert-error", "{error}" }
        );
    }

    let filter = filter.read();
    let tours = filter.apply(&state.tours);

    rsx!(
        if tours.is_empty() {
            p { class: "text-center opacity-70 p-8",
                if state.tours.is_empty() { "No tours available yet." } else { "No tours match your search." }
            }
        } else {
            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                for tour in tours {
                    TourCard { key: "{tour.id}", tour: tour.clone() }
                }
            }
        }
    )
}
