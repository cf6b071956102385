use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::client::store::tour::TourFilter;

#[component]
pub fn TourSearch(mut filter: Signal<TourFilter>) -> Element {
    let start = filter
        .read()
        .start_date
        .map(|d| d.to_string())
        .unwrap_or_default();
    let end = filter
        .read()
        .end_date
        .map(|d| d.to_string())
        .unwrap_or_default();

    rsx!(
        div { class: "flex flex-wrap items-end justify-center gap-2 p-4 rounded-box bg-base-200",
            label { class: "form-control",
                span { class: "label-text", "Destination" }
                label { class: "input flex items-center gap-2",
                    Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    input {
                        r#type: "text",
                        placeholder: "Where to?",
                        value: "{filter.read().destination}",
                        oninput: move |e| filter.write().destination = e.value(),
                    }
                }
            }
            label { class: "form-control",
                span { class: "label-text", "From" }
                input {
                    class: "input",
                    r#type: "date",
                    value: "{start}",
                    oninput: move |e| filter.write().start_date = TourFilter::parse_date(&e.value()),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Until" }
                input {
                    class: "input",
                    r#type: "date",
                    value: "{end}",
                    oninput: move |e| filter.write().end_date = TourFilter::parse_date(&e.value()),
                }
            }
            if !filter.read().is_empty() {
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| filter.set(TourFilter::default()),
                    "Clear"
                }
            }
        }
    )
}
