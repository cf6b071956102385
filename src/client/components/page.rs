use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[64px] {class}",
            {children}
        }
        footer { class: "footer footer-center p-6 bg-base-200 text-sm opacity-70",
            p { "Tourbook" }
        }
    )
}
