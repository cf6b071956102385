use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaGoogle};
use dioxus_free_icons::Icon;

use crate::client::{router::Route, store::session::SessionState};

#[component]
pub fn Navbar() -> Element {
    #[allow(unused_mut)]
    let mut session = use_signal(SessionState::default);

    // Retrieve the session once on load
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::get_session::get_session;

        use_future(move || async move {
            match get_session().await {
                Ok(current) => session.write().session = current,
                Err(err) => tracing::error!("Error fetching session: {}", err),
            }
            session.write().fetched = true;
        });
    }

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "btn btn-ghost text-xl", "Tourbook" }
            }
            div {
                class: "navbar-end",
                SessionMenu { session }
            }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn SessionMenu(session: Signal<SessionState>) -> Element {
    let state = session.read();

    if !state.fetched {
        return rsx!(div { class: "skeleton h-10 w-48" });
    }

    match &state.session {
        Some(current) => {
            let name = current.name.clone().unwrap_or_else(|| "Traveller".to_string());

            rsx!(
                div { class: "flex items-center gap-3",
                    if let Some(image) = current.image.clone() {
                        div { class: "avatar",
                            div { class: "w-10 rounded-full",
                                img { src: "{image}", alt: "{name}" }
                            }
                        }
                    }
                    p { "{name}" }
                    a { href: "/api/auth/signout",
                        button { class: "btn btn-outline", "Sign out" }
                    }
                }
            )
        }
        None => rsx!(
            ul { class: "flex gap-2",
                li {
                    a { href: "/api/auth/signin/google",
                        button { class: "btn btn-outline flex gap-2",
                            Icon { width: 18, height: 18, icon: FaGoogle }
                            "Sign in with Google"
                        }
                    }
                }
                li {
                    a { href: "/api/auth/signin/github",
                        button { class: "btn btn-outline flex gap-2",
                            Icon { width: 18, height: 18, icon: FaGithub }
                            "Sign in with GitHub"
                        }
                    }
                }
            }
        ),
    }
}
