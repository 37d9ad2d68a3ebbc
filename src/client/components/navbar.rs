use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaHeart, FaPhone};
use dioxus_free_icons::Icon;

use crate::client::{content::PRIMARY_PHONE, router::Route, store::user::UserState};

#[component]
pub fn Navbar() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let user_state = user_store.read();

    rsx! {
        div {
            class: "navbar bg-base-100 shadow-sm fixed top-0 z-50",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "flex items-center gap-2",
                    Icon { width: 24, height: 24, icon: FaHeart }
                    p { class: "text-xl font-semibold", "Serene Wings" }
                }
            }
            div {
                class: "navbar-center hidden lg:flex",
                ul { class: "menu menu-horizontal gap-2",
                    li { Link { to: Route::Services {}, "Services" } }
                    li { Link { to: Route::About {}, "About" } }
                    li { Link { to: Route::Testimonials {}, "Testimonials" } }
                    li { Link { to: Route::Contact {}, "Contact" } }
                }
            }
            div {
                class: "navbar-end gap-2",
                a { class: "btn btn-ghost hidden md:flex", href: "tel:{PRIMARY_PHONE}",
                    Icon { width: 16, height: 16, icon: FaPhone }
                    "{PRIMARY_PHONE}"
                }
                if user_state.user.is_some() {
                    a { class: "btn btn-primary", href: user_state.home_path(), "My Portal" }
                } else if user_state.fetched {
                    Link { to: Route::Login {}, class: "btn btn-outline", "Staff Login" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
