use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::Page,
    content::{care_level_options, SERVICES},
    router::Route,
};

#[component]
pub fn Services() -> Element {
    let care_levels = care_level_options();

    rsx!(
        Title { "Services | Serene Wings" }
        Page { class: "flex flex-col items-center gap-8",
            h1 { class: "text-3xl font-bold", "Our Care Services" }
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3 max-w-[1200px]",
                for service in SERVICES.iter() {
                    div { class: "card bg-base-100 shadow-sm",
                        div { class: "card-body",
                            h2 { class: "card-title", "{service.title}" }
                            p { "{service.description}" }
                        }
                    }
                }
            }
            div { class: "flex flex-col items-center gap-2",
                h2 { class: "text-2xl font-semibold", "Levels of care" }
                ul { class: "flex flex-wrap justify-center gap-2",
                    for (_, label) in care_levels {
                        li { class: "badge badge-outline badge-lg", "{label}" }
                    }
                }
            }
            Link { to: Route::Contact {}, class: "btn btn-primary", "Talk to us about your needs" }
        }
    )
}
