use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::Page,
    content::{MISSION, TEAM, VALUES},
};

#[component]
pub fn About() -> Element {
    rsx!(
        Title { "About Us | Serene Wings" }
        Page { class: "flex flex-col items-center gap-10",
            section { class: "max-w-3xl text-center flex flex-col gap-4",
                h1 { class: "text-3xl font-bold", "Our Mission" }
                p { class: "text-lg", "{MISSION}" }
            }
            section { class: "grid gap-4 md:grid-cols-2 max-w-[1000px]",
                for value in VALUES.iter() {
                    div { class: "card bg-base-100 shadow-sm",
                        div { class: "card-body",
                            h2 { class: "card-title", "{value.title}" }
                            p { "{value.description}" }
                        }
                    }
                }
            }
            section { class: "flex flex-col items-center gap-4",
                h2 { class: "text-2xl font-semibold", "Meet the team" }
                div { class: "grid gap-4 md:grid-cols-3 max-w-[1200px]",
                    for member in TEAM.iter() {
                        div { class: "card bg-base-100 shadow-sm text-center",
                            div { class: "card-body",
                                h3 { class: "card-title justify-center", "{member.name}" }
                                p { class: "text-primary", "{member.role}" }
                                p { class: "text-sm", "{member.bio}" }
                            }
                        }
                    }
                }
            }
        }
    )
}
