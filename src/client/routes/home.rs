use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{ConsultationForm, Page},
    content::{MISSION, PRIMARY_PHONE, SECONDARY_PHONE, SERVICES},
    router::Route,
};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Serene Wings Caregiving | In-Home Senior Care" }
        Meta {
            name: "description",
            content: "Compassionate in-home senior care in the Raleigh area: personal care, companionship, dementia care and more."
        }
        Page { class: "flex flex-col items-center gap-12",
            section { class: "hero max-w-[1200px] py-12",
                div { class: "hero-content flex-col lg:flex-row gap-8",
                    div { class: "flex flex-col gap-4 max-w-xl",
                        h1 { class: "text-4xl font-bold", "Compassionate care in the comfort of home" }
                        p { class: "text-lg", "{MISSION}" }
                        div { class: "flex flex-wrap gap-2",
                            a { class: "btn btn-primary", href: "tel:{PRIMARY_PHONE}", "Call {PRIMARY_PHONE}" }
                            a { class: "btn btn-outline", href: "tel:{SECONDARY_PHONE}", "Call {SECONDARY_PHONE}" }
                        }
                    }
                    ConsultationForm { }
                }
            }
            section { class: "flex flex-col items-center gap-6 max-w-[1200px]",
                h2 { class: "text-3xl font-semibold", "Our Services" }
                div { class: "grid gap-4 md:grid-cols-3",
                    for service in SERVICES.iter().take(3) {
                        div { class: "card bg-base-100 shadow-sm",
                            div { class: "card-body",
                                h3 { class: "card-title", "{service.title}" }
                                p { "{service.description}" }
                            }
                        }
                    }
                }
                Link { to: Route::Services {}, class: "btn btn-ghost", "See all services" }
            }
        }
    )
}
