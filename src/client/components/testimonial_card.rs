use dioxus::prelude::*;

use crate::{client::content::stars, model::public::TestimonialDto};

#[component]
pub fn TestimonialCard(testimonial: TestimonialDto) -> Element {
    let rating = stars(testimonial.rating);

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                p { class: "text-warning", "{rating}" }
                p { class: "italic", "\"{testimonial.text}\"" }
                p { class: "font-semibold", "{testimonial.name}" }
                if let Some(location) = testimonial.location {
                    p { class: "text-sm opacity-70", "{location}" }
                }
            }
        }
    )
}
