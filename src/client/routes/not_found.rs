use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Page Not Found | Serene Wings" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
        }
    )
}
