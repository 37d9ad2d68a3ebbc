use dioxus::prelude::*;

#[component]
pub fn StatCard(title: String, value: String, detail: Option<String>) -> Element {
    rsx!(
        div { class: "stat bg-base-100 shadow-sm rounded-box",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
            if let Some(detail) = detail {
                div { class: "stat-desc", "{detail}" }
            }
        }
    )
}
