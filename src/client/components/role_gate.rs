use dioxus::prelude::*;

use crate::{
    client::{components::Page, router::Route, store::user::UserState},
    model::user::Role,
};

/// Renders `children` only for an active user holding `role`.
#[component]
pub fn RoleGate(role: Role, children: Element) -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let user_state = user_store.read();

    if !user_state.fetched {
        return rsx!(
            Page { class: "flex justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    }

    let message = match &user_state.user {
        None => "You must be logged in to access this page.".to_string(),
        Some(user) if !user.is_active => "Your account has been deactivated. Please contact an administrator for assistance.".to_string(),
        Some(user) if user.role != role => format!(
            "You don't have permission to access this page. Required role: {}.",
            role.label()
        ),
        Some(_) => return rsx!({ children }),
    };

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            div { role: "alert", class: "alert alert-warning max-w-lg", "{message}" }
            Link { to: Route::Login {}, class: "btn btn-primary", "Go to login" }
        }
    )
}
