use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{FormStatus, Page, Submission},
        router::Route,
        store::user::UserState,
        util::api::{self, Method},
    },
    model::user::{LoginDto, Role, SignupDto, UserDto},
};

fn portal_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::Admin {},
        Role::Worker => Route::Worker {},
    }
}

#[component]
pub fn Login() -> Element {
    let mut user_store = use_context::<Signal<UserState>>();
    let mut signing_up = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();
        submission.set(Submission::Sending);

        if signing_up() {
            let form = SignupDto {
                email: email(),
                password: password(),
                full_name: full_name(),
            };

            let result = api::send::<_, UserDto>(Method::Post, "/api/auth/signup", &form)
                .await
                .map(|_| "Account created. You can sign in now.".to_string());

            if result.is_ok() {
                signing_up.set(false);
            }
            submission.set(Submission::from_result(result));

            return;
        }

        let form = LoginDto {
            email: email(),
            password: password(),
        };

        match api::send::<_, UserDto>(Method::Post, "/api/auth/login", &form).await {
            Ok(user) => {
                let route = portal_route(user.role);

                user_store.set(UserState {
                    user: Some(user),
                    fetched: true,
                });
                submission.set(Submission::Idle);
                navigator().push(route);
            }
            Err(error) => submission.set(Submission::Failed(error)),
        }
    };

    let title = if signing_up() { "Create an account" } else { "Staff Login" };
    let toggle = if signing_up() {
        "Already have an account? Sign in"
    } else {
        "New caregiver? Create an account"
    };

    rsx!(
        Title { "{title} | Serene Wings" }
        Page { class: "flex items-center justify-center",
            form { class: "card bg-base-100 shadow-md w-full max-w-sm", onsubmit,
                div { class: "card-body flex flex-col gap-3",
                    h1 { class: "card-title", "{title}" }
                    if signing_up() {
                        input {
                            class: "input input-bordered",
                            placeholder: "Full name",
                            value: "{full_name}",
                            oninput: move |e| full_name.set(e.value()),
                        }
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submission().is_sending(),
                        if signing_up() { "Sign up" } else { "Sign in" }
                    }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| signing_up.toggle(),
                        "{toggle}"
                    }
                    FormStatus { submission: submission() }
                }
            }
        }
    )
}
