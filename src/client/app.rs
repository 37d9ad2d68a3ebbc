use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::user::UserState, util::api},
    model::user::UserDto,
};

#[component]
pub fn App() -> Element {
    let mut user_store = use_signal(UserState::default);
    use_context_provider(|| user_store);

    // Resolve the session user once on load
    use_future(move || async move {
        let user = api::get::<UserDto>("/api/auth/me").await.ok();

        user_store.set(UserState {
            user,
            fetched: true,
        });
    });

    rsx! {
        Router::<Route> {}
    }
}
