use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{FormStatus, Page, Submission},
        content::{PREFERRED_TIMES, PRIMARY_PHONE, SECONDARY_PHONE, SERVICE_AREA},
        util::api::{self, Method},
    },
    model::{api::MessageDto, public::ContactDto},
};

#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(ContactDto::default);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();
        submission.set(Submission::Sending);

        let result = api::send::<_, MessageDto>(Method::Post, "/api/contact", &form())
            .await
            .map(|response| response.message);

        if result.is_ok() {
            form.set(ContactDto::default());
        }
        submission.set(Submission::from_result(result));
    };

    rsx!(
        Title { "Contact Us | Serene Wings" }
        Page { class: "flex flex-col lg:flex-row justify-center gap-10",
            div { class: "flex flex-col gap-3 max-w-md",
                h1 { class: "text-3xl font-bold", "Get in touch" }
                p { "We serve families across {SERVICE_AREA}." }
                a { class: "link", href: "tel:{PRIMARY_PHONE}", "{PRIMARY_PHONE}" }
                a { class: "link", href: "tel:{SECONDARY_PHONE}", "{SECONDARY_PHONE}" }
            }
            form { class: "card bg-base-100 shadow-md w-full max-w-xl", onsubmit,
                div { class: "card-body flex flex-col gap-3",
                    input {
                        class: "input input-bordered",
                        placeholder: "Full name",
                        value: "{form().full_name}",
                        oninput: move |e| form.write().full_name = e.value(),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "tel",
                        placeholder: "Phone",
                        value: "{form().phone}",
                        oninput: move |e| form.write().phone = e.value(),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{form().email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                    select {
                        class: "select select-bordered",
                        value: "{form().preferred_time}",
                        onchange: move |e| form.write().preferred_time = e.value(),
                        option { value: "", "Best time to call (optional)" }
                        for time in PREFERRED_TIMES {
                            option { value: time, "{time}" }
                        }
                    }
                    textarea {
                        class: "textarea textarea-bordered",
                        placeholder: "How can we help?",
                        value: "{form().message}",
                        oninput: move |e| form.write().message = e.value(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submission().is_sending(),
                        "Send Message"
                    }
                    FormStatus { submission: submission() }
                }
            }
        }
    )
}
