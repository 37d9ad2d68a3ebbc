use dioxus::prelude::*;

use crate::{
    client::{
        components::{FormStatus, Submission},
        content::{PREFERRED_TIMES, SERVICE_TYPES},
        util::api::{self, Method},
    },
    model::{api::MessageDto, public::ConsultationDto},
};

/// Free consultation request form of the home page.
#[component]
pub fn ConsultationForm() -> Element {
    let mut form = use_signal(ConsultationDto::default);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();
        submission.set(Submission::Sending);

        let result = api::send::<_, MessageDto>(Method::Post, "/api/consultation", &form())
            .await
            .map(|response| response.message);

        if result.is_ok() {
            form.set(ConsultationDto::default());
        }
        submission.set(Submission::from_result(result));
    };

    rsx!(
        form { class: "card bg-base-100 shadow-md", onsubmit,
            div { class: "card-body grid gap-3 md:grid-cols-2",
                h2 { class: "card-title md:col-span-2", "Schedule a Free Consultation" }
                input {
                    class: "input input-bordered",
                    placeholder: "Full name",
                    value: "{form().name}",
                    oninput: move |e| form.write().name = e.value(),
                }
                input {
                    class: "input input-bordered",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{form().email}",
                    oninput: move |e| form.write().email = e.value(),
                }
                input {
                    class: "input input-bordered",
                    r#type: "tel",
                    placeholder: "Phone (optional)",
                    value: "{form().phone}",
                    oninput: move |e| form.write().phone = e.value(),
                }
                select {
                    class: "select select-bordered",
                    value: "{form().service_type}",
                    onchange: move |e| form.write().service_type = e.value(),
                    option { value: "", "Select service type" }
                    for (value, label) in SERVICE_TYPES {
                        option { value, "{label}" }
                    }
                }
                input {
                    class: "input input-bordered",
                    r#type: "date",
                    value: "{form().preferred_date}",
                    oninput: move |e| form.write().preferred_date = e.value(),
                }
                select {
                    class: "select select-bordered",
                    value: "{form().preferred_time}",
                    onchange: move |e| form.write().preferred_time = e.value(),
                    option { value: "", "Select time" }
                    for time in PREFERRED_TIMES {
                        option { value: time, "{time}" }
                    }
                }
                input {
                    class: "input input-bordered md:col-span-2",
                    placeholder: "Address (optional)",
                    value: "{form().address}",
                    oninput: move |e| form.write().address = e.value(),
                }
                textarea {
                    class: "textarea textarea-bordered md:col-span-2",
                    placeholder: "Tell us about your care needs (optional)",
                    value: "{form().notes}",
                    oninput: move |e| form.write().notes = e.value(),
                }
                button {
                    class: "btn btn-primary md:col-span-2",
                    r#type: "submit",
                    disabled: submission().is_sending(),
                    "Request Consultation"
                }
                div { class: "md:col-span-2",
                    FormStatus { submission: submission() }
                }
            }
        }
    )
}
