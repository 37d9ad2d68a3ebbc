use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::{FormStatus, Submission},
        util::{
            api::{self, with_search, Method},
            input::{optional_text, parse_amount, parse_date, parse_optional},
        },
    },
    model::{
        api::SetActiveDto,
        user::{UserDto, WorkerFormDto},
    },
};

use super::{money, Failed, Loading};

#[component]
pub fn Workers() -> Element {
    let mut search = use_signal(String::new);
    let mut editing = use_signal(|| None::<Uuid>);
    let mut generation = use_signal(|| 0u32);
    let mut status = use_signal(Submission::default);
    let mut workers = use_resource(move || async move {
        api::get::<Vec<UserDto>>(&with_search("/api/workers", &search())).await
    });

    let toggle = move |id: Uuid, is_active: bool| async move {
        status.set(Submission::Sending);

        let result = api::send::<_, Vec<UserDto>>(
            Method::Put,
            &format!("/api/workers/{}/active", id),
            &SetActiveDto { is_active },
        )
        .await
        .map(|_| {
            let verb = if is_active { "activated" } else { "deactivated" };
            format!("Worker {}.", verb)
        });

        status.set(Submission::from_result(result));
        workers.restart();
    };

    let content = match &*workers.read() {
        Some(Ok(list)) => {
            let selected = editing().and_then(|id| list.iter().find(|w| w.id == id).cloned());
            let form_key = selected
                .as_ref()
                .map(|w| w.id.to_string())
                .unwrap_or_else(|| "new".to_string());

            rsx!(
                table { class: "table bg-base-100",
                    thead { tr { th { "Name" } th { "Email" } th { "Rate" } th { "Status" } th {} } }
                    tbody {
                        for worker in list.iter() {
                            tr { key: "{worker.id}",
                                td { "{worker.full_name}" }
                                td { "{worker.email}" }
                                td { {worker.hourly_rate.map(money).unwrap_or_default()} }
                                td { if worker.is_active { "Active" } else { "Inactive" } }
                                td { class: "flex gap-2",
                                    button {
                                        class: "btn btn-sm",
                                        disabled: status().is_sending(),
                                        onclick: {
                                            let (id, is_active) = (worker.id, worker.is_active);
                                            move |_| toggle(id, !is_active)
                                        },
                                        if worker.is_active { "Deactivate" } else { "Activate" }
                                    }
                                    button {
                                        class: "btn btn-sm btn-ghost",
                                        onclick: {
                                            let id = worker.id;
                                            move |_| editing.set(Some(id))
                                        },
                                        "Edit"
                                    }
                                }
                            }
                        }
                    }
                }
                WorkerForm {
                    key: "{form_key}-{generation}",
                    worker: selected,
                    on_saved: move |message: String| {
                        status.set(Submission::Sent(message));
                        editing.set(None);
                        generation += 1;
                        workers.restart();
                    },
                    on_cancel: move |_| editing.set(None),
                }
            )
        }
        Some(Err(error)) => rsx!(Failed { error: error.clone() }),
        None => rsx!(Loading {}),
    };

    rsx!(
        input {
            class: "input input-bordered max-w-sm",
            placeholder: "Search by name or email",
            value: "{search}",
            oninput: move |e| search.set(e.value()),
        }
        FormStatus { submission: status() }
        {content}
    )
}

/// Add a worker, or edit `worker` when given. The form is replaced once saved.
#[component]
fn WorkerForm(
    worker: Option<UserDto>,
    on_saved: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let text = |field: fn(&UserDto) -> Option<String>| {
        worker.as_ref().and_then(field).unwrap_or_default()
    };

    let mut full_name = use_signal(|| text(|w| Some(w.full_name.clone())));
    let mut email = use_signal(|| text(|w| Some(w.email.clone())));
    let mut phone = use_signal(|| text(|w| w.phone.clone()));
    let mut address = use_signal(|| text(|w| w.address.clone()));
    let mut emergency_name = use_signal(|| text(|w| w.emergency_contact_name.clone()));
    let mut emergency_phone = use_signal(|| text(|w| w.emergency_contact_phone.clone()));
    let mut hourly_rate = use_signal(|| text(|w| w.hourly_rate.map(|rate| rate.to_string())));
    let mut hire_date = use_signal(|| text(|w| w.hire_date.map(|date| date.to_string())));
    let mut submission = use_signal(Submission::default);
    let editing_id = worker.as_ref().map(|w| w.id);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();

        let form = (|| {
            Ok::<_, String>(WorkerFormDto {
                full_name: full_name(),
                email: email(),
                phone: optional_text(&phone()),
                address: optional_text(&address()),
                emergency_contact_name: optional_text(&emergency_name()),
                emergency_contact_phone: optional_text(&emergency_phone()),
                hourly_rate: parse_optional(&hourly_rate(), parse_amount)?,
                hire_date: parse_optional(&hire_date(), parse_date)?,
            })
        })();

        let form = match form {
            Ok(form) => form,
            Err(message) => {
                submission.set(Submission::Failed(message));
                return;
            }
        };

        submission.set(Submission::Sending);
        let result = match editing_id {
            Some(id) => {
                api::send::<_, UserDto>(Method::Put, &format!("/api/workers/{}", id), &form)
                    .await
                    .map(|_| "Worker updated.".to_string())
            }
            None => api::send::<_, UserDto>(Method::Post, "/api/workers", &form)
                .await
                .map(|_| "Worker added.".to_string()),
        };

        match result {
            Ok(message) => on_saved.call(message),
            Err(error) => submission.set(Submission::Failed(error)),
        }
    };

    rsx!(
        form { class: "card bg-base-100 shadow-md max-w-2xl", onsubmit,
            div { class: "card-body grid gap-3 md:grid-cols-2",
                h2 { class: "card-title md:col-span-2",
                    if editing_id.is_some() { "Edit worker" } else { "Add worker" }
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Full name",
                    value: "{full_name}",
                    oninput: move |e| full_name.set(e.value()),
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
                    placeholder: "Phone",
                    value: "{phone}",
                    oninput: move |e| phone.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Address",
                    value: "{address}",
                    oninput: move |e| address.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Emergency contact",
                    value: "{emergency_name}",
                    oninput: move |e| emergency_name.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Emergency phone",
                    value: "{emergency_phone}",
                    oninput: move |e| emergency_phone.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Hourly rate",
                    value: "{hourly_rate}",
                    oninput: move |e| hourly_rate.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    r#type: "date",
                    value: "{hire_date}",
                    oninput: move |e| hire_date.set(e.value()),
                }
                div { class: "flex gap-2 md:col-span-2",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submission().is_sending(),
                        "Save"
                    }
                    if editing_id.is_some() {
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
                div { class: "md:col-span-2",
                    FormStatus { submission: submission() }
                }
            }
        }
    )
}
