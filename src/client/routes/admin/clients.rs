use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::{FormStatus, Submission},
        content::care_level_options,
        util::{
            api::{self, with_search, Method},
            input::optional_text,
        },
    },
    model::{
        api::SetActiveDto,
        care::{CareLevel, ClientDto, ClientFormDto},
    },
};

use super::{Failed, Loading};

#[component]
pub fn Clients() -> Element {
    let mut search = use_signal(String::new);
    let mut editing = use_signal(|| None::<Uuid>);
    let mut generation = use_signal(|| 0u32);
    let mut status = use_signal(Submission::default);
    let mut clients = use_resource(move || async move {
        api::get::<Vec<ClientDto>>(&with_search("/api/clients", &search())).await
    });

    let toggle = move |id: Uuid, is_active: bool| async move {
        status.set(Submission::Sending);

        let result = api::send::<_, Vec<ClientDto>>(
            Method::Put,
            &format!("/api/clients/{}/active", id),
            &SetActiveDto { is_active },
        )
        .await
        .map(|_| {
            let verb = if is_active { "activated" } else { "deactivated" };
            format!("Client {}.", verb)
        });

        status.set(Submission::from_result(result));
        clients.restart();
    };

    let content = match &*clients.read() {
        Some(Ok(list)) => {
            let selected = editing().and_then(|id| list.iter().find(|c| c.id == id).cloned());
            let form_key = selected
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_else(|| "new".to_string());

            rsx!(
                table { class: "table bg-base-100",
                    thead { tr { th { "Name" } th { "Phone" } th { "Care level" } th { "Status" } th {} } }
                    tbody {
                        for client in list.iter() {
                            tr { key: "{client.id}",
                                td { "{client.full_name}" }
                                td { {client.phone.clone().unwrap_or_default()} }
                                td { "{client.care_level.label()}" }
                                td { if client.is_active { "Active" } else { "Inactive" } }
                                td { class: "flex gap-2",
                                    button {
                                        class: "btn btn-sm",
                                        disabled: status().is_sending(),
                                        onclick: {
                                            let (id, is_active) = (client.id, client.is_active);
                                            move |_| toggle(id, !is_active)
                                        },
                                        if client.is_active { "Deactivate" } else { "Activate" }
                                    }
                                    button {
                                        class: "btn btn-sm btn-ghost",
                                        onclick: {
                                            let id = client.id;
                                            move |_| editing.set(Some(id))
                                        },
                                        "Edit"
                                    }
                                }
                            }
                        }
                    }
                }
                ClientForm {
                    key: "{form_key}-{generation}",
                    client: selected,
                    on_saved: move |message: String| {
                        status.set(Submission::Sent(message));
                        editing.set(None);
                        generation += 1;
                        clients.restart();
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
            placeholder: "Search by name, email or phone",
            value: "{search}",
            oninput: move |e| search.set(e.value()),
        }
        FormStatus { submission: status() }
        {content}
    )
}

/// Add a client, or edit `client` when given.
#[component]
fn ClientForm(
    client: Option<ClientDto>,
    on_saved: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let text = |field: fn(&ClientDto) -> Option<String>| {
        client.as_ref().and_then(field).unwrap_or_default()
    };

    let mut full_name = use_signal(|| text(|c| Some(c.full_name.clone())));
    let mut email = use_signal(|| text(|c| c.email.clone()));
    let mut phone = use_signal(|| text(|c| c.phone.clone()));
    let mut address = use_signal(|| text(|c| c.address.clone()));
    let mut emergency_name = use_signal(|| text(|c| c.emergency_contact_name.clone()));
    let mut emergency_phone = use_signal(|| text(|c| c.emergency_contact_phone.clone()));
    let mut care_level =
        use_signal(|| client.as_ref().map(|c| c.care_level).unwrap_or_default());
    let mut medical_conditions = use_signal(|| text(|c| c.medical_conditions.clone()));
    let mut medications = use_signal(|| text(|c| c.medications.clone()));
    let mut care_notes = use_signal(|| text(|c| c.care_notes.clone()));
    let mut submission = use_signal(Submission::default);
    let editing_id = client.as_ref().map(|c| c.id);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();

        let form = ClientFormDto {
            full_name: full_name(),
            email: optional_text(&email()),
            phone: optional_text(&phone()),
            address: optional_text(&address()),
            emergency_contact_name: optional_text(&emergency_name()),
            emergency_contact_phone: optional_text(&emergency_phone()),
            care_level: care_level(),
            medical_conditions: optional_text(&medical_conditions()),
            medications: optional_text(&medications()),
            care_notes: optional_text(&care_notes()),
        };

        submission.set(Submission::Sending);
        let result = match editing_id {
            Some(id) => {
                api::send::<_, ClientDto>(Method::Put, &format!("/api/clients/{}", id), &form)
                    .await
                    .map(|_| "Client updated.".to_string())
            }
            None => api::send::<_, ClientDto>(Method::Post, "/api/clients", &form)
                .await
                .map(|_| "Client added.".to_string()),
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
                    if editing_id.is_some() { "Edit client" } else { "Add client" }
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
                select {
                    class: "select select-bordered md:col-span-2",
                    value: "{care_level().as_str()}",
                    onchange: move |e| {
                        if let Some(level) = CareLevel::parse(&e.value()) {
                            care_level.set(level);
                        }
                    },
                    for (level, label) in care_level_options() {
                        option { value: "{level.as_str()}", "{label}" }
                    }
                }
                textarea {
                    class: "textarea textarea-bordered",
                    placeholder: "Medical conditions",
                    value: "{medical_conditions}",
                    oninput: move |e| medical_conditions.set(e.value()),
                }
                textarea {
                    class: "textarea textarea-bordered",
                    placeholder: "Medications",
                    value: "{medications}",
                    oninput: move |e| medications.set(e.value()),
                }
                textarea {
                    class: "textarea textarea-bordered md:col-span-2",
                    placeholder: "Care notes",
                    value: "{care_notes}",
                    oninput: move |e| care_notes.set(e.value()),
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
