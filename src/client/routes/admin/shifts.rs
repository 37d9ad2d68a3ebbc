use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::{FormStatus, StatCard, Submission},
        util::{
            api::{self, with_search, Method},
            input::{optional_text, parse_datetime, parse_id},
        },
    },
    model::{
        care::ClientDto,
        schedule::{ShiftBoardDto, ShiftDto, ShiftFormDto, ShiftStatus, ShiftStatusDto},
        user::UserDto,
    },
};

use super::{Failed, Loading};

#[component]
pub fn Shifts() -> Element {
    let mut search = use_signal(String::new);
    let mut status = use_signal(Submission::default);
    let mut board = use_resource(move || async move {
        api::get::<ShiftBoardDto>(&with_search("/api/shifts", &search())).await
    });

    let change_status = move |id: Uuid, value: String| async move {
        let Some(next) = ShiftStatus::ALL.into_iter().find(|s| s.label() == value) else {
            return;
        };
        status.set(Submission::Sending);

        let result = api::send::<_, ShiftDto>(
            Method::Put,
            &format!("/api/shifts/{}/status", id),
            &ShiftStatusDto { status: next },
        )
        .await
        .map(|shift| format!("Shift marked {}.", shift.status.label()));

        status.set(Submission::from_result(result));
        board.restart();
    };

    let content = match &*board.read() {
        Some(Ok(board)) => rsx!(
            div { class: "grid gap-4 md:grid-cols-3",
                StatCard { title: "Today", value: "{board.summary.today}" }
                StatCard { title: "Completed today", value: "{board.summary.completed_today}" }
                StatCard { title: "Upcoming", value: "{board.summary.upcoming}" }
            }
            table { class: "table bg-base-100",
                thead { tr { th { "Start" } th { "End" } th { "Worker" } th { "Client" } th { "Status" } } }
                tbody {
                    for shift in board.shifts.iter() {
                        tr { key: "{shift.id}",
                            td { "{shift.start_time}" }
                            td { "{shift.end_time}" }
                            td { {shift.worker_name.clone().unwrap_or_default()} }
                            td { {shift.client_name.clone().unwrap_or_default()} }
                            td {
                                select {
                                    class: "select select-bordered select-sm",
                                    value: "{shift.status.label()}",
                                    disabled: status().is_sending(),
                                    onchange: {
                                        let id = shift.id;
                                        move |e: FormEvent| change_status(id, e.value())
                                    },
                                    for option_status in ShiftStatus::ALL {
                                        option { value: "{option_status.label()}", "{option_status.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        ),
        Some(Err(error)) => rsx!(Failed { error: error.clone() }),
        None => rsx!(Loading {}),
    };

    rsx!(
        input {
            class: "input input-bordered max-w-sm",
            placeholder: "Search by worker or client",
            value: "{search}",
            oninput: move |e| search.set(e.value()),
        }
        FormStatus { submission: status() }
        {content}
        ShiftForm { on_saved: move |_| board.restart() }
    )
}

/// Schedule a shift for an active worker and client.
#[component]
fn ShiftForm(on_saved: EventHandler<()>) -> Element {
    let workers = use_resource(|| async move { api::get::<Vec<UserDto>>("/api/workers").await });
    let clients =
        use_resource(|| async move { api::get::<Vec<ClientDto>>("/api/clients/active").await });

    let mut worker_id = use_signal(String::new);
    let mut client_id = use_signal(String::new);
    let mut start_time = use_signal(String::new);
    let mut end_time = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();

        let form = (|| {
            Ok::<_, String>(ShiftFormDto {
                worker_id: parse_id(&worker_id(), "worker")?,
                client_id: parse_id(&client_id(), "client")?,
                start_time: parse_datetime(&start_time())?,
                end_time: parse_datetime(&end_time())?,
                notes: optional_text(&notes()),
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
        let result = api::send::<_, ShiftDto>(Method::Post, "/api/shifts", &form)
            .await
            .map(|_| "Shift scheduled.".to_string());

        if result.is_ok() {
            notes.set(String::new());
            on_saved.call(());
        }
        submission.set(Submission::from_result(result));
    };

    let worker_options: Vec<(Uuid, String)> = match &*workers.read() {
        Some(Ok(list)) => list
            .iter()
            .filter(|w| w.is_active)
            .map(|w| (w.id, w.full_name.clone()))
            .collect(),
        _ => Vec::new(),
    };
    let client_options: Vec<(Uuid, String)> = match &*clients.read() {
        Some(Ok(list)) => list.iter().map(|c| (c.id, c.full_name.clone())).collect(),
        _ => Vec::new(),
    };

    rsx!(
        form { class: "card bg-base-100 shadow-md max-w-2xl", onsubmit,
            div { class: "card-body grid gap-3 md:grid-cols-2",
                h2 { class: "card-title md:col-span-2", "Schedule shift" }
                select {
                    class: "select select-bordered",
                    value: "{worker_id}",
                    onchange: move |e| worker_id.set(e.value()),
                    option { value: "", "Select worker" }
                    for (id, name) in worker_options {
                        option { value: "{id}", "{name}" }
                    }
                }
                select {
                    class: "select select-bordered",
                    value: "{client_id}",
                    onchange: move |e| client_id.set(e.value()),
                    option { value: "", "Select client" }
                    for (id, name) in client_options {
                        option { value: "{id}", "{name}" }
                    }
                }
                input {
                    class: "input input-bordered",
                    r#type: "datetime-local",
                    value: "{start_time}",
                    oninput: move |e| start_time.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    r#type: "datetime-local",
                    value: "{end_time}",
                    oninput: move |e| end_time.set(e.value()),
                }
                textarea {
                    class: "textarea textarea-bordered md:col-span-2",
                    placeholder: "Notes (optional)",
                    value: "{notes}",
                    oninput: move |e| notes.set(e.value()),
                }
                button {
                    class: "btn btn-primary md:col-span-2",
                    r#type: "submit",
                    disabled: submission().is_sending(),
                    "Schedule"
                }
                div { class: "md:col-span-2",
                    FormStatus { submission: submission() }
                }
            }
        }
    )
}
