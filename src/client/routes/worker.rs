use dioxus::document::Title;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::{FormStatus, Page, RoleGate, StatCard, Submission},
        util::{
            api::{self, Method},
            input::{parse_amount, parse_date},
        },
    },
    model::{
        billing::{ExpenseDto, ExpenseFormDto},
        schedule::{
            ClockInDto, PortalShiftDto, TimeEntryDto, TimesheetDto, TimesheetFormDto,
            WorkerPortalDto,
        },
        user::Role,
    },
};

#[component]
pub fn Worker() -> Element {
    rsx!(
        Title { "Worker Portal | Serene Wings" }
        RoleGate { role: Role::Worker,
            Portal {}
        }
    )
}

#[component]
fn Portal() -> Element {
    let mut portal = use_resource(|| async move { api::get::<WorkerPortalDto>("/api/portal").await });
    let mut clock_status = use_signal(Submission::default);

    let clock_in = move |shift_id: Option<Uuid>| async move {
        clock_status.set(Submission::Sending);

        let result = api::send::<_, TimeEntryDto>(
            Method::Post,
            "/api/portal/clock-in",
            &ClockInDto { shift_id },
        )
        .await
        .map(|_| "Clocked in.".to_string());

        clock_status.set(Submission::from_result(result));
        portal.restart();
    };

    let clock_out = move |_| async move {
        clock_status.set(Submission::Sending);

        let result = api::send::<_, TimeEntryDto>(Method::Post, "/api/portal/clock-out", &())
            .await
            .map(|_| "Clocked out.".to_string());

        clock_status.set(Submission::from_result(result));
        portal.restart();
    };

    let content = match &*portal.read() {
        Some(Ok(portal)) => {
            let next_shift = portal.today_shifts.first().map(|entry| entry.shift.id);

            rsx!(
                h1 { class: "text-3xl font-bold", "Welcome, {portal.profile.full_name}" }
                div { class: "grid gap-4 md:grid-cols-3",
                    StatCard { title: "Today's shifts", value: "{portal.today_shifts.len()}" }
                    StatCard { title: "Upcoming shifts", value: "{portal.upcoming_shifts.len()}" }
                    StatCard { title: "Hours this week", value: "{portal.weekly_hours}" }
                }
                div { class: "flex items-center gap-4",
                    if let Some(entry) = &portal.open_entry {
                        span { "Clocked in since {entry.clock_in}" }
                        button {
                            class: "btn btn-warning",
                            disabled: clock_status().is_sending(),
                            onclick: clock_out,
                            "Clock Out"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            disabled: clock_status().is_sending(),
                            onclick: move |_| clock_in(next_shift),
                            "Clock In"
                        }
                    }
                    FormStatus { submission: clock_status() }
                }
                h2 { class: "text-xl font-semibold", "My shifts" }
                ShiftTable { shifts: portal.shifts.clone() }
                h2 { class: "text-xl font-semibold", "Recent timesheets" }
                table { class: "table bg-base-100",
                    thead { tr { th { "Week" } th { "Hours" } th { "Status" } } }
                    tbody {
                        for timesheet in portal.timesheets.iter() {
                            tr { key: "{timesheet.id}",
                                td { "{timesheet.week_start} to {timesheet.week_end}" }
                                td { "{timesheet.total_hours}" }
                                td { "{timesheet.status:?}" }
                            }
                        }
                    }
                }
            )
        }
        Some(Err(error)) => rsx!(
            div { role: "alert", class: "alert alert-error", "{error}" }
        ),
        None => rsx!(span { class: "loading loading-spinner" }),
    };

    rsx!(
        Page { class: "flex flex-col gap-6 max-w-[1200px] mx-auto",
            {content}
            div { class: "grid gap-6 md:grid-cols-2",
                TimesheetForm { on_submitted: move |_| portal.restart() }
                ExpenseForm {}
            }
        }
    )
}

#[component]
fn ShiftTable(shifts: Vec<PortalShiftDto>) -> Element {
    if shifts.is_empty() {
        return rsx!(p { class: "opacity-70", "No shifts scheduled." });
    }

    rsx!(
        table { class: "table bg-base-100",
            thead { tr { th { "Start" } th { "End" } th { "Client" } th { "Status" } } }
            tbody {
                for entry in shifts.iter() {
                    tr { key: "{entry.shift.id}",
                        td { "{entry.shift.start_time}" }
                        td { "{entry.shift.end_time}" }
                        td { {entry.shift.client_name.clone().unwrap_or_default()} }
                        td { span { class: "badge", "{entry.phase.label()}" } }
                    }
                }
            }
        }
    )
}

#[component]
fn TimesheetForm(on_submitted: EventHandler<()>) -> Element {
    let mut week_start = use_signal(String::new);
    let mut week_end = use_signal(String::new);
    let mut hours = use_signal(String::new);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();

        let form = (|| {
            Ok::<_, String>(TimesheetFormDto {
                week_start: parse_date(&week_start())?,
                week_end: parse_date(&week_end())?,
                total_hours: parse_amount(&hours())?,
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
        let result = api::send::<_, TimesheetDto>(Method::Post, "/api/portal/timesheets", &form)
            .await
            .map(|_| "Timesheet submitted for approval.".to_string());

        if result.is_ok() {
            hours.set(String::new());
            on_submitted.call(());
        }
        submission.set(Submission::from_result(result));
    };

    rsx!(
        form { class: "card bg-base-100 shadow-md", onsubmit,
            div { class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Submit timesheet" }
                input {
                    class: "input input-bordered",
                    r#type: "date",
                    value: "{week_start}",
                    oninput: move |e| week_start.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    r#type: "date",
                    value: "{week_end}",
                    oninput: move |e| week_end.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Total hours",
                    value: "{hours}",
                    oninput: move |e| hours.set(e.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submission().is_sending(),
                    "Submit"
                }
                FormStatus { submission: submission() }
            }
        }
    )
}

#[component]
fn ExpenseForm() -> Element {
    let mut description = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();

        let amount_value = match parse_amount(&amount()) {
            Ok(value) => value,
            Err(message) => {
                submission.set(Submission::Failed(message));
                return;
            }
        };
        let category_value = category();
        let form = ExpenseFormDto {
            description: description(),
            category: (!category_value.trim().is_empty()).then_some(category_value),
            amount: amount_value,
            expense_date: None,
        };

        submission.set(Submission::Sending);
        let result = api::send::<_, ExpenseDto>(Method::Post, "/api/portal/expenses", &form)
            .await
            .map(|_| "Expense submitted for approval.".to_string());

        if result.is_ok() {
            description.set(String::new());
            amount.set(String::new());
        }
        submission.set(Submission::from_result(result));
    };

    rsx!(
        form { class: "card bg-base-100 shadow-md", onsubmit,
            div { class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Submit expense" }
                input {
                    class: "input input-bordered",
                    placeholder: "Description",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Category (optional)",
                    value: "{category}",
                    oninput: move |e| category.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Amount",
                    value: "{amount}",
                    oninput: move |e| amount.set(e.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submission().is_sending(),
                    "Submit"
                }
                FormStatus { submission: submission() }
            }
        }
    )
}
