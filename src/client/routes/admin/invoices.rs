use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::{FormStatus, StatCard, Submission},
        util::{
            api::{self, with_search, Method},
            input::{optional_text, parse_amount, parse_date, parse_id, parse_optional},
        },
    },
    model::{
        billing::{InvoiceDto, InvoiceFormDto, InvoiceLedgerDto, InvoiceStatus, InvoiceStatusDto},
        care::ClientDto,
    },
};

use super::{money, Failed, Loading};

#[component]
pub fn Invoices() -> Element {
    let mut search = use_signal(String::new);
    let mut status = use_signal(Submission::default);
    let mut ledger = use_resource(move || async move {
        api::get::<InvoiceLedgerDto>(&with_search("/api/invoices", &search())).await
    });

    let change_status = move |id: Uuid, value: String| async move {
        let Some(next) = InvoiceStatus::ALL.into_iter().find(|s| s.label() == value) else {
            return;
        };
        status.set(Submission::Sending);

        let result = api::send::<_, InvoiceDto>(
            Method::Put,
            &format!("/api/invoices/{}/status", id),
            &InvoiceStatusDto { status: next },
        )
        .await
        .map(|invoice| {
            format!(
                "Invoice {} marked {}.",
                invoice.invoice_number,
                invoice.status.label()
            )
        });

        status.set(Submission::from_result(result));
        ledger.restart();
    };

    let content = match &*ledger.read() {
        Some(Ok(ledger)) => rsx!(
            div { class: "grid gap-4 md:grid-cols-3",
                StatCard { title: "Revenue", value: money(ledger.summary.total_revenue) }
                StatCard { title: "Pending", value: money(ledger.summary.pending_amount) }
                StatCard { title: "Overdue", value: money(ledger.summary.overdue_amount) }
            }
            table { class: "table bg-base-100",
                thead { tr { th { "Number" } th { "Client" } th { "Due" } th { "Total" } th { "Status" } } }
                tbody {
                    for invoice in ledger.invoices.iter() {
                        tr { key: "{invoice.id}",
                            td { "{invoice.invoice_number}" }
                            td { {invoice.client_name.clone().unwrap_or_default()} }
                            td { "{invoice.due_date}" }
                            td { {money(invoice.total_amount)} }
                            td {
                                select {
                                    class: "select select-bordered select-sm",
                                    value: "{invoice.status.label()}",
                                    disabled: status().is_sending(),
                                    onchange: {
                                        let id = invoice.id;
                                        move |e: FormEvent| change_status(id, e.value())
                                    },
                                    for option_status in InvoiceStatus::ALL {
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
            placeholder: "Search by number or client",
            value: "{search}",
            oninput: move |e| search.set(e.value()),
        }
        FormStatus { submission: status() }
        {content}
        InvoiceForm { on_saved: move |_| ledger.restart() }
    )
}

/// Draft a new invoice. Blank tax rate and dates use the server defaults.
#[component]
fn InvoiceForm(on_saved: EventHandler<()>) -> Element {
    let clients =
        use_resource(|| async move { api::get::<Vec<ClientDto>>("/api/clients/active").await });

    let mut client_id = use_signal(String::new);
    let mut subtotal = use_signal(String::new);
    let mut tax_rate = use_signal(String::new);
    let mut issue_date = use_signal(String::new);
    let mut due_date = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();

        let form = (|| {
            Ok::<_, String>(InvoiceFormDto {
                client_id: parse_id(&client_id(), "client")?,
                subtotal: parse_amount(&subtotal())?,
                tax_rate: parse_optional(&tax_rate(), parse_amount)?,
                issue_date: parse_optional(&issue_date(), parse_date)?,
                due_date: parse_optional(&due_date(), parse_date)?,
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
        let result = api::send::<_, InvoiceDto>(Method::Post, "/api/invoices", &form)
            .await
            .map(|invoice| {
                format!(
                    "Invoice {} created for {}.",
                    invoice.invoice_number,
                    money(invoice.total_amount)
                )
            });

        if result.is_ok() {
            subtotal.set(String::new());
            notes.set(String::new());
            on_saved.call(());
        }
        submission.set(Submission::from_result(result));
    };

    let client_options: Vec<(Uuid, String)> = match &*clients.read() {
        Some(Ok(list)) => list.iter().map(|c| (c.id, c.full_name.clone())).collect(),
        _ => Vec::new(),
    };

    rsx!(
        form { class: "card bg-base-100 shadow-md max-w-2xl", onsubmit,
            div { class: "card-body grid gap-3 md:grid-cols-2",
                h2 { class: "card-title md:col-span-2", "New invoice" }
                select {
                    class: "select select-bordered md:col-span-2",
                    value: "{client_id}",
                    onchange: move |e| client_id.set(e.value()),
                    option { value: "", "Select client" }
                    for (id, name) in client_options {
                        option { value: "{id}", "{name}" }
                    }
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Subtotal",
                    value: "{subtotal}",
                    oninput: move |e| subtotal.set(e.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Tax rate % (default 8.25)",
                    value: "{tax_rate}",
                    oninput: move |e| tax_rate.set(e.value()),
                }
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm opacity-70", "Issue date" }
                    input {
                        class: "input input-bordered",
                        r#type: "date",
                        value: "{issue_date}",
                        oninput: move |e| issue_date.set(e.value()),
                    }
                }
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm opacity-70", "Due date" }
                    input {
                        class: "input input-bordered",
                        r#type: "date",
                        value: "{due_date}",
                        oninput: move |e| due_date.set(e.value()),
                    }
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
                    "Create draft"
                }
                div { class: "md:col-span-2",
                    FormStatus { submission: submission() }
                }
            }
        }
    )
}
