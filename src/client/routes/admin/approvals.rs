use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::{FormStatus, Submission},
        util::api::{self, Method},
    },
    model::{
        billing::{ExpenseDto, ExpenseStatus, ExpenseStatusDto},
        schedule::{TimesheetDto, TimesheetStatus, TimesheetStatusDto},
    },
};

use super::{money, Failed, Loading};

fn verdict(record: &str, approved: bool) -> String {
    format!("{} {}.", record, if approved { "approved" } else { "rejected" })
}

#[component]
pub fn Timesheets() -> Element {
    let mut status = use_signal(Submission::default);
    let mut timesheets = use_resource(|| async move {
        api::get::<Vec<TimesheetDto>>("/api/timesheets?status=submitted").await
    });

    let review = move |id: Uuid, next: TimesheetStatus| async move {
        status.set(Submission::Sending);

        let result = api::send::<_, TimesheetDto>(
            Method::Put,
            &format!("/api/timesheets/{}/status", id),
            &TimesheetStatusDto { status: next },
        )
        .await
        .map(|timesheet| verdict("Timesheet", timesheet.status == TimesheetStatus::Approved));

        status.set(Submission::from_result(result));
        timesheets.restart();
    };

    let content = match &*timesheets.read() {
        Some(Ok(list)) if list.is_empty() => rsx!(p { "No timesheets waiting for approval." }),
        Some(Ok(list)) => rsx!(
            table { class: "table bg-base-100",
                thead { tr { th { "Worker" } th { "Week" } th { "Hours" } th {} } }
                tbody {
                    for timesheet in list.iter() {
                        tr { key: "{timesheet.id}",
                            td { {timesheet.worker_name.clone().unwrap_or_default()} }
                            td { "{timesheet.week_start} to {timesheet.week_end}" }
                            td { "{timesheet.total_hours}" }
                            td { class: "flex gap-2",
                                button {
                                    class: "btn btn-sm btn-success",
                                    disabled: status().is_sending(),
                                    onclick: {
                                        let id = timesheet.id;
                                        move |_| review(id, TimesheetStatus::Approved)
                                    },
                                    "Approve"
                                }
                                button {
                                    class: "btn btn-sm btn-error",
                                    disabled: status().is_sending(),
                                    onclick: {
                                        let id = timesheet.id;
                                        move |_| review(id, TimesheetStatus::Rejected)
                                    },
                                    "Reject"
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
        FormStatus { submission: status() }
        {content}
    )
}

#[component]
pub fn Expenses() -> Element {
    let mut status = use_signal(Submission::default);
    let mut expenses = use_resource(|| async move {
        api::get::<Vec<ExpenseDto>>("/api/expenses?status=pending").await
    });

    let review = move |id: Uuid, next: ExpenseStatus| async move {
        status.set(Submission::Sending);

        let result = api::send::<_, ExpenseDto>(
            Method::Put,
            &format!("/api/expenses/{}/status", id),
            &ExpenseStatusDto { status: next },
        )
        .await
        .map(|expense| verdict("Expense", expense.status == ExpenseStatus::Approved));

        status.set(Submission::from_result(result));
        expenses.restart();
    };

    let content = match &*expenses.read() {
        Some(Ok(list)) if list.is_empty() => rsx!(p { "No expenses waiting for approval." }),
        Some(Ok(list)) => rsx!(
            table { class: "table bg-base-100",
                thead { tr { th { "Worker" } th { "Date" } th { "Description" } th { "Amount" } th {} } }
                tbody {
                    for expense in list.iter() {
                        tr { key: "{expense.id}",
                            td { {expense.worker_name.clone().unwrap_or_default()} }
                            td { "{expense.expense_date}" }
                            td {
                                "{expense.description}"
                                if let Some(category) = &expense.category {
                                    span { class: "badge badge-ghost ml-2", "{category}" }
                                }
                            }
                            td { {money(expense.amount)} }
                            td { class: "flex gap-2",
                                button {
                                    class: "btn btn-sm btn-success",
                                    disabled: status().is_sending(),
                                    onclick: {
                                        let id = expense.id;
                                        move |_| review(id, ExpenseStatus::Approved)
                                    },
                                    "Approve"
                                }
                                button {
                                    class: "btn btn-sm btn-error",
                                    disabled: status().is_sending(),
                                    onclick: {
                                        let id = expense.id;
                                        move |_| review(id, ExpenseStatus::Rejected)
                                    },
                                    "Reject"
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
        FormStatus { submission: status() }
        {content}
    )
}

#[cfg(test)]
mod tests {
    use super::verdict;

    #[test]
    fn describes_review_outcome() {
        assert_eq!(verdict("Expense", true), "Expense approved.");
        assert_eq!(verdict("Timesheet", false), "Timesheet rejected.");
    }
}
