//! Admin back office: one tab per area of the business.

mod approvals;
mod clients;
mod invoices;
mod overview;
mod reports;
mod shifts;
mod workers;

use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::components::{Page, RoleGate},
    model::user::Role,
};

use self::{
    approvals::{Expenses, Timesheets},
    clients::Clients,
    invoices::Invoices,
    overview::Overview,
    reports::Reports,
    shifts::Shifts,
    workers::Workers,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Clients,
    Workers,
    Shifts,
    Invoices,
    Timesheets,
    Expenses,
    Reports,
}

impl Tab {
    const ALL: [Tab; 8] = [
        Self::Overview,
        Self::Clients,
        Self::Workers,
        Self::Shifts,
        Self::Invoices,
        Self::Timesheets,
        Self::Expenses,
        Self::Reports,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Clients => "Clients",
            Self::Workers => "Workers",
            Self::Shifts => "Shifts",
            Self::Invoices => "Invoices",
            Self::Timesheets => "Timesheets",
            Self::Expenses => "Expenses",
            Self::Reports => "Reports",
        }
    }
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[component]
pub fn Admin() -> Element {
    let mut tab = use_signal(|| Tab::Overview);

    rsx!(
        Title { "Admin Dashboard | Serene Wings" }
        RoleGate { role: Role::Admin,
            Page { class: "flex flex-col gap-6 max-w-[1440px] mx-auto",
                div { role: "tablist", class: "tabs tabs-boxed",
                    for item in Tab::ALL {
                        a {
                            role: "tab",
                            class: if tab() == item { "tab tab-active" } else { "tab" },
                            onclick: move |_| tab.set(item),
                            "{item.label()}"
                        }
                    }
                }
                match tab() {
                    Tab::Overview => rsx!(Overview {}),
                    Tab::Clients => rsx!(Clients {}),
                    Tab::Workers => rsx!(Workers {}),
                    Tab::Shifts => rsx!(Shifts {}),
                    Tab::Invoices => rsx!(Invoices {}),
                    Tab::Timesheets => rsx!(Timesheets {}),
                    Tab::Expenses => rsx!(Expenses {}),
                    Tab::Reports => rsx!(Reports {}),
                }
            }
        }
    )
}

#[component]
fn Failed(error: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error", "{error}" }
    )
}

#[component]
fn Loading() -> Element {
    rsx!(span { class: "loading loading-spinner" })
}
