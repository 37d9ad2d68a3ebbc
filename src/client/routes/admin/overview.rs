use dioxus::prelude::*;

use crate::{
    client::{components::StatCard, util::api},
    model::dashboard::DashboardDto,
};

use super::{money, Failed, Loading};

#[component]
pub fn Overview() -> Element {
    let dashboard = use_resource(|| async move { api::get::<DashboardDto>("/api/dashboard").await });

    let content = match &*dashboard.read() {
        Some(Ok(dashboard)) => {
            let stats = &dashboard.stats;

            rsx!(
                div { class: "grid gap-4 md:grid-cols-4",
                    StatCard {
                        title: "Workers",
                        value: "{stats.total_workers}",
                        detail: format!("{} active", stats.active_workers),
                    }
                    StatCard {
                        title: "Clients",
                        value: "{stats.total_clients}",
                        detail: format!("{} active", stats.active_clients),
                    }
                    StatCard { title: "Shifts today", value: "{stats.shifts_today}" }
                    StatCard {
                        title: "Pending timesheets",
                        value: "{stats.pending_timesheets}",
                        detail: format!("{} hours", stats.total_hours),
                    }
                    StatCard {
                        title: "Draft invoices",
                        value: "{stats.draft_invoices}",
                        detail: money(stats.draft_invoice_total),
                    }
                    StatCard { title: "Pending expenses", value: "{stats.pending_expenses}" }
                }
                h2 { class: "text-xl font-semibold", "Recent activity" }
                ul { class: "list bg-base-100 rounded-box shadow-sm",
                    for activity in dashboard.recent_activity.iter() {
                        li { class: "list-row",
                            span { "{activity.created_at}" }
                            span { class: "font-semibold", {activity.user_name.clone().unwrap_or_else(|| "System".to_string())} }
                            span { "{activity.action}" }
                        }
                    }
                }
            )
        }
        Some(Err(error)) => rsx!(Failed { error: error.clone() }),
        None => rsx!(Loading {}),
    };

    content
}
