use dioxus::prelude::*;

use crate::{
    client::{components::StatCard, util::api},
    model::report::ReportDto,
};

use super::{money, Failed, Loading};

#[component]
pub fn Reports() -> Element {
    let report = use_resource(|| async move { api::get::<ReportDto>("/api/reports").await });

    let content = match &*report.read() {
        Some(Ok(report)) => rsx!(
            p { class: "opacity-70", "{report.start} to {report.end}" }
            div { class: "grid gap-4 md:grid-cols-3",
                StatCard { title: "Revenue", value: money(report.total_revenue) }
                StatCard { title: "Shifts", value: "{report.total_shifts}" }
                StatCard { title: "Approved hours", value: "{report.total_hours}" }
                StatCard { title: "Active workers", value: "{report.active_workers}" }
                StatCard { title: "Active clients", value: "{report.active_clients}" }
                StatCard { title: "Average rate", value: money(report.average_hourly_rate) }
            }
            div { class: "grid gap-4 md:grid-cols-2",
                div {
                    h2 { class: "text-xl font-semibold", "Top workers" }
                    ul {
                        for worker in report.top_workers.iter() {
                            li { "{worker.full_name}: {worker.hours} h, " {money(worker.revenue)} }
                        }
                    }
                }
                div {
                    h2 { class: "text-xl font-semibold", "Clients by care level" }
                    ul {
                        for entry in report.care_distribution.iter() {
                            li { "{entry.label}: {entry.count}" }
                        }
                    }
                }
            }
            h2 { class: "text-xl font-semibold", "Monthly revenue" }
            ul {
                for month in report.monthly_revenue.iter() {
                    li { "{month.month}: " {money(month.revenue)} }
                }
            }
        ),
        Some(Err(error)) => rsx!(Failed { error: error.clone() }),
        None => rsx!(Loading {}),
    };

    content
}
