use dioxus::prelude::*;

use crate::client::content::{BUSINESS_NAME, PRIMARY_PHONE, SECONDARY_PHONE, SERVICE_AREA};

/// Page body below the fixed navbar, followed by the contact footer.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        main {
            class: "min-h-screen pt-[64px] p-4 {class}",
            {children}
        }
        footer { class: "footer footer-center bg-base-200 p-6 text-sm",
            p { class: "font-semibold", "{BUSINESS_NAME}" }
            p { "Serving {SERVICE_AREA}" }
            p { "Call {PRIMARY_PHONE} or {SECONDARY_PHONE}" }
        }
    )
}
