use dioxus::prelude::*;

/// Progress of a form submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Submission {
    #[default]
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

impl Submission {
    pub fn from_result(result: Result<String, String>) -> Self {
        match result {
            Ok(message) => Self::Sent(message),
            Err(error) => Self::Failed(error),
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Inline success or error text under a form.
#[component]
pub fn FormStatus(submission: Submission) -> Element {
    match submission {
        Submission::Idle => rsx!(),
        Submission::Sending => rsx!(
            p { class: "text-sm opacity-70", "Sending..." }
        ),
        Submission::Sent(message) => rsx!(
            div { role: "alert", class: "alert alert-success", "{message}" }
        ),
        Submission::Failed(error) => rsx!(
            div { role: "alert", class: "alert alert-error", "{error}" }
        ),
    }
}
