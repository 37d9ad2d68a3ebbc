use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{FormStatus, Page, Submission, TestimonialCard},
        content::with_default_testimonials,
        util::api::{self, Method},
    },
    model::{
        api::MessageDto,
        public::{TestimonialDto, TestimonialFormDto},
    },
};

#[component]
pub fn Testimonials() -> Element {
    let mut testimonials = use_resource(|| async move {
        let stored = api::get::<Vec<TestimonialDto>>("/api/testimonials")
            .await
            .unwrap_or_default();

        with_default_testimonials(stored)
    });

    let mut form = use_signal(TestimonialFormDto::default);
    let mut submission = use_signal(Submission::default);

    let onsubmit = move |event: FormEvent| async move {
        event.prevent_default();
        submission.set(Submission::Sending);

        let result = api::send::<_, MessageDto>(Method::Post, "/api/testimonials", &form())
            .await
            .map(|response| response.message);

        if result.is_ok() {
            form.set(TestimonialFormDto::default());
            testimonials.restart();
        }
        submission.set(Submission::from_result(result));
    };

    let rating = form().rating.unwrap_or(5);

    rsx!(
        Title { "Testimonials | Serene Wings" }
        Page { class: "flex flex-col items-center gap-10",
            h1 { class: "text-3xl font-bold", "What Families Say" }
            div { class: "grid gap-4 md:grid-cols-3 max-w-[1200px]",
                match &*testimonials.read() {
                    Some(list) => rsx!(
                        for testimonial in list.iter().cloned() {
                            TestimonialCard { testimonial }
                        }
                    ),
                    None => rsx!(
                        div { class: "skeleton h-40 w-80" }
                    ),
                }
            }
            form { class: "card bg-base-100 shadow-md w-full max-w-xl", onsubmit,
                div { class: "card-body flex flex-col gap-3",
                    h2 { class: "card-title", "Share your experience" }
                    input {
                        class: "input input-bordered",
                        placeholder: "Your name",
                        value: "{form().name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{form().email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "City or neighborhood",
                        value: "{form().location}",
                        oninput: move |e| form.write().location = e.value(),
                    }
                    select {
                        class: "select select-bordered",
                        value: "{rating}",
                        onchange: move |e| form.write().rating = e.value().parse().ok(),
                        for stars in (1..=5).rev() {
                            option { value: "{stars}", "{stars} stars" }
                        }
                    }
                    textarea {
                        class: "textarea textarea-bordered",
                        placeholder: "Your review",
                        value: "{form().text}",
                        oninput: move |e| form.write().text = e.value(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submission().is_sending(),
                        "Submit Review"
                    }
                    FormStatus { submission: submission() }
                }
            }
        }
    )
}
