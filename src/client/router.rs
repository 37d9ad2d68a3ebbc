use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{About, Admin, Contact, Home, Login, NotFound, Services, Testimonials, Worker},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/services")]
    Services {},

    #[route("/about")]
    About {},

    #[route("/testimonials")]
    Testimonials {},

    #[route("/contact")]
    Contact {},

    #[route("/login")]
    Login {},

    #[route("/admin")]
    Admin {},

    #[route("/worker")]
    Worker {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
