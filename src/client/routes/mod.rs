pub mod about;
pub mod admin;
pub mod contact;
pub mod home;
pub mod login;
pub mod not_found;
pub mod services;
pub mod testimonials;
pub mod worker;

pub use about::About;
pub use admin::Admin;
pub use contact::Contact;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use services::Services;
pub use testimonials::Testimonials;
pub use worker::Worker;
