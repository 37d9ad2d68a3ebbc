pub mod consultation_form;
pub mod form_status;
pub mod navbar;
pub mod page;
pub mod role_gate;
pub mod stat_card;
pub mod testimonial_card;

pub use consultation_form::ConsultationForm;
pub use form_status::{FormStatus, Submission};
pub use navbar::Navbar;
pub use page::Page;
pub use role_gate::RoleGate;
pub use stat_card::StatCard;
pub use testimonial_card::TestimonialCard;
