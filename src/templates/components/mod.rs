pub mod cards;
pub mod error;
pub mod format;
pub mod lead_form;

pub use cards::{blog_card, empty_state, property_card};
pub use error::html_error_response;
pub use lead_form::lead_form;
