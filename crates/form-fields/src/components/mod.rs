pub mod error_message;
pub mod form_control;
pub mod labeled_text_field;

pub use error_message::*;
pub use form_control::*;
pub use labeled_text_field::*;
