pub mod context;
pub mod error;
pub mod state;

pub use context::*;
pub use error::{FieldError, FieldErrors};
pub use state::*;
