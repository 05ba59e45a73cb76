pub mod sign_up;
#[cfg(target_arch = "wasm32")]
pub mod state;

pub use sign_up::*;
#[cfg(target_arch = "wasm32")]
pub use state::*;
