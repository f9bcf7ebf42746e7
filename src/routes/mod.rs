pub mod contact_handlers;
pub mod health;
mod router;
pub mod types;
pub mod user_handlers;

pub use router::{apply_pipeline, create_router};

// Re-export AppState for convenience
pub use crate::state::AppState;
