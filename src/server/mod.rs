pub mod handlers;
mod router;
mod state;

pub use router::{router, serve};
pub use state::AppState;
