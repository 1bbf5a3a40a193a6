pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;

pub use config::Settings;
pub use error::AppError;

/// Shared state for the HTTP layer. The engine itself is stateless;
/// only request defaults live here.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}
