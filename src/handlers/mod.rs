pub mod calculate;
pub mod health;
pub mod protocols;
pub mod scenarios;

pub use health::health_check;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Calculator API routes, mounted at the router root.
pub fn create_calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate::calculate))
        .route("/calculate/advanced", post(calculate::calculate_advanced))
        .route("/scenarios", post(scenarios::build_scenario_table))
        .route("/protocols", get(protocols::list_protocols))
}
