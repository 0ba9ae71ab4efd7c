use crate::interface_adapters::handlers::{
    grab_gold, index, initialize, move_agent, shoot_arrow, solve,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/initialize", post(initialize))
        .route("/move", post(move_agent))
        .route("/grab", post(grab_gold))
        .route("/shoot", post(shoot_arrow))
        .route("/solve", post(solve))
        .with_state(state)
}
