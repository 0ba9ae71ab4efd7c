use axum::{Json, extract::State, http::StatusCode, response::Html};
use tracing::info;
use uuid::Uuid;

use crate::domain::world::{ActionError, WorldConfig, WumpusWorld};
use crate::interface_adapters::protocol::{
    ActionStatus, ErrorResponse, InitializeRequest, InitializeResponse, MoveRequest, MoveResponse,
    ScoreResponse, SolveResponse, WorldActionRequest, WorldConfigPayload,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::solver::SolverAgent;

// Handler for the browser UI.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

// Handler for creating a new world and registering it under a fresh id.
pub async fn initialize(
    State(state): State<AppState>,
    Json(payload): Json<InitializeRequest>,
) -> (StatusCode, Json<InitializeResponse>) {
    let world = WumpusWorld::new(WorldConfig {
        size: payload.size,
        wumpus_pos: payload.wumpus_pos,
        gold_pos: payload.gold_pos,
        pit_positions: payload.pit_positions,
    });
    let world_id = Uuid::new_v4().to_string();

    let response = InitializeResponse {
        status: ActionStatus::Success,
        world_id: world_id.clone(),
        config: WorldConfigPayload {
            size: world.size,
            wumpus_pos: world.wumpus_pos,
            gold_pos: world.gold_pos,
            pit_positions: world.pit_positions.clone(),
        },
    };

    info!(%world_id, size = world.size, "world created");
    let mut games = state.games.lock().await;
    games.insert(world_id, world);

    (StatusCode::CREATED, Json(response))
}

// Handler for moving the agent one cell.
pub async fn move_agent(
    State(state): State<AppState>,
    Json(payload): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut games = state.games.lock().await;
    let world = games.get_mut(&payload.world_id).ok_or_else(game_not_found)?;

    let outcome = world.move_agent(payload.direction).map_err(soft_error)?;
    if outcome.game_over {
        info!(world_id = %payload.world_id, won = outcome.won, score = outcome.score, "game over");
    }

    Ok(Json(MoveResponse {
        status: ActionStatus::Success,
        message: outcome.message,
        new_position: outcome.new_position,
        percepts: outcome.percepts,
        score: outcome.score,
        game_over: outcome.game_over,
        won: outcome.won,
    }))
}

// Handler for grabbing the gold on the current cell.
pub async fn grab_gold(
    State(state): State<AppState>,
    Json(payload): Json<WorldActionRequest>,
) -> Result<Json<ScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut games = state.games.lock().await;
    let world = games.get_mut(&payload.world_id).ok_or_else(game_not_found)?;

    let outcome = world.grab_gold().map_err(soft_error)?;
    info!(world_id = %payload.world_id, score = outcome.score, "gold grabbed");

    Ok(Json(ScoreResponse {
        status: ActionStatus::Success,
        message: outcome.message.to_string(),
        score: outcome.score,
    }))
}

// Handler for shooting the arrow along the current facing.
pub async fn shoot_arrow(
    State(state): State<AppState>,
    Json(payload): Json<WorldActionRequest>,
) -> Result<Json<ScoreResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut games = state.games.lock().await;
    let world = games.get_mut(&payload.world_id).ok_or_else(game_not_found)?;

    let outcome = world.shoot_arrow().map_err(soft_error)?;
    info!(world_id = %payload.world_id, hit = outcome.hit, "arrow fired");

    Ok(Json(ScoreResponse {
        status: ActionStatus::Success,
        message: outcome.message.to_string(),
        score: outcome.score,
    }))
}

// Handler for running the heuristic solver against the current world state.
pub async fn solve(
    State(state): State<AppState>,
    Json(payload): Json<WorldActionRequest>,
) -> Result<Json<SolveResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut games = state.games.lock().await;
    let world = games.get_mut(&payload.world_id).ok_or_else(game_not_found)?;

    let solution = SolverAgent::new(world).solve();
    info!(world_id = %payload.world_id, steps = solution.len(), "solver finished");

    Ok(Json(SolveResponse {
        status: ActionStatus::Success,
        solution,
    }))
}

// Unknown ids are rejected before any core call.
fn game_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            status: ActionStatus::Error,
            message: "Game not found".to_string(),
        }),
    )
}

// Illegal actions are soft failures: HTTP 200 with an error envelope and no
// state change, matching what the browser UI expects.
fn soft_error(error: ActionError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::OK,
        Json(ErrorResponse {
            status: ActionStatus::Error,
            message: error.message().to_string(),
        }),
    )
}
