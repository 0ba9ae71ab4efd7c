use serde::{Deserialize, Serialize};

use crate::domain::world::{Cell, Direction, Percept};

// Outcome marker carried by every JSON response body.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Success,
    Error,
}

// Request payload for creating a new world.
#[derive(Debug, Deserialize)]
pub struct InitializeRequest {
    #[serde(default = "default_size")]
    pub size: usize,
    pub wumpus_pos: Option<Cell>,
    pub gold_pos: Option<Cell>,
    #[serde(default)]
    pub pit_positions: Vec<Cell>,
}

fn default_size() -> usize {
    4
}

// Echo of the configuration the world was actually created with, including
// any randomized hazard placement.
#[derive(Debug, Serialize)]
pub struct WorldConfigPayload {
    pub size: usize,
    pub wumpus_pos: Cell,
    pub gold_pos: Cell,
    pub pit_positions: Vec<Cell>,
}

// Response payload after creating a new world.
#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    pub status: ActionStatus,
    pub world_id: String,
    pub config: WorldConfigPayload,
}

// Request payload for moving the agent.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub world_id: String,
    pub direction: Direction,
}

// Request payload for actions that only target a world (grab, shoot, solve).
#[derive(Debug, Deserialize)]
pub struct WorldActionRequest {
    pub world_id: String,
}

// Response payload for a resolved move.
#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub status: ActionStatus,
    pub message: String,
    pub new_position: Cell,
    pub percepts: Vec<Percept>,
    pub score: i64,
    pub game_over: bool,
    pub won: bool,
}

// Response payload for grab and shoot, which only report score and text.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub status: ActionStatus,
    pub message: String,
    pub score: i64,
}

// Response payload carrying the solver's action trace.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub status: ActionStatus,
    pub solution: Vec<String>,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: ActionStatus,
    pub message: String,
}
