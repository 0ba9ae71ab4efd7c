use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grid coordinate, serialized as a `[row, col]` pair for the browser UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

/// The agent always enters the cave at the bottom-left corner.
pub const START: Cell = Cell { row: 0, col: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    // Row grows upward, column grows rightward.
    fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Percept {
    Glitter,
    Stench,
    Breeze,
}

impl Percept {
    pub fn label(self) -> &'static str {
        match self {
            Percept::Glitter => "Glitter",
            Percept::Stench => "Stench",
            Percept::Breeze => "Breeze",
        }
    }
}

// Rejected actions carry no state change; callers render these as soft errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    GameAlreadyOver,
    OutOfBounds,
    NoGoldHere,
    NoArrow,
}

impl ActionError {
    pub fn message(self) -> &'static str {
        match self {
            ActionError::GameAlreadyOver => "Game is already over",
            ActionError::OutOfBounds => "Cannot move outside the grid",
            ActionError::NoGoldHere => "No gold to grab here!",
            ActionError::NoArrow => "You have no arrows left!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub new_position: Cell,
    pub percepts: Vec<Percept>,
    pub score: i64,
    pub game_over: bool,
    pub won: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct GrabOutcome {
    pub score: i64,
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct ShootOutcome {
    pub hit: bool,
    pub score: i64,
    pub message: &'static str,
}

/// Per-cell knowledge grids the solver reads while exploring.
///
/// `possible_wumpus` and `possible_pit` are reserved for a future inference
/// agent; nothing updates them after construction, so the solver remains a
/// pure exploration heuristic.
#[derive(Debug, Clone)]
pub struct Knowledge {
    pub visited: Vec<Vec<bool>>,
    pub safe: Vec<Vec<bool>>,
    pub possible_wumpus: Vec<Vec<bool>>,
    pub possible_pit: Vec<Vec<bool>>,
}

impl Knowledge {
    fn new(size: usize) -> Self {
        let mut knowledge = Self {
            visited: vec![vec![false; size]; size],
            safe: vec![vec![false; size]; size],
            possible_wumpus: vec![vec![true; size]; size],
            possible_pit: vec![vec![true; size]; size],
        };

        // The start cell is the only cell known safe up front.
        knowledge.visited[START.row][START.col] = true;
        knowledge.safe[START.row][START.col] = true;
        knowledge.possible_wumpus[START.row][START.col] = false;
        knowledge.possible_pit[START.row][START.col] = false;
        knowledge
    }
}

/// Construction parameters for a world.
///
/// Supplied positions are trusted as-is: no bounds checks and no collision
/// checks between hazards, gold, or the start cell.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    pub size: usize,
    pub wumpus_pos: Option<Cell>,
    pub gold_pos: Option<Cell>,
    pub pit_positions: Vec<Cell>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 4,
            wumpus_pos: None,
            gold_pos: None,
            pit_positions: Vec::new(),
        }
    }
}

/// The cave simulation: grid state, agent state, and action resolution.
#[derive(Debug, Clone)]
pub struct WumpusWorld {
    pub size: usize,
    pub agent_pos: Cell,
    pub agent_direction: Direction,
    pub has_gold: bool,
    pub has_arrow: bool,
    pub score: i64,
    pub game_over: bool,
    pub won: bool,
    pub wumpus_pos: Cell,
    pub gold_pos: Cell,
    pub pit_positions: Vec<Cell>,
    pub knowledge: Knowledge,
}

impl WumpusWorld {
    /// Creates a world with entropy-seeded hazard placement.
    pub fn new(config: WorldConfig) -> Self {
        Self::with_rng(config, &mut rand::rng())
    }

    /// Creates a world using the provided random source, so tests can pin a
    /// seed and get reproducible hazard placement.
    pub fn with_rng<R: Rng + ?Sized>(config: WorldConfig, rng: &mut R) -> Self {
        let size = config.size;
        let wumpus_pos = config
            .wumpus_pos
            .unwrap_or_else(|| random_hazard(size, rng));
        let gold_pos = config.gold_pos.unwrap_or_else(|| random_hazard(size, rng));

        Self {
            size,
            agent_pos: START,
            agent_direction: Direction::Right,
            has_gold: false,
            has_arrow: true,
            score: 0,
            game_over: false,
            won: false,
            wumpus_pos,
            gold_pos,
            pit_positions: config.pit_positions,
            knowledge: Knowledge::new(size),
        }
    }

    /// Percepts at the agent's current cell, in Glitter, Stench, Breeze order.
    pub fn percepts(&self) -> Vec<Percept> {
        let mut percepts = Vec::new();

        if self.agent_pos == self.gold_pos {
            percepts.push(Percept::Glitter);
        }
        if is_adjacent(self.agent_pos, self.wumpus_pos) {
            percepts.push(Percept::Stench);
        }
        if self
            .pit_positions
            .iter()
            .any(|&pit| is_adjacent(self.agent_pos, pit))
        {
            percepts.push(Percept::Breeze);
        }

        percepts
    }

    /// Moves the agent one cell and resolves death/win checks at the target.
    pub fn move_agent(&mut self, direction: Direction) -> Result<MoveOutcome, ActionError> {
        if self.game_over {
            return Err(ActionError::GameAlreadyOver);
        }

        // Facing updates before the bounds check, so a rejected move still
        // turns the agent.
        self.agent_direction = direction;

        let Some(new_pos) = self.neighbor(self.agent_pos, direction) else {
            return Err(ActionError::OutOfBounds);
        };

        self.agent_pos = new_pos;
        self.score -= 1;
        self.knowledge.visited[new_pos.row][new_pos.col] = true;

        let percepts = self.percepts();
        // Death checks take priority over the win check.
        let (message, game_over, won) = if new_pos == self.wumpus_pos {
            ("You were eaten by the Wumpus!".to_string(), true, false)
        } else if self.pit_positions.contains(&new_pos) {
            ("You fell into a pit!".to_string(), true, false)
        } else if self.has_gold && new_pos == START {
            (
                "You won! You found the gold and returned safely!".to_string(),
                true,
                true,
            )
        } else {
            let joined = percepts
                .iter()
                .map(|percept| percept.label())
                .collect::<Vec<_>>()
                .join(", ");
            (
                format!("Moved {}. Percepts: {}", direction.label(), joined),
                false,
                false,
            )
        };

        self.game_over = game_over;
        self.won = won;

        Ok(MoveOutcome {
            new_position: new_pos,
            percepts,
            score: self.score,
            game_over,
            won,
            message,
        })
    }

    /// Picks up the gold when standing on it. Deliberately not gated by
    /// `game_over`, matching the original rules.
    pub fn grab_gold(&mut self) -> Result<GrabOutcome, ActionError> {
        if self.agent_pos == self.gold_pos && !self.has_gold {
            self.has_gold = true;
            self.score += 1000;
            return Ok(GrabOutcome {
                score: self.score,
                message: "You grabbed the gold! Now return to the start!",
            });
        }

        Err(ActionError::NoGoldHere)
    }

    /// Fires the single arrow along the current facing direction.
    ///
    /// A hit is reported when the wumpus lies strictly beyond the agent on the
    /// matching row or column, but the wumpus stays on the board either way:
    /// killing it has no effect on later percepts or death checks.
    pub fn shoot_arrow(&mut self) -> Result<ShootOutcome, ActionError> {
        if !self.has_arrow {
            return Err(ActionError::NoArrow);
        }

        self.has_arrow = false;
        self.score -= 10;

        let hit = is_in_line(self.agent_pos, self.agent_direction, self.wumpus_pos);
        Ok(ShootOutcome {
            hit,
            score: self.score,
            message: if hit {
                "You killed the Wumpus!"
            } else {
                "You missed the Wumpus!"
            },
        })
    }

    /// Destination of a one-cell step from `from`, or None when it leaves the
    /// grid.
    pub fn neighbor(&self, from: Cell, direction: Direction) -> Option<Cell> {
        let (row_delta, col_delta) = direction.offset();
        let row = from.row as i64 + row_delta;
        let col = from.col as i64 + col_delta;

        if row < 0 || col < 0 || row >= self.size as i64 || col >= self.size as i64 {
            return None;
        }

        Some(Cell {
            row: row as usize,
            col: col as usize,
        })
    }
}

// Manhattan distance of exactly one: the four orthogonal neighbors.
fn is_adjacent(a: Cell, b: Cell) -> bool {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
}

fn is_in_line(start: Cell, direction: Direction, target: Cell) -> bool {
    match direction {
        Direction::Up => start.col == target.col && target.row > start.row,
        Direction::Down => start.col == target.col && target.row < start.row,
        Direction::Left => start.row == target.row && target.col < start.col,
        Direction::Right => start.row == target.row && target.col > start.col,
    }
}

fn random_cell<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Cell {
    Cell {
        row: rng.random_range(0..size),
        col: rng.random_range(0..size),
    }
}

// Resample until the hazard lands away from the start cell.
fn random_hazard<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Cell {
    loop {
        let cell = random_cell(size, rng);
        if cell != START {
            return cell;
        }
    }
}
