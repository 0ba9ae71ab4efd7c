use rand::{Rng, SeedableRng, seq::IndexedRandom};
use rand_pcg::Pcg32;

use crate::domain::world::{Cell, Direction, Percept, START, WumpusWorld};

/// Exploration heuristic that plays a world to completion.
///
/// This is not an inference agent: it never updates the `possible_*`
/// knowledge grids. It prefers neighbors already known safe (in practice only
/// the start cell ever is), then gambles on unvisited neighbors, and stops
/// when neither exists.
pub struct SolverAgent<'a, R: Rng> {
    world: &'a mut WumpusWorld,
    rng: R,
}

impl<'a> SolverAgent<'a, Pcg32> {
    /// Solver with an entropy-seeded random source for tie-breaking.
    pub fn new(world: &'a mut WumpusWorld) -> Self {
        let rng = Pcg32::from_rng(&mut rand::rng());
        Self::with_rng(world, rng)
    }
}

impl<'a, R: Rng> SolverAgent<'a, R> {
    /// Solver with an injected random source, so tests can pin a seed and
    /// assert exact action traces.
    pub fn with_rng(world: &'a mut WumpusWorld, rng: R) -> Self {
        Self { world, rng }
    }

    /// Drives the world until it ends, the agent climbs out, or no move is
    /// left, returning the ordered action labels.
    pub fn solve(&mut self) -> Vec<String> {
        let mut actions = Vec::new();

        while !self.world.game_over {
            let percepts = self.world.percepts();

            if percepts.contains(&Percept::Glitter) && !self.world.has_gold {
                actions.push("Grab".to_string());
                let _ = self.world.grab_gold();
                continue;
            }

            // Climb is an agent action only; it does not touch the world.
            if self.world.has_gold && self.world.agent_pos == START {
                actions.push("Climb".to_string());
                break;
            }

            if let Some(direction) = self.pick_safe_move() {
                actions.push(format!("Move {}", direction.label()));
                let _ = self.world.move_agent(direction);
            } else if let Some(direction) = self.pick_risky_move() {
                actions.push(format!("Move {} (risky)", direction.label()));
                let _ = self.world.move_agent(direction);
            } else {
                break;
            }
        }

        actions
    }

    fn pick_safe_move(&mut self) -> Option<Direction> {
        self.pick_move(|world, cell| world.knowledge.safe[cell.row][cell.col])
    }

    fn pick_risky_move(&mut self) -> Option<Direction> {
        self.pick_move(|world, cell| !world.knowledge.visited[cell.row][cell.col])
    }

    // Uniformly random choice among in-bounds neighbors passing the filter.
    fn pick_move(&mut self, wanted: impl Fn(&WumpusWorld, Cell) -> bool) -> Option<Direction> {
        let candidates: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&direction| {
                self.world
                    .neighbor(self.world.agent_pos, direction)
                    .is_some_and(|cell| wanted(self.world, cell))
            })
            .collect();

        candidates.choose(&mut self.rng).copied()
    }
}
