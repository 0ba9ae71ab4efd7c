// Domain-level simulation: the cave grid, the agent, and action resolution.

pub mod world;
