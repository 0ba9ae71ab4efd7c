// Application use cases built on top of the domain simulation.

pub mod solver;
