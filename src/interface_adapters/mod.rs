// HTTP adapters between the web framework and the game use cases.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
