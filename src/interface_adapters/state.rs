use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::world::WumpusWorld;

// Shared application state: the in-memory registry of live games, keyed by
// opaque world id. Games live until the process exits; there is no eviction.
#[derive(Clone, Default)]
pub struct AppState {
    pub games: Arc<Mutex<HashMap<String, WumpusWorld>>>,
}
