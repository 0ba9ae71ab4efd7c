use std::env;

// Runtime/server constants (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("WUMPUS_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000)
}
