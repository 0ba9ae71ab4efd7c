#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point.
    wumpus_server::run().await;
}
