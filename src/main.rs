//! Gantt task service entry point.
//!
//! Loads configuration, opens the task store, and starts the HTTP server.

use gantt_tasks::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
