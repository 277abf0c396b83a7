//! Deckroom - real-time session broker for two-player card matches
//!
//! This crate is the *composition root* for the broker.
//! It loads configuration, builds the router, and starts the server.

mod run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run::run().await
}
