//! Session persistence across process restarts
//!
//! Run with: cargo run --example persistent_session
//!
//! The first run asks you to log in (GAMENEWS_USER/GAMENEWS_PASS); later
//! runs restore the session from disk without touching the network.

use gamenews_rs::{FileSessionStore, NewsClient, SessionHolder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("GAMENEWS_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string());
    let store = FileSessionStore::default_location()
        .ok_or("no per-user data directory on this platform")?;
    println!("Session file: {}", store.path().display());

    let client = NewsClient::from_base_url(&base_url)?;
    let session = SessionHolder::new(client, Box::new(store));

    if let Some(user) = session.current_user() {
        println!("Restored session for {} (id {})", user.username, user.id);
        return Ok(());
    }

    println!("No stored session, logging in...");
    let username = std::env::var("GAMENEWS_USER")?;
    let password = std::env::var("GAMENEWS_PASS")?;
    let user = session.login(&username, &password).await?;
    println!(
        "Logged in as {} (id {}); run again to see the restore",
        user.username, user.id
    );
    Ok(())
}
