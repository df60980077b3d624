//! Basic GameNews client walkthrough
//!
//! Run with: cargo run --example basic
//!
//! Points at a local server by default; set GAMENEWS_URL to target another
//! deployment, and GAMENEWS_USER/GAMENEWS_PASS to exercise the account and
//! bookmark flows.

use gamenews_rs::storage::MemorySessionStore;
use gamenews_rs::{BookmarkStore, NewsClient, NewsFilter, SessionHolder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("GAMENEWS_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string());

    println!("Connecting to {}...", base_url);
    let client = NewsClient::from_base_url(&base_url)?;

    // List what the server is aggregating
    let sources = client.list_sources().await?;
    println!("{} sources: {}", sources.len(), sources.join(", "));

    // Latest articles, unfiltered
    let articles = client.fetch_news(&NewsFilter::default()).await?;
    println!("{} articles:", articles.len());
    for article in articles.iter().take(5) {
        println!("  [{}] {} ({})", article.source, article.title, article.date);
    }

    // Free-text search
    let hits = client.search_news("zelda").await?;
    println!("Search for 'zelda' matched {} articles", hits.len());

    // The account and bookmark flows need credentials
    let (Ok(username), Ok(password)) = (
        std::env::var("GAMENEWS_USER"),
        std::env::var("GAMENEWS_PASS"),
    ) else {
        println!("Set GAMENEWS_USER and GAMENEWS_PASS to try the bookmark flow");
        return Ok(());
    };

    let session = SessionHolder::new(client, Box::new(MemorySessionStore::default()));
    let user = session.login(&username, &password).await?;
    println!("Logged in as {} (id {})", user.username, user.id);

    if let Some(authed) = session.authenticated_client()? {
        let bookmarks = BookmarkStore::new(authed);
        bookmarks.refresh().await?;
        println!("{} bookmarks on the server", bookmarks.len());

        if let Some(first) = articles.first() {
            bookmarks.add(&first.id, &first.title).await?;
            println!("Bookmarked '{}'", first.title);
            println!("Bookmarked ids: {:?}", bookmarks.list());

            bookmarks.remove(&first.id).await?;
            println!("Removed it again");
        }
    }

    session.logout();
    println!("Logged out");
    Ok(())
}
