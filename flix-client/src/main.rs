use futures::future::join_all;
use tracing_subscriber::EnvFilter;

use flix_client::flix::{BestMatchQuery, FlixClient, FlixConfig, SuggestQuery};

/// Queries looked up when none are given on the command line.
const DEFAULT_QUERIES: &[&str] = &["Karlsruhe", "Amsterdam", "Berlin"];

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = FlixConfig::new();
    if let Ok(url) = std::env::var("FLIX_API_URL") {
        config = config.with_base_url(url);
    }
    if let Ok(url) = std::env::var("FLIX_WEB_URL") {
        config = config.with_web_url(url);
    }

    let client = FlixClient::new(config).expect("Failed to create client");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let queries: Vec<String> = if args.is_empty() {
        DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect()
    } else {
        args
    };

    // Full suggestion list for the first query
    let first = &queries[0];
    match client.suggest_city(&SuggestQuery::new(first.as_str())).await {
        Ok(results) => {
            println!("Search results for '{first}':");
            for result in &results {
                println!();
                println!("{} (Relevance: {:.2})", result.name, result.relevance());
                println!("  ID: {}", result.id);
                println!("  Country: {}", result.country);
                println!("  District: {}", result.district.as_deref().unwrap_or("N/A"));
                println!("  FlixBus city: {}", result.is_flixbus_city);
                println!("  Has train station: {}", result.has_train_station);
                println!("  Stations:");
                for station in result.stations_by_importance() {
                    println!("    - {} ({})", station.name, station.kind());
                }
            }
        }
        Err(e) => eprintln!("Failed to search for '{first}': {e}"),
    }

    // Best matches for every query, looked up concurrently
    let lookups = queries
        .iter()
        .map(|q| client.get_best_match(BestMatchQuery::new(q.as_str())));
    let matches = join_all(lookups).await;

    println!();
    println!("Best matches:");
    for (query, outcome) in queries.iter().zip(matches) {
        match outcome {
            Ok(Some(best)) => println!("  {query} -> {} ({})", best.name, best.id),
            Ok(None) => println!("  {query} -> no match"),
            Err(e) => eprintln!("  {query} -> error: {e}"),
        }
    }
}
