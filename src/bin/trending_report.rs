// Print the trending searches from the configured analytics backend
//
// Handy for checking that a deployment records searches:
//   cargo run --bin trending_report --features ssr -- 10

use anyhow::Result;
use movie_finder::web_app::api::config::AppConfig;
use movie_finder::web_app::api::services::Services;
use movie_finder::web_app::model::TRENDING_LIMIT;

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let limit = match std::env::args().nth(1) {
        Some(raw) => raw.parse::<usize>()?,
        None => TRENDING_LIMIT,
    };

    let config = AppConfig::from_env()?;
    println!("Analytics backend: {}", config.analytics.name());

    let services = Services::from_config(&config).await?;
    let records = services.analytics.top_trending(limit).await?;

    if records.is_empty() {
        println!("No searches recorded yet.");
        return Ok(());
    }

    println!("\n{:<4} {:<30} {:>8} {:>10}", "#", "search term", "count", "movie id");
    for (index, record) in records.iter().enumerate() {
        println!(
            "{:<4} {:<30} {:>8} {:>10}",
            index + 1,
            record.search_term,
            record.count,
            record.movie_id
        );
    }

    Ok(())
}
