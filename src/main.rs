use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use headlines::cli::{Cli, Commands};
use headlines::config::Config;
use headlines::domain::SourceKey;
use headlines::errors::{NewsError, NewsResult};
use headlines::presentation::{DisplayItem, Event, EventReceiver, NewsViewModel, UiState};
use headlines::services::{CachedNewsRepository, NewsRepository};
use headlines::sources::HttpFeedSource;
use headlines::storage::{NewsCacheRepository, SqliteNewsCacheRepository, SqliteStorage};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Initialize storage
    let storage = SqliteStorage::new(&config.db_path)
        .with_context(|| format!("Failed to open cache at {}", config.db_path))?;
    let cache = SqliteNewsCacheRepository::new(storage);

    match cli.command {
        Commands::Show {
            source,
            url,
            open,
            share,
        } => {
            let url = match url {
                Some(url) => validate_url(&url)?,
                None => source.unwrap_or(SourceKey::Dd).feed_url().to_string(),
            };
            let source = HttpFeedSource::with_timeout(config.http_timeout);
            let repository = CachedNewsRepository::new(source, cache);
            cmd_show(repository, &url, open, share).await?;
        }
        Commands::Sources => cmd_sources(),
        Commands::Cache { source } => cmd_cache(&cache, source)?,
        Commands::Clear { source } => cmd_clear(&cache, source)?,
    }

    Ok(())
}

fn validate_url(url: &str) -> NewsResult<String> {
    url::Url::parse(url)
        .map(|_| url.to_string())
        .map_err(|e| NewsError::InvalidUrl(format!("{}: {}", url, e)))
}

async fn cmd_show<R: NewsRepository + 'static>(
    repository: R,
    url: &str,
    open: Option<usize>,
    share: Option<usize>,
) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let (view_model, mut events) = NewsViewModel::new(repository);
    let mut states = view_model.subscribe();

    let mut pipeline = view_model.load(url);

    // Render every state until the pipeline finishes
    loop {
        tokio::select! {
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                render(&states.borrow_and_update(), today);
            }
            joined = &mut pipeline => {
                joined.context("News pipeline panicked")?;
                if states.has_changed().unwrap_or(false) {
                    render(&states.borrow_and_update(), today);
                }
                break;
            }
        }
    }

    let state = view_model.state();

    if let Some(n) = open {
        let item = pick(&state, n)?;
        view_model.validate_and_trigger_open_link(Some(item.link.as_str()));
        if item.link.is_empty() {
            println!("Headline {} has no link to open.", n);
        }
    }

    if let Some(n) = share {
        let item = pick(&state, n)?;
        if item.is_shareable() {
            view_model.share_news(&item.link);
        } else {
            println!("Headline {} has no link to share.", n);
        }
    }

    drain_events(&mut events)
}

fn pick(state: &UiState, n: usize) -> NewsResult<&DisplayItem> {
    let items = state.items().unwrap_or_default();

    if n == 0 || n > items.len() {
        return Err(NewsError::InvalidInput(format!(
            "Headline {} out of range (1-{})",
            n,
            items.len()
        )));
    }

    Ok(&items[n - 1])
}

fn drain_events(events: &mut EventReceiver) -> anyhow::Result<()> {
    while let Ok(event) = events.try_recv() {
        match event {
            Event::OpenLink(url) => {
                println!("Opening {}", url);
                open::that(&url).with_context(|| format!("Failed to open {}", url))?;
            }
            Event::ShareNews(url) => {
                println!("Share: {}", url);
            }
        }
    }

    Ok(())
}

fn render(state: &UiState, today: NaiveDate) {
    match state {
        UiState::Loading => println!("Loading..."),
        UiState::Content(items) => render_items(items, today),
        UiState::Error { items, cause } => {
            if let Some(items) = items {
                render_items(items, today);
            }
            println!("Could not refresh: {}", cause);
        }
    }
}

fn render_items(items: &[DisplayItem], today: NaiveDate) {
    if items.is_empty() {
        println!("No headlines.");
        return;
    }

    println!();
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item.title);
        println!("     {} [{}]", item.published_label(today), item.source);
        if !item.link.is_empty() {
            println!("     {}", item.link);
        }
    }
    println!();
}

fn cmd_sources() {
    println!("Publishers:\n");
    for key in SourceKey::ALL {
        println!("  {:<15} {}", key.as_str(), key.title());
        println!("    Feed: {}", key.feed_url());
    }
}

fn cmd_cache(cache: &SqliteNewsCacheRepository, source: SourceKey) -> NewsResult<()> {
    let today = chrono::Local::now().date_naive();

    match cache.get(source)? {
        Some(row) if !row.is_empty() => {
            println!(
                "{} ({} cached headlines, updated {}):",
                source.title(),
                row.items.len(),
                row.updated_at.as_deref().unwrap_or("unknown")
            );
            let items: Vec<DisplayItem> = row.items.into_iter().map(DisplayItem::from).collect();
            render_items(&items, today);
        }
        _ => println!("No cached news for {}.", source.title()),
    }

    Ok(())
}

fn cmd_clear(cache: &SqliteNewsCacheRepository, source: SourceKey) -> NewsResult<()> {
    cache.delete_all(source)?;
    println!("Cleared cached news for {}.", source.title());
    Ok(())
}
