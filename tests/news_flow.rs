use std::time::Duration;

use futures::StreamExt;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use headlines::domain::{FeedItem, FetchResult, SourceKey};
use headlines::presentation::{NewsViewModel, UiState};
use headlines::services::{CachedNewsRepository, NewsRepository};
use headlines::sources::HttpFeedSource;
use headlines::storage::{NewsCacheRepository, SqliteNewsCacheRepository, SqliteStorage};

const ONE_ITEM_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>DD News</title>
    <item>
      <title>dd news</title>
      <link>https://ddnews.gov.in/rss-feeds</link>
      <description>d</description>
      <pubDate></pubDate>
    </item>
  </channel>
</rss>"#;

const AIR_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <item>
      <title>Air News</title>
      <link>https://www.newsonair.gov.in/News?title=one</link>
      <pubDate>Wed, 4 Jul 2001 12:08:56 +0530</pubDate>
    </item>
    <item>
      <title>More Air News</title>
      <link>https://www.newsonair.gov.in/News?title=two</link>
      <pubDate>Wed, 4 Jul 2001 13:08:56 +0530</pubDate>
    </item>
  </channel>
</rss>"#;

fn repository() -> CachedNewsRepository<HttpFeedSource, SqliteNewsCacheRepository> {
    let storage = SqliteStorage::in_memory().unwrap();
    CachedNewsRepository::new(
        HttpFeedSource::new(),
        SqliteNewsCacheRepository::new(storage),
    )
}

async fn serve(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn dd_item() -> FeedItem {
    FeedItem::new("dd news", "https://ddnews.gov.in/rss-feeds")
        .with_description(Some("d".to_string()))
}

#[tokio::test]
async fn test_first_fetch_populates_cache() {
    let server = MockServer::start().await;
    serve(&server, "/dd/rss-feeds", 200, ONE_ITEM_RSS).await;
    let repo = repository();

    let results: Vec<FetchResult> = repo
        .fetch(&format!("{}/dd/rss-feeds", server.uri()))
        .collect()
        .await;

    assert_eq!(results, vec![FetchResult::Success(vec![dd_item()])]);
    assert_eq!(
        repo.cache().get(SourceKey::Dd).unwrap().unwrap().items,
        vec![dd_item()]
    );
}

#[tokio::test]
async fn test_second_fetch_serves_cache_then_fresh_items() {
    let server = MockServer::start().await;
    serve(&server, "/dd/rss-feeds", 200, ONE_ITEM_RSS).await;
    let repo = repository();
    let url = format!("{}/dd/rss-feeds", server.uri());

    let _: Vec<FetchResult> = repo.fetch(&url).collect().await;
    let results: Vec<FetchResult> = repo.fetch(&url).collect().await;

    assert_eq!(
        results,
        vec![
            FetchResult::Success(vec![dd_item()]),
            FetchResult::Success(vec![dd_item()]),
        ]
    );
}

#[tokio::test]
async fn test_server_error_keeps_cached_rows() {
    let server = MockServer::start().await;
    serve(&server, "/newsonair/top_rss.aspx", 500, "").await;
    let repo = repository();
    let cached = vec![FeedItem::new("stale", "https://www.newsonair.gov.in/old")];
    repo.cache().replace_all(SourceKey::Air, &cached).unwrap();

    let results: Vec<FetchResult> = repo
        .fetch(&format!("{}/newsonair/top_rss.aspx", server.uri()))
        .collect()
        .await;

    assert_eq!(
        results,
        vec![
            FetchResult::Success(cached.clone()),
            FetchResult::Error {
                items: Some(cached.clone()),
                cause: Some("HTTP status 500".to_string()),
            },
        ]
    );
    assert_eq!(repo.cache().get(SourceKey::Air).unwrap().unwrap().items, cached);
}

#[tokio::test]
async fn test_feed_without_items_reports_null_items() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/timesofindia/top.cms",
        200,
        r#"<rss version="2.0"><channel><title>Quiet day</title></channel></rss>"#,
    )
    .await;
    let repo = repository();

    let results: Vec<FetchResult> = repo
        .fetch(&format!("{}/timesofindia/top.cms", server.uri()))
        .collect()
        .await;

    assert_eq!(
        results,
        vec![FetchResult::Error {
            items: None,
            cause: Some("items are null".to_string()),
        }]
    );
    assert!(repo.cache().get(SourceKey::Toi).unwrap().is_none());
}

#[tokio::test]
async fn test_view_model_shows_labelled_content() {
    let server = MockServer::start().await;
    serve(&server, "/newsonair/top_rss.aspx", 200, AIR_RSS).await;
    let (view_model, _events) = NewsViewModel::new(repository());

    view_model
        .load(&format!("{}/newsonair/top_rss.aspx", server.uri()))
        .await
        .unwrap();

    match view_model.state() {
        UiState::Content(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].title, "Air News");
            assert!(items.iter().all(|item| item.source == "newsonair"));
        }
        other => panic!("Expected content, got {:?}", other),
    }
}

#[tokio::test]
async fn test_view_model_shows_cached_items_with_error() {
    let server = MockServer::start().await;
    serve(&server, "/dd/rss-feeds", 503, "").await;
    let repo = repository();
    repo.cache().replace_all(SourceKey::Dd, &[dd_item()]).unwrap();
    let (view_model, _events) = NewsViewModel::new(repo);

    view_model
        .load(&format!("{}/dd/rss-feeds", server.uri()))
        .await
        .unwrap();

    let state = view_model.state();
    assert_eq!(state.error(), Some("HTTP status 503"));
    assert_eq!(state.items().map(|items| items[0].source.as_str()), Some("dd"));
}

#[tokio::test]
async fn test_superseded_load_still_persists_its_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dd/rss-feeds"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ONE_ITEM_RSS)
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    serve(&server, "/newsonair/top_rss.aspx", 200, AIR_RSS).await;

    let storage = SqliteStorage::in_memory().unwrap();
    let cache = SqliteNewsCacheRepository::new(storage.clone());
    cache
        .replace_all(
            SourceKey::Dd,
            &[FeedItem::new("stale dd", "https://ddnews.gov.in/old")],
        )
        .unwrap();
    let repo = CachedNewsRepository::new(
        HttpFeedSource::new(),
        SqliteNewsCacheRepository::new(storage),
    );
    let (view_model, _events) = NewsViewModel::new(repo);

    let first = view_model.load(&format!("{}/dd/rss-feeds", server.uri()));
    let second = view_model.load(&format!("{}/newsonair/top_rss.aspx", server.uri()));
    second.await.unwrap();
    first.await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 2);
    assert_eq!(
        cache.get(SourceKey::Dd).unwrap().unwrap().items,
        vec![dd_item()]
    );
    assert_eq!(view_model.state().items().unwrap()[0].title, "Air News");
}
