use crate::common;
use aurum_rs::spot::{JsonApiSource, ScriptScrapeSource};
use aurum_rs::{AuError, CacheMode, SpotResolver, SpotSource, resolve_spot_price};
use httpmock::Method::GET;
use std::time::Duration;
use url::Url;

#[tokio::test]
async fn first_api_wins_and_later_sources_are_not_touched() {
    let server = common::setup_server();
    let usd = common::mock_spot_usd(&server);
    let xau = common::mock_spot_xau(&server);
    let script = common::mock_spot_script(&server);

    let client = common::client_for(&server);
    let quote = resolve_spot_price(&client).await.expect("spot");

    usd.assert();
    xau.assert_calls(0);
    script.assert_calls(0);
    assert_eq!(quote.value, 2000.0);
    assert!(quote.source.path().ends_with(common::SPOT_USD_PATH));
}

#[tokio::test]
async fn second_api_is_used_when_first_returns_error_status() {
    let server = common::setup_server();
    let usd = common::mock_body(&server, common::SPOT_USD_PATH, 503, "busy");
    let xau = common::mock_spot_xau(&server);
    let script = common::mock_spot_script(&server);

    let client = common::client_for(&server);
    let quote = resolve_spot_price(&client).await.expect("spot");

    usd.assert();
    xau.assert();
    script.assert_calls(0);
    assert_eq!(quote.value, 2012.5);
}

#[tokio::test]
async fn script_scrape_is_the_last_resort() {
    let server = common::setup_server();
    // Not JSON at all.
    let usd = common::mock_body(&server, common::SPOT_USD_PATH, 200, "<html>blocked</html>");
    // Valid JSON without any known price field.
    let xau = common::mock_body(
        &server,
        common::SPOT_XAU_PATH,
        200,
        r#"{"items":[{"curr":"XAU"}]}"#,
    );
    let script = common::mock_spot_script(&server);

    let client = common::client_for(&server);
    let quote = resolve_spot_price(&client).await.expect("spot");

    usd.assert();
    xau.assert();
    script.assert();
    assert_eq!(quote.value, 2345.67);
    assert!(quote.source.path().ends_with(common::SPOT_SCRIPT_PATH));
}

#[tokio::test]
async fn non_positive_price_falls_through_to_next_source() {
    let server = common::setup_server();
    let usd = common::mock_body(
        &server,
        common::SPOT_USD_PATH,
        200,
        r#"{"items":[{"xauPrice":0}]}"#,
    );
    let xau = common::mock_spot_xau(&server);

    let client = common::client_for(&server);
    let quote = resolve_spot_price(&client).await.expect("spot");

    usd.assert();
    xau.assert();
    assert_eq!(quote.value, 2012.5);
}

#[tokio::test]
async fn every_source_failing_yields_none() {
    let server = common::setup_server();
    let usd = common::mock_body(&server, common::SPOT_USD_PATH, 500, "oops");
    let xau = common::mock_body(&server, common::SPOT_XAU_PATH, 404, "missing");
    let script = common::mock_body(&server, common::SPOT_SCRIPT_PATH, 200, "var closed;");

    let client = common::client_for(&server);
    let quote = resolve_spot_price(&client).await;

    usd.assert();
    xau.assert();
    script.assert();
    assert!(quote.is_none());
}

#[tokio::test]
async fn unreachable_hosts_yield_none() {
    // Nothing listens on port 9 (discard) on a test box; connects fail fast.
    let dead = |p: &str| Url::parse(&format!("http://127.0.0.1:9{p}")).unwrap();
    let client = aurum_rs::AuClient::builder()
        .spot_api_urls(vec![dead("/a"), dead("/b")])
        .spot_script_url(dead("/c.js"))
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();

    assert!(resolve_spot_price(&client).await.is_none());
}

#[tokio::test]
async fn referer_and_browser_user_agent_are_sent() {
    let server = common::setup_server();
    let usd = server.mock(|when, then| {
        when.method(GET)
            .path(common::SPOT_USD_PATH)
            .header("referer", "https://www.goldprice.org/")
            .header_exists("user-agent");
        then.status(200).body(r#"{"xauPrice": 1999.99}"#);
    });

    let client = common::client_for(&server);
    let quote = resolve_spot_price(&client).await.expect("spot");

    usd.assert();
    assert_eq!(quote.value, 1999.99);
}

#[tokio::test]
async fn custom_resolver_order_is_respected() {
    let server = common::setup_server();
    let usd = common::mock_spot_usd(&server);
    let script = common::mock_spot_script(&server);

    let client = common::client_for(&server);
    let script_first: Box<dyn SpotSource> = Box::new(ScriptScrapeSource::new(
        Url::parse(&server.url(common::SPOT_SCRIPT_PATH)).unwrap(),
        None,
    ));
    let resolver = SpotResolver::new(vec![script_first])
    .with_source(Box::new(JsonApiSource::new(
        Url::parse(&server.url(common::SPOT_USD_PATH)).unwrap(),
        None,
    )));

    assert_eq!(resolver.source_urls().len(), 2);
    let quote = resolver.resolve(&client, CacheMode::Use).await.expect("spot");

    script.assert();
    usd.assert_calls(0);
    assert_eq!(quote.value, 2345.67);
}

#[tokio::test]
async fn default_chain_lists_apis_then_script() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    let urls: Vec<String> = SpotResolver::for_client(&client)
        .source_urls()
        .into_iter()
        .map(|u| u.path().to_string())
        .collect();
    assert_eq!(
        urls,
        vec![
            common::SPOT_USD_PATH,
            common::SPOT_XAU_PATH,
            common::SPOT_SCRIPT_PATH
        ]
    );
}

#[tokio::test]
async fn slow_source_times_out_and_next_one_wins() {
    let server = common::setup_server();
    let usd = server.mock(|when, then| {
        when.method(GET).path(common::SPOT_USD_PATH);
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(common::fixture("spot_api_USD.json"));
    });
    let xau = common::mock_spot_xau(&server);

    let client = common::builder_for(&server)
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();
    let quote = resolve_spot_price(&client).await.expect("spot");

    usd.assert();
    xau.assert();
    assert_eq!(quote.value, 2012.5);
}

#[tokio::test]
async fn source_errors_are_classified() {
    let server = common::setup_server();
    let _slow = server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200).delay(Duration::from_secs(3)).body("{}");
    });
    let _down = common::mock_body(&server, "/down", 502, "bad gateway");
    let _html = common::mock_body(&server, "/html", 200, "<html></html>");
    let _empty = common::mock_body(&server, "/empty", 200, r#"{"items":[]}"#);

    let client = common::builder_for(&server)
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();
    let source = |path: &str| JsonApiSource::new(Url::parse(&server.url(path)).unwrap(), None);

    let timed_out = source("/slow")
        .fetch_spot(&client, CacheMode::Bypass)
        .await
        .unwrap_err();
    assert!(timed_out.is_network() && !timed_out.is_parse(), "{timed_out}");

    let status = source("/down")
        .fetch_spot(&client, CacheMode::Bypass)
        .await
        .unwrap_err();
    assert!(matches!(status, AuError::Status { status: 502, .. }));
    assert!(status.is_network() && !status.is_parse());

    let not_json = source("/html")
        .fetch_spot(&client, CacheMode::Bypass)
        .await
        .unwrap_err();
    assert!(matches!(not_json, AuError::Json(_)));
    assert!(not_json.is_parse() && !not_json.is_network());

    let no_field = source("/empty")
        .fetch_spot(&client, CacheMode::Bypass)
        .await
        .unwrap_err();
    assert!(matches!(no_field, AuError::Data(_)));
    assert!(no_field.is_parse() && !no_field.is_network());
}

#[tokio::test]
async fn json_body_with_wrong_content_type_still_parses() {
    let server = common::setup_server();
    let usd = server.mock(|when, then| {
        when.method(GET).path(common::SPOT_USD_PATH);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(r#"{"items":[{"xauPrice":2003.5}]}"#);
    });

    let client = common::client_for(&server);
    let quote = resolve_spot_price(&client).await.expect("spot");

    usd.assert();
    assert_eq!(quote.value, 2003.5);
}
