use crate::common;
use aurum_rs::{CacheMode, fetch_daily_series};
use chrono::NaiveDate;
use httpmock::Method::GET;

#[tokio::test]
async fn offline_history_uses_fixture() {
    let server = common::setup_server();
    let mock = common::mock_history(&server);

    let client = common::client_for(&server);
    let series = fetch_daily_series(&client, CacheMode::Use).await;

    mock.assert();
    assert_eq!(series.len(), 7);
    assert!(
        series
            .points()
            .windows(2)
            .all(|w| w[0].date() <= w[1].date()),
        "series must be ascending"
    );
}

#[tokio::test]
async fn history_sends_its_referer() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(common::HISTORY_PATH)
            .query_param("s", "xauusd")
            .query_param("i", "d")
            .header("referer", "https://stooq.com/");
        then.status(200)
            .body("Date,Open,High,Low,Close\n2025-01-02,1,2,3,2650.25\n");
    });

    let client = common::client_for(&server);
    let series = fetch_daily_series(&client, CacheMode::Use).await;

    mock.assert();
    assert_eq!(series.len(), 1);
    assert_eq!(
        series.points()[0].date(),
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    );
}

#[tokio::test]
async fn history_status_error_yields_empty_series() {
    let server = common::setup_server();
    let mock = common::mock_body(&server, common::HISTORY_PATH, 500, "oops");

    let client = common::client_for(&server);
    let series = fetch_daily_series(&client, CacheMode::Use).await;

    mock.assert();
    assert!(series.is_empty());
}

#[tokio::test]
async fn history_non_csv_body_yields_empty_series() {
    let server = common::setup_server();
    let mock = common::mock_body(
        &server,
        common::HISTORY_PATH,
        200,
        "Exceeded the daily hits limit",
    );

    let client = common::client_for(&server);
    let series = fetch_daily_series(&client, CacheMode::Use).await;

    mock.assert();
    assert!(series.is_empty());
}

#[tokio::test]
async fn history_undecodable_bytes_are_replaced_not_fatal() {
    let server = common::setup_server();
    let mut body = b"Date,Open,High,Low,Close\n".to_vec();
    body.extend_from_slice(b"2025-01-02,\xff\xfe,2,3,2650.25\n");
    let mock = server.mock(|when, then| {
        when.method(GET).path(common::HISTORY_PATH);
        then.status(200).body(body);
    });

    let client = common::client_for(&server);
    let series = fetch_daily_series(&client, CacheMode::Use).await;

    mock.assert();
    assert_eq!(series.len(), 1);
    assert_eq!(series.points()[0].price(), 2650.25);
}
