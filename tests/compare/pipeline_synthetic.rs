use crate::common;
use aurum_rs::spot::JsonApiSource;
use aurum_rs::{ComparisonBuilder, ComparisonRequest, SpotResolver, Unavailable, compare};
use chrono::NaiveDate;
use url::Url;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn full_pipeline_against_fixtures() {
    let server = common::setup_server();
    let spot = common::mock_spot_usd(&server);
    let history = common::mock_history(&server);

    let client = common::client_for(&server);
    let r = ComparisonBuilder::new(&client)
        .purchase_amount(1000.0)
        .years_back(2)
        .today(d(2026, 10, 16))
        .fetch()
        .await
        .unwrap();

    spot.assert();
    history.assert();

    assert_eq!(r.spot, 2000.0);
    assert_eq!(r.target_date, d(2024, 10, 16));
    assert_eq!(r.hist_date, d(2024, 10, 16));
    assert_eq!(r.hist_price, 2674.50);
    assert_eq!(r.ounces_now, 0.5);
    assert_eq!(format!("{:.2}", r.grams_now), "15.55");
    assert_eq!(format!("{:.6}", r.ounces_then), "0.373902");
}

#[tokio::test]
async fn weekend_target_snaps_to_closest_trading_day() {
    let server = common::setup_server();
    let _spot = common::mock_spot_usd(&server);
    let _history = common::mock_history(&server);

    let client = common::client_for(&server);
    // 2023-10-15 was a Sunday: Friday 10-13 is two days away, Monday 10-16 one.
    let r = ComparisonBuilder::new(&client)
        .years_back(3)
        .today(d(2026, 10, 15))
        .fetch()
        .await
        .unwrap();

    assert_eq!(r.target_date, d(2023, 10, 15));
    assert_eq!(r.hist_date, d(2023, 10, 16));
    assert_eq!(r.hist_price, 1919.80);
}

#[tokio::test]
async fn spot_failure_stops_before_history_is_fetched() {
    let server = common::setup_server();
    let usd = common::mock_body(&server, common::SPOT_USD_PATH, 500, "down");
    let xau = common::mock_body(&server, common::SPOT_XAU_PATH, 500, "down");
    let script = common::mock_body(&server, common::SPOT_SCRIPT_PATH, 500, "down");
    let history = common::mock_history(&server);

    let client = common::client_for(&server);
    let err = compare(&client, ComparisonRequest::default()).await.unwrap_err();

    usd.assert();
    xau.assert();
    script.assert();
    history.assert_calls(0);
    assert_eq!(err, Unavailable::Spot);
}

#[tokio::test]
async fn history_failure_is_historical_unavailable() {
    let server = common::setup_server();
    let _spot = common::mock_spot_usd(&server);
    let history = common::mock_body(&server, common::HISTORY_PATH, 503, "busy");

    let client = common::client_for(&server);
    let err = ComparisonBuilder::new(&client)
        .today(d(2026, 10, 16))
        .fetch()
        .await
        .unwrap_err();

    history.assert();
    assert_eq!(err, Unavailable::Historical);
    assert_eq!(err.to_string(), "historical unavailable");
}

#[tokio::test]
async fn custom_spot_resolver_is_used() {
    let server = common::setup_server();
    let usd = common::mock_spot_usd(&server);
    let xau = common::mock_spot_xau(&server);
    let _history = common::mock_history(&server);

    let client = common::client_for(&server);
    let only_xau = SpotResolver::new(vec![Box::new(JsonApiSource::new(
        Url::parse(&server.url(common::SPOT_XAU_PATH)).unwrap(),
        None,
    ))]);

    let r = ComparisonBuilder::new(&client)
        .spot_resolver(only_xau)
        .today(d(2026, 10, 16))
        .fetch()
        .await
        .unwrap();

    usd.assert_calls(0);
    xau.assert();
    assert_eq!(r.spot, 2012.5);
}

#[tokio::test]
async fn repeated_runs_reuse_cached_bodies() {
    let server = common::setup_server();
    let spot = common::mock_spot_usd(&server);
    let history = common::mock_history(&server);

    let client = common::builder_for(&server).with_cache().build().unwrap();
    let builder = ComparisonBuilder::new(&client).today(d(2026, 10, 16));

    let first = builder.fetch().await.unwrap();
    let second = builder.fetch().await.unwrap();

    spot.assert_calls(1);
    history.assert_calls(1);
    assert_eq!(first, second);
}
