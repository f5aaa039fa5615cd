//! Networked conditional re-fetch against a running server.

use std::time::Duration;

mod common;

#[tokio::test]
async fn test_etag_round_trip_over_http() {
    let (addr, shutdown) = common::spawn_server(common::sample_store()).await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let url = format!("http://{}/search", addr);

    let first = client
        .get(&url)
        .query(&[("name", "alic")])
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(first.status(), 200);
    let etag = first
        .headers()
        .get(reqwest::header::ETAG)
        .expect("missing ETag")
        .to_str()
        .unwrap()
        .to_string();
    let body: Vec<serde_json::Value> = first.json().await.unwrap();
    assert_eq!(body.len(), 2);

    // Same query, same validator: nothing to resend.
    let second = client
        .get(&url)
        .query(&[("name", "alic")])
        .header(reqwest::header::IF_NONE_MATCH, &etag)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 304);
    assert!(second.bytes().await.unwrap().is_empty());

    // Different results: full response with a new validator.
    let third = client
        .get(&url)
        .query(&[("name", "bob")])
        .header(reqwest::header::IF_NONE_MATCH, &etag)
        .send()
        .await
        .unwrap();
    assert_eq!(third.status(), 200);
    assert_ne!(third.headers()[reqwest::header::ETAG].to_str().unwrap(), etag);

    shutdown.trigger();
}
