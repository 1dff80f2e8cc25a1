use crate::helpers::spawn_app;
use crate::helpers::spawn_app_without_relay;

#[tokio::test]
async fn health_check() {
    let app = spawn_app().await;

    let resp = app
        .api_client
        .get(format!("{}/health_check", app.base_url))
        .send()
        .await
        .expect("execute request");
    assert!(resp.status().is_success());
    assert_eq!(resp.content_length().unwrap(), 0); // empty body
}

#[tokio::test]
async fn health_check_does_not_touch_relay() {
    let app = spawn_app_without_relay().await;

    let resp = app
        .api_client
        .get(format!("{}/health_check", app.base_url))
        .send()
        .await
        .expect("execute request");
    assert!(resp.status().is_success());
    assert!(app.relay_server.received_requests().await.unwrap().is_empty());
}
